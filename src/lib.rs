pub mod case;
pub mod cli;
pub mod collections;
pub mod config;
pub mod error;
pub mod inflect;
pub mod object;
pub mod template;
pub mod text;

pub use case::{
    break_to_words, break_to_words_with, to_camel_case, to_first_case, to_kebab_case,
    to_lower_case, to_lower_case_break, to_pascal_case, to_sentence_case, to_snake_case,
    to_title_case, to_upper_case, to_upper_case_break, CaseStyle, ConvertOptions,
};
pub use collections::{get_map_key, get_map_keys, group_by, search_map_values};
pub use config::Config;
pub use error::{Error, Result};
pub use inflect::singular;
pub use object::{
    deep_copy, get_value_by_path, object_to_path_value_set, omit, path_to_object,
    path_value_set_to_object, prune,
};
pub use template::{apply_template, PLACEHOLDERS};
pub use text::{format_file_size, get_value_from_cookie, html_to_text, to_number};

/// One converted input, as printed by the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: String,
    pub output: ConversionOutput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutput {
    Text(String),
    Words(Vec<String>),
}
