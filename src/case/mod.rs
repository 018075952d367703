pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

pub use tokenizer::{break_to_words, break_to_words_with};

/// Case styles understood by [`CaseStyle::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    Camel,
    Pascal,
    Snake,
    Kebab,
    Title,
    Sentence,
    Upper,
    Lower,
    UpperBreak,
    LowerBreak,
    First,
}

/// Style-specific knobs. `join` is used by the broken styles, `caps` by
/// snake and kebab case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub join: Option<String>,
    pub caps: bool,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 11] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Kebab,
        CaseStyle::Title,
        CaseStyle::Sentence,
        CaseStyle::Upper,
        CaseStyle::Lower,
        CaseStyle::UpperBreak,
        CaseStyle::LowerBreak,
        CaseStyle::First,
    ];

    /// Convert `input` to this style.
    pub fn apply(&self, input: &str, options: &ConvertOptions) -> String {
        let join = options.join.as_deref();
        match self {
            CaseStyle::Camel => to_camel_case(input),
            CaseStyle::Pascal => to_pascal_case(input),
            CaseStyle::Snake => to_snake_case(input, options.caps),
            CaseStyle::Kebab => to_kebab_case(input, options.caps),
            CaseStyle::Title => to_title_case(input),
            CaseStyle::Sentence => to_sentence_case(input),
            CaseStyle::Upper => to_upper_case(input),
            CaseStyle::Lower => to_lower_case(input),
            CaseStyle::UpperBreak => to_upper_case_break(input, join),
            CaseStyle::LowerBreak => to_lower_case_break(input, join),
            CaseStyle::First => to_first_case(input),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Title => "title",
            CaseStyle::Sentence => "sentence",
            CaseStyle::Upper => "upper",
            CaseStyle::Lower => "lower",
            CaseStyle::UpperBreak => "upper-break",
            CaseStyle::LowerBreak => "lower-break",
            CaseStyle::First => "first",
        }
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept any spelling of the style name: "upper-break", "upperBreak", "UPPER_BREAK"
        let key = to_kebab_case(s, false);
        let key = key.strip_suffix("-case").unwrap_or(&key);
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name() == key)
            .ok_or_else(|| format!("Unknown case style: {}", s))
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capitalize the first character and lowercase the rest.
///
/// ```
/// use recase::to_first_case;
///
/// assert_eq!(to_first_case("hello World"), "Hello world");
/// ```
pub fn to_first_case(input: &str) -> String {
    let mut graphemes = input.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + &graphemes.as_str().to_lowercase(),
        None => String::new(),
    }
}

pub fn to_lower_case(input: &str) -> String {
    input.to_lowercase()
}

pub fn to_upper_case(input: &str) -> String {
    input.to_uppercase()
}

/// Lowercase words joined by `join`, or a single space.
pub fn to_lower_case_break(input: &str, join: Option<&str>) -> String {
    break_to_words(input).join(join.unwrap_or(" "))
}

/// Uppercase words joined by `join`, or a single space.
///
/// ```
/// use recase::to_upper_case_break;
///
/// assert_eq!(to_upper_case_break("HelloWorld", Some("! ")), "HELLO! WORLD");
/// ```
pub fn to_upper_case_break(input: &str, join: Option<&str>) -> String {
    break_to_words(input)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(join.unwrap_or(" "))
}

pub fn to_title_case(input: &str) -> String {
    break_to_words_with(input, to_first_case)
}

/// Capitalize the first word of every sentence and lowercase the others.
/// Sentences are separated by `.` and joined back with `". "`.
///
/// ```
/// use recase::to_sentence_case;
///
/// assert_eq!(
///     to_sentence_case("hello world. how are you"),
///     "Hello world. How are you"
/// );
/// ```
pub fn to_sentence_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .map(|sentence| {
            break_to_words(sentence)
                .iter()
                .enumerate()
                .map(|(i, word)| if i == 0 { to_first_case(word) } else { word.clone() })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(". ")
}

pub fn to_camel_case(input: &str) -> String {
    break_to_words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| if i == 0 { word.clone() } else { to_first_case(word) })
        .collect()
}

pub fn to_pascal_case(input: &str) -> String {
    break_to_words(input)
        .iter()
        .map(|word| to_first_case(word))
        .collect()
}

/// Words joined by `_`, uppercased when `caps` is set.
pub fn to_snake_case(input: &str, caps: bool) -> String {
    join_cased(input, "_", caps)
}

/// Words joined by `-`, uppercased when `caps` is set.
pub fn to_kebab_case(input: &str, caps: bool) -> String {
    join_cased(input, "-", caps)
}

fn join_cased(input: &str, separator: &str, caps: bool) -> String {
    let joined = break_to_words(input).join(separator);
    if caps {
        joined.to_uppercase()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_case() {
        assert_eq!(to_first_case("hello world"), "Hello world");
        assert_eq!(to_first_case("HELLO"), "Hello");
        assert_eq!(to_first_case("élan"), "Élan");
        assert_eq!(to_first_case(""), "");
    }

    #[test]
    fn test_camel_and_pascal() {
        assert_eq!(to_camel_case("hello world"), "helloWorld");
        assert_eq!(to_camel_case("Hello_World"), "helloWorld");
        assert_eq!(to_camel_case("HTTPServer"), "httpServer");
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("user-id"), "UserId");
    }

    #[test]
    fn test_snake_and_kebab() {
        assert_eq!(to_snake_case("Hello World", true), "HELLO_WORLD");
        assert_eq!(to_snake_case("Hello World", false), "hello_world");
        assert_eq!(to_snake_case("helloWorld2", false), "hello_world2");
        assert_eq!(to_kebab_case("hello world", false), "hello-world");
        assert_eq!(to_kebab_case("hello world", true), "HELLO-WORLD");
    }

    #[test]
    fn test_snake_case_is_idempotent() {
        for input in ["Hello World", "HTTPServer", "userID 42", "a2 3", "already_snake"] {
            let once = to_snake_case(input, false);
            assert_eq!(to_snake_case(&once, false), once);
            let kebab = to_kebab_case(input, false);
            assert_eq!(to_kebab_case(&kebab, false), kebab);
        }

        // Uppercase letters glued to digits re-split, so only letters here
        for input in ["Hello World", "HTTPServer", "already_snake"] {
            let caps = to_snake_case(input, true);
            assert_eq!(to_snake_case(&caps, true), caps);
        }
    }

    #[test]
    fn test_breaks() {
        assert_eq!(to_lower_case_break("HelloWorld", None), "hello world");
        assert_eq!(to_lower_case_break("HelloWorld", Some("/")), "hello/world");
        assert_eq!(to_upper_case_break("HelloWorld", None), "HELLO WORLD");
        assert_eq!(to_upper_case_break("HelloWorld", Some("! ")), "HELLO! WORLD");
    }

    #[test]
    fn test_title_and_sentence() {
        assert_eq!(to_title_case("hello world"), "Hello World");
        assert_eq!(to_title_case("helloWorld"), "Hello World");
        assert_eq!(to_sentence_case("hello world. how are you"), "Hello world. How are you");
        assert_eq!(to_sentence_case("User"), "User");
        assert_eq!(to_sentence_case("ONE. TWO"), "One. Two");
    }

    #[test]
    fn test_plain_case() {
        assert_eq!(to_lower_case("Hello World"), "hello world");
        assert_eq!(to_upper_case("Hello World"), "HELLO WORLD");
    }

    #[test]
    fn test_empty_input_everywhere() {
        let options = ConvertOptions {
            join: Some("+".to_string()),
            caps: true,
        };
        for style in CaseStyle::ALL {
            assert_eq!(style.apply("", &options), "", "style {}", style);
            assert_eq!(style.apply("", &ConvertOptions::default()), "", "style {}", style);
        }
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("camel".parse::<CaseStyle>(), Ok(CaseStyle::Camel));
        assert_eq!("upper-break".parse::<CaseStyle>(), Ok(CaseStyle::UpperBreak));
        assert_eq!("lowerBreak".parse::<CaseStyle>(), Ok(CaseStyle::LowerBreak));
        assert_eq!("snake_case".parse::<CaseStyle>(), Ok(CaseStyle::Snake));
        assert!("shouty".parse::<CaseStyle>().is_err());

        for style in CaseStyle::ALL {
            assert_eq!(style.to_string().parse::<CaseStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_apply_dispatch() {
        let options = ConvertOptions {
            join: Some("_".to_string()),
            caps: true,
        };
        assert_eq!(CaseStyle::Kebab.apply("hello world", &options), "HELLO-WORLD");
        assert_eq!(CaseStyle::LowerBreak.apply("helloWorld", &options), "hello_world");
        assert_eq!(CaseStyle::Camel.apply("hello world", &options), "helloWorld");
    }
}
