use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Camel words (with any leading uppercase run), bare acronyms, digit runs
    static ref WORD: Regex = Regex::new(r"[A-Z]*[a-z]+[0-9]*|[A-Z]+|[0-9]+").unwrap();
}

/// Break a string into lowercase words.
///
/// Works on camelCase, PascalCase, snake_case, kebab-case and plain
/// sentences alike:
///
/// ```
/// use recase::break_to_words;
///
/// assert_eq!(break_to_words("helloWorld"), vec!["hello", "world"]);
/// assert_eq!(break_to_words("HTTPServer"), vec!["http", "server"]);
/// assert_eq!(break_to_words("Hello-World2"), vec!["hello", "world2"]);
/// ```
///
/// Anything that is not an ASCII letter or digit separates words and is
/// dropped. Never fails: empty or unmatched input yields an empty vector.
pub fn break_to_words(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut words = Vec::new();

    for m in WORD.find_iter(input) {
        let word = m.as_str();
        let upper = word.bytes().take_while(u8::is_ascii_uppercase).count();

        // An acronym directly followed by a capitalized word ("HTTPServer")
        // gives its last capital to the word when at least two remain.
        if upper >= 2 && upper < word.len() {
            let split = if upper == 2 { upper } else { upper - 1 };
            words.push(word[..split].to_ascii_lowercase());
            words.push(word[split..].to_ascii_lowercase());
        } else {
            words.push(word.to_ascii_lowercase());
        }
    }

    words
}

/// Break a string into words, format each one and join them with a space.
///
/// ```
/// use recase::{break_to_words_with, to_first_case};
///
/// assert_eq!(break_to_words_with("helloWorld", to_first_case), "Hello World");
/// ```
pub fn break_to_words_with<F>(input: &str, format: F) -> String
where
    F: Fn(&str) -> String,
{
    break_to_words(input)
        .iter()
        .map(|word| format(word.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}
