use crate::case::{to_first_case, to_lower_case, to_sentence_case, to_snake_case, to_upper_case};

/// Template tags recognised by [`apply_template`], in substitution order.
pub const PLACEHOLDERS: [&str; 6] = [
    "#{upperCase}",
    "#{snakeCase}",
    "#{upperSnakeCase}",
    "#{lowerCase}",
    "#{sentenceCase}",
    "#{firstCase}",
];

/// Fill a message template with case variants of `value`.
///
/// Each tag is replaced at its first occurrence only; repeated tags and
/// unknown tags are left as they are.
///
/// ```
/// use recase::apply_template;
///
/// assert_eq!(
///     apply_template("Cannot create a #{lowerCase}. #{sentenceCase} exists.", "User"),
///     "Cannot create a user. User exists."
/// );
/// ```
pub fn apply_template(template: &str, value: &str) -> String {
    let substitutions = [
        to_upper_case(value),
        to_snake_case(value, false),
        to_snake_case(value, true),
        to_lower_case(value),
        to_sentence_case(value),
        to_first_case(value),
    ];

    PLACEHOLDERS
        .iter()
        .zip(substitutions.iter())
        .fold(template.to_string(), |text, (tag, substitution)| {
            text.replacen(tag, substitution, 1)
        })
}
