use lazy_static::lazy_static;
use regex::Regex;

enum Replacement {
    Literal(&'static str),
    Derived(fn(&str) -> String),
}

struct Rule {
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    fn literal(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement: Replacement::Literal(replacement),
        }
    }

    fn derived(pattern: &str, replacement: fn(&str) -> String) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement: Replacement::Derived(replacement),
        }
    }
}

fn strip_es(matched: &str) -> String {
    matched[..matched.len() - 2].to_string()
}

lazy_static! {
    // Order matters: the first matching rule wins
    static ref SINGULAR_RULES: Vec<Rule> = vec![
        Rule::literal(r"(?i)children$", "child"),
        Rule::literal(r"(?i)men$", "man"),
        Rule::literal(r"(?i)women$", "woman"),
        Rule::literal(r"(?i)teeth$", "tooth"),
        Rule::literal(r"(?i)feet$", "foot"),
        Rule::derived(r"(?i)(buses|dishes|matches)$", strip_es),
        Rule::literal(r"(?i)oes$", "o"),
        Rule::literal(r"(?i)ies$", "y"),
        Rule::literal(r"(?i)ves$", "f"),
        Rule::literal(r"(?i)cacti$", "cactus"),
        Rule::literal(r"(?i)data$", "datum"),
        Rule::literal(r"(?i)phenomena$", "phenomenon"),
        Rule::literal(r"(?i)s$", ""),
    ];
}

/// Convert a plural word to its singular form.
///
/// Uses a short fixed rule list rather than a dictionary, so words that
/// already end in "s" lose it ("bus" becomes "bu").
///
/// ```
/// use recase::singular;
///
/// assert_eq!(singular("children"), "child");
/// assert_eq!(singular("parties"), "party");
/// assert_eq!(singular("cats"), "cat");
/// ```
pub fn singular(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    for rule in SINGULAR_RULES.iter() {
        if let Some(m) = rule.pattern.find(word) {
            let replacement = match &rule.replacement {
                Replacement::Literal(text) => text.to_string(),
                Replacement::Derived(derive) => derive(m.as_str()),
            };
            return format!("{}{}", &word[..m.start()], replacement);
        }
    }

    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_forms() {
        assert_eq!(singular("children"), "child");
        assert_eq!(singular("men"), "man");
        assert_eq!(singular("women"), "woman");
        assert_eq!(singular("teeth"), "tooth");
        assert_eq!(singular("feet"), "foot");
        assert_eq!(singular("cacti"), "cactus");
        assert_eq!(singular("data"), "datum");
        assert_eq!(singular("phenomena"), "phenomenon");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(singular("buses"), "bus");
        assert_eq!(singular("dishes"), "dish");
        assert_eq!(singular("matches"), "match");
        assert_eq!(singular("potatoes"), "potato");
        assert_eq!(singular("parties"), "party");
        assert_eq!(singular("wolves"), "wolf");
        assert_eq!(singular("cats"), "cat");
        assert_eq!(singular("schoolchildren"), "schoolchild");
        assert_eq!(singular("minibuses"), "minibus");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(singular("CHILDREN"), "child");
        assert_eq!(singular("Cats"), "Cat");
        assert_eq!(singular("DISHES"), "DISH");
    }

    #[test]
    fn test_unmatched_and_empty() {
        assert_eq!(singular("cat"), "cat");
        assert_eq!(singular("sheep"), "sheep");
        assert_eq!(singular(""), "");
    }

    #[test]
    fn test_trailing_s_is_always_stripped() {
        assert_eq!(singular("bus"), "bu");
        assert_eq!(singular("status"), "statu");
    }
}
