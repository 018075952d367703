use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // An unterminated trailing tag is stripped as well
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>?").unwrap();
}

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// Parse a numeric string the way a form field would be read.
///
/// Surrounding whitespace is ignored and a blank string reads as zero.
/// Hex, octal and binary literals (`0x1f`, `0o17`, `0b101`) and
/// `Infinity` are accepted. Returns `None` for anything else that is not a
/// finite decimal number.
pub fn to_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix).ok().map(|n| n as f64);
    }

    // Rust accepts "inf" and "nan" spellings that are not numbers here
    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

/// Strip HTML tags, keeping only the text between them.
///
/// ```
/// use recase::html_to_text;
///
/// assert_eq!(html_to_text("<h1>Hello <b>World</b></h1>"), "Hello World");
/// ```
pub fn html_to_text(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// Value of cookie `name` in a `Cookie` header string, or `""` when absent.
pub fn get_value_from_cookie(name: &str, cookie: &str) -> String {
    let prefix = format!("{}=", name);
    cookie
        .split(';')
        .map(str::trim_start)
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .unwrap_or_default()
        .to_string()
}

/// Human readable file size: bytes below 1 KB, otherwise KB, MB or GB with
/// two decimals (none when `round` is set).
///
/// ```
/// use recase::format_file_size;
///
/// assert_eq!(format_file_size(512.0, false), "512 B");
/// assert_eq!(format_file_size(1536.0, false), "1.50 KB");
/// assert_eq!(format_file_size(1536.0, true), "2 KB");
/// ```
pub fn format_file_size(bytes: f64, round: bool) -> String {
    let precision = if round { 0 } else { 2 };

    if bytes < KB {
        format!("{} B", bytes.round())
    } else if bytes < MB {
        format!("{:.*} KB", precision, bytes / KB)
    } else if bytes < GB {
        format!("{:.*} MB", precision, bytes / MB)
    } else {
        format!("{:.*} GB", precision, bytes / GB)
    }
}
