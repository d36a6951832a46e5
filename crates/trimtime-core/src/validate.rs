//! Input validation and normalization for customer and booking fields.

use chrono::{NaiveDate, NaiveDateTime};

use trimtime_types::config::SLOT_FORMAT;

/// Required length of a customer phone number.
pub const PHONE_LEN: usize = 11;

/// Required prefix of a customer phone number.
pub const PHONE_PREFIX: &str = "09";

/// Normalize a customer name: every whitespace-separated word capitalized
/// and joined by a single space.
///
/// Returns `None` when the name has fewer than two words.
///
/// # Examples
///
/// ```
/// use trimtime_core::validate::normalize_name;
///
/// assert_eq!(normalize_name("juan dela cruz").as_deref(), Some("Juan Dela Cruz"));
/// assert_eq!(normalize_name("  MARIA   santos ").as_deref(), Some("Maria Santos"));
/// assert_eq!(normalize_name("cher"), None);
/// ```
pub fn normalize_name(raw: &str) -> Option<String> {
    let words: Vec<String> = raw.split_whitespace().map(capitalize).collect();
    if words.len() < 2 {
        return None;
    }
    Some(words.join(" "))
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Exactly 11 ASCII digits starting with "09".
pub fn is_valid_phone(raw: &str) -> bool {
    raw.len() == PHONE_LEN
        && raw.starts_with(PHONE_PREFIX)
        && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Reformat an 8-digit `YYYYMMDD` entry as `YYYY-MM-DD` by fixed slicing.
///
/// No calendar check happens here. Slicing is by character, so short or
/// non-ASCII input never panics: `"2025"` becomes `"2025--"`.
pub fn format_date(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let year: String = chars.iter().take(4).collect();
    let month: String = chars.iter().skip(4).take(2).collect();
    let day: String = chars.iter().skip(6).collect();
    format!("{year}-{month}-{day}")
}

/// `YYYY-MM-DD` naming a real calendar day.
pub fn is_valid_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// A formatted date plus a slot label parse as a real moment.
pub fn is_valid_datetime(date: &str, time: &str) -> bool {
    is_valid_date(date)
        && NaiveDateTime::parse_from_str(&format!("{date} {time}"), &format!("%Y-%m-%d {SLOT_FORMAT}"))
            .is_ok()
}

/// Parse a 1-based menu choice. Anything but a positive integer is `None`.
pub fn parse_choice(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<usize>().ok().filter(|n| *n >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_capitalizes_each_word() {
        assert_eq!(
            normalize_name("juan dela cruz").as_deref(),
            Some("Juan Dela Cruz")
        );
    }

    #[test]
    fn test_normalize_name_lowercases_tail() {
        assert_eq!(normalize_name("JOHN REX").as_deref(), Some("John Rex"));
        assert_eq!(normalize_name("mcDonald o'neil").as_deref(), Some("Mcdonald O'neil"));
    }

    #[test]
    fn test_normalize_name_requires_two_words() {
        assert_eq!(normalize_name("juan"), None);
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name(""), None);
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("09171234567"));
        assert!(!is_valid_phone("0917123456"));
        assert!(!is_valid_phone("091712345678"));
        assert!(!is_valid_phone("19171234567"));
        assert!(!is_valid_phone("0917123456a"));
        assert!(!is_valid_phone("+9171234567"));
    }

    #[test]
    fn test_format_date_slices_fixed_positions() {
        assert_eq!(format_date("20250115"), "2025-01-15");
        assert_eq!(format_date("20250132"), "2025-01-32");
    }

    #[test]
    fn test_format_date_short_input_does_not_panic() {
        assert_eq!(format_date("2025"), "2025--");
        assert_eq!(format_date(""), "--");
        assert_eq!(format_date("2025é115"), "2025-é1-15");
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2025-01-15"));
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2025-02-29"));
        assert!(!is_valid_date("2025-01-32"));
        assert!(!is_valid_date("2025-1-5"));
        assert!(!is_valid_date("2025--"));
    }

    #[test]
    fn test_is_valid_datetime() {
        assert!(is_valid_datetime("2025-01-15", "08:00 AM"));
        assert!(is_valid_datetime("2025-01-15", "12:30 PM"));
        assert!(!is_valid_datetime("2025-01-32", "08:00 AM"));
        assert!(!is_valid_datetime("2025-01-15", "13:00 PM"));
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(1));
        assert_eq!(parse_choice(" 12 "), Some(12));
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("-1"), None);
        assert_eq!(parse_choice("+1"), None);
        assert_eq!(parse_choice("one"), None);
        assert_eq!(parse_choice(""), None);
    }
}
