//! Text canonicalisation shared by every extractor.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Collapses every whitespace run (newlines included) to one space and trims the ends.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Whitespace-normalised text with adjacent repeated words collapsed to one.
pub fn collapse_repeated_words(text: &str) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    words.dedup();
    words.join(" ")
}

/// Splits on every line-break character PDF text extraction can emit.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\r'
                | '\u{0B}'
                | '\u{0C}'
                | '\u{1C}'
                | '\u{1D}'
                | '\u{1E}'
                | '\u{85}'
                | '\u{2028}'
                | '\u{2029}'
        )
    })
}

/// Trimmed, non-empty physical lines in document order.
pub fn content_lines(text: &str) -> Vec<&str> {
    split_lines(text)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn strip_zero_width(text: &str) -> String {
    text.replace(ZERO_WIDTH_SPACE, "")
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// True when the text has at least one cased letter and none of them are lower-case.
pub fn is_upper(text: &str) -> bool {
    text.chars().any(is_cased) && !text.chars().any(char::is_lowercase)
}

/// True when every cased run starts upper-case and continues lower-case.
pub fn is_title_case(text: &str) -> bool {
    let mut prev_cased = false;
    let mut seen_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else {
            prev_cased = false;
        }
    }
    seen_cased
}

/// Upper-cases the first letter of every cased run and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if is_cased(c) {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}

/// Upper-cases the first character and lower-cases the remainder.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn starts_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

pub fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the `n`th character, or the text length when `n` runs past the end.
pub fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(i, _)| i)
}

/// The first `n` characters of `text`.
pub fn take_chars(text: &str, n: usize) -> &str {
    &text[..byte_offset(text, n)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Jane \n\n Smith\t\tEngineer  "), "Jane Smith Engineer");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for sample in ["a  b\nc", "\n\n", "  x ", "Led\u{2028}team\r\nof 8", ""] {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_collapse_repeated_words() {
        assert_eq!(collapse_repeated_words("Best Best  Paper Award"), "Best Paper Award");
        assert_eq!(collapse_repeated_words("Award Award Award"), "Award");
        assert_eq!(collapse_repeated_words("Best Paper Best"), "Best Paper Best");
        assert_eq!(collapse_repeated_words(""), "");
    }

    #[test]
    fn test_content_lines_drops_blank_and_form_feeds() {
        let lines = content_lines("Jane Smith\r\n\n  \u{0C}Engineer\u{2028}Denver, CO ");
        assert_eq!(lines, vec!["Jane Smith", "Engineer", "Denver, CO"]);
    }

    #[test]
    fn test_is_upper_requires_a_cased_letter() {
        assert!(is_upper("EXPERIENCE"));
        assert!(is_upper("AWS 2020"));
        assert!(!is_upper("2020"));
        assert!(!is_upper("Experience"));
    }

    #[test]
    fn test_is_title_case() {
        assert!(is_title_case("Jane Smith"));
        assert!(is_title_case("Mary-Jane O'Neil"));
        assert!(!is_title_case("JANE SMITH"));
        assert!(!is_title_case("jane smith"));
        assert!(!is_title_case("1234"));
    }

    #[test]
    fn test_title_case_matches_word_runs() {
        assert_eq!(title_case("JANE smith"), "Jane Smith");
        assert_eq!(title_case("mary-jane o'neil"), "Mary-Jane O'Neil");
        assert_eq!(title_case("increased revenue"), "Increased Revenue");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pLATFORM"), "Platform");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_take_chars_respects_char_boundaries() {
        assert_eq!(take_chars("héllo", 2), "hé");
        assert_eq!(take_chars("abc", 10), "abc");
    }
}
