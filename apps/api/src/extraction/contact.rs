//! Contact extractors: email, phone, and LinkedIn profile URL.
//!
//! Email and phone scan normalised text; the profile scan needs line structure
//! because a PDF often wraps the handle onto the line after `/in/`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::normalize::content_lines;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z0-9_]+").unwrap());

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}").unwrap());

static PROFILE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"linkedin\.com/in/\s*([\w-]+)").unwrap());

static PROFILE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\w-]+)\s*\(linkedin\)").unwrap());

static MARKER_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\(linkedin\)").unwrap());

static HANDLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w-]+$").unwrap());

const PROFILE_SCAN_LINES: usize = 50;
const SPLIT_HANDLE_SCAN_LINES: usize = 30;

/// First email address in the text, or empty.
pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-like digit group in the text, or empty.
pub fn extract_phone(text: &str) -> String {
    PHONE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Canonical `https://linkedin.com/in/<handle>` URL, or empty.
///
/// Strategies, first hit wins:
/// 1. `linkedin.com/in/<handle>` anywhere in the first 50 lines
/// 2. `<handle> (LinkedIn)` marker, as LinkedIn's own PDF export prints it
/// 3. a line ending in `linkedin.com/in/` with the handle leading the next line
pub fn extract_linkedin(text: &str) -> String {
    let lines = content_lines(text);
    let head: Vec<&str> = lines.iter().take(PROFILE_SCAN_LINES).copied().collect();
    let block = head.join(" ").to_lowercase();

    let handle = capture_handle(&PROFILE_URL, &block)
        .or_else(|| capture_handle(&PROFILE_MARKER, &block))
        .or_else(|| split_line_handle(&lines));

    handle
        .map(|h| format!("https://linkedin.com/in/{h}"))
        .unwrap_or_default()
}

fn capture_handle(pattern: &Regex, block: &str) -> Option<String> {
    pattern
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn split_line_handle(lines: &[&str]) -> Option<String> {
    for (i, line) in lines.iter().take(SPLIT_HANDLE_SCAN_LINES).enumerate() {
        let lower = line.to_lowercase();
        if !lower.contains("linkedin.com/in/") || !lower.ends_with("/in/") {
            continue;
        }
        let Some(next) = lines.get(i + 1) else {
            continue;
        };
        let first_token = next.split_whitespace().next().unwrap_or_default();
        let username = MARKER_SUFFIX.replace_all(first_token, "");
        let username = username.trim();
        if HANDLE.is_match(username) {
            return Some(username.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_returns_exact_address() {
        assert_eq!(
            extract_email("Reach me at jane.doe-smith@mail.example.com today"),
            "jane.doe-smith@mail.example.com"
        );
    }

    #[test]
    fn test_email_missing_is_empty() {
        assert_eq!(extract_email("no address here @ all"), "");
    }

    #[test]
    fn test_phone_dashed() {
        assert_eq!(extract_phone("Phone: 415-555-0100"), "415-555-0100");
    }

    #[test]
    fn test_phone_parenthesised_area_code() {
        assert_eq!(extract_phone("Call (415) 555 0100 now"), "(415) 555 0100");
    }

    #[test]
    fn test_phone_with_country_code_prefix_falls_back_to_local_digits() {
        assert_eq!(extract_phone("+1-555-123-4567"), "555-123-4567");
    }

    #[test]
    fn test_linkedin_canonical_form() {
        assert_eq!(
            extract_linkedin("Jane Doe\nLinkedIn.com/in/janedoe"),
            "https://linkedin.com/in/janedoe"
        );
    }

    #[test]
    fn test_linkedin_marker_form() {
        assert_eq!(
            extract_linkedin("Contact\nwww.linkedin.com\njanedoe (LinkedIn)"),
            "https://linkedin.com/in/janedoe"
        );
    }

    #[test]
    fn test_linkedin_split_line_form() {
        assert_eq!(
            extract_linkedin("Contact\nwww.linkedin.com/in/\njanedoe\nSummary"),
            "https://linkedin.com/in/janedoe"
        );
    }

    #[test]
    fn test_split_line_handle_strips_marker() {
        let lines = vec!["linkedin.com/in/", "JaneDoe(LinkedIn)"];
        assert_eq!(split_line_handle(&lines), Some("JaneDoe".to_string()));
    }

    #[test]
    fn test_linkedin_absent_is_empty() {
        assert_eq!(extract_linkedin("Jane Doe\nDenver, CO"), "");
    }
}
