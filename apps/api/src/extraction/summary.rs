//! Summary Extractor.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::classifier::starts_with_bullet;
use crate::extraction::lexicon::{SUMMARY_HEADERS, SUMMARY_STOP_HEADERS};
use crate::extraction::normalize::{char_len, is_upper, split_lines};

static HEADER_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[:\-]+").unwrap());

const MAX_SUMMARY_LINES: usize = 25;

fn clean_header(line: &str) -> String {
    HEADER_PUNCTUATION
        .replace_all(&line.trim().to_lowercase(), "")
        .trim()
        .to_string()
}

/// Text under the first summary-style header, joined with single spaces.
pub fn extract_summary(text: &str) -> String {
    let lines: Vec<&str> = split_lines(text).collect();
    let Some(start) = lines
        .iter()
        .position(|line| SUMMARY_HEADERS.contains(&clean_header(line).as_str()))
    else {
        return String::new();
    };

    let mut summary: Vec<&str> = Vec::new();
    for content in lines[start + 1..].iter().map(|l| l.trim()) {
        if content.is_empty() {
            continue;
        }
        if SUMMARY_STOP_HEADERS.contains(&clean_header(content).as_str()) {
            break;
        }
        // Single-word banner such as "EXPERIENCE:".
        if is_upper(content) && char_len(content) < 30 && !content.contains(' ') {
            break;
        }
        if starts_with_bullet(content) {
            break;
        }
        summary.push(content);
        if summary.len() >= MAX_SUMMARY_LINES {
            break;
        }
    }
    summary.join(" ")
}
