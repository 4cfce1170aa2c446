//! Role Resolver: the headline job title, anchored on the resolved name.

use tracing::debug;

use crate::extraction::lexicon::{contains_any, ROLE_KEYWORDS, ROLE_SKIP_KEYWORDS};
use crate::extraction::normalize::{normalize, starts_uppercase};

const NAME_SCAN_LINES: usize = 50;
const ROLE_LOOKAHEAD: usize = 5;
const HEADER_SCAN_LINES: usize = 10;
const MAX_ROLE_PHRASE_WORDS: usize = 12;

type RoleStrategy = fn(&[&str], &str) -> Option<String>;

const STRATEGIES: &[(&str, RoleStrategy)] = &[
    ("name_anchored", name_anchored),
    ("header_line", header_line),
];

/// Resolves the role for `name`. An empty name yields an empty role.
pub fn resolve_role(lines: &[&str], name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    STRATEGIES
        .iter()
        .find_map(|(strategy, resolve)| {
            resolve(lines, name).map(|role| {
                debug!(strategy = *strategy, "Role resolved");
                role
            })
        })
        .unwrap_or_default()
}

fn has_role_keyword(text: &str) -> bool {
    contains_any(&text.to_lowercase(), ROLE_KEYWORDS)
}

/// The lines right under a standalone name line usually carry the headline.
fn name_anchored(lines: &[&str], name: &str) -> Option<String> {
    let name_lower = name.to_lowercase();
    let name_words = name.split_whitespace().count();

    for (i, line) in lines.iter().enumerate().take(NAME_SCAN_LINES) {
        let lower = line.to_lowercase();
        let standalone = lower.contains(&name_lower)
            && line.split_whitespace().count() <= name_words + 1
            && !contains_any(&lower, ROLE_SKIP_KEYWORDS);
        if !standalone {
            continue;
        }

        let mut parts: Vec<&str> = Vec::new();
        for candidate in lines.iter().skip(i + 1).take(ROLE_LOOKAHEAD) {
            let candidate_lower = candidate.to_lowercase();
            // "City, Region" or an "... Area" line means the headline is over.
            if candidate_lower.contains("area")
                || candidate.split(',').count() == 2
                || contains_any(&candidate_lower, ROLE_SKIP_KEYWORDS)
            {
                break;
            }
            if has_role_keyword(candidate)
                || (starts_uppercase(candidate)
                    && candidate.split_whitespace().count() < MAX_ROLE_PHRASE_WORDS)
            {
                parts.push(candidate);
            } else if !parts.is_empty() {
                break;
            }
        }
        if !parts.is_empty() {
            return Some(normalize(&parts.join(" ")));
        }
    }
    None
}

/// Traditional resumes put "Title | Title / Title" on one header line.
fn header_line(lines: &[&str], _name: &str) -> Option<String> {
    lines
        .iter()
        .take(HEADER_SCAN_LINES)
        .filter(|line| {
            (line.contains('|') || line.contains(" / ") || line.contains(" • "))
                && has_role_keyword(line)
        })
        .find_map(|line| {
            line.split(['|', '/', '•'])
                .map(str::trim)
                .find(|part| has_role_keyword(part))
                .map(str::to_string)
        })
}
