//! Person Resolver: ordered strategies for the candidate's name.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::lexicon::{
    contains_any, NAME_BOILERPLATE, NAME_CONTACT_MARKERS, NAME_TAGGER_SKIPS, NON_NAME_INDICATORS,
};
use crate::extraction::normalize::{has_digit, is_title_case, is_upper, title_case};
use crate::nlp::{EntityLabel, EntityTagger};

static CAPITALIZED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2}$").unwrap());

const SUMMARY_SCAN_LINES: usize = 50;
const BACKSCAN_DEPTH: usize = 9;
const TOP_SCAN_LINES: usize = 5;
const TAGGER_SCAN_LINES: usize = 15;

type NameStrategy = fn(&[&str], Option<&dyn EntityTagger>) -> Option<String>;

const STRATEGIES: &[(&str, NameStrategy)] = &[
    ("summary_backscan", summary_backscan),
    ("top_of_document", top_of_document),
    ("entity_tagger", tagged_person),
    ("first_line", first_line),
];

/// Resolves the name from trimmed non-empty lines, or returns empty.
pub fn resolve_name(lines: &[&str], tagger: Option<&dyn EntityTagger>) -> String {
    STRATEGIES
        .iter()
        .find_map(|(strategy, resolve)| {
            resolve(lines, tagger).map(|name| {
                debug!(strategy = *strategy, "Name resolved");
                name
            })
        })
        .unwrap_or_default()
}

fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

fn mentions_non_name(line: &str) -> bool {
    contains_any(&line.to_lowercase(), NON_NAME_INDICATORS)
}

/// LinkedIn exports print the name a few lines above the "Summary" heading.
fn summary_backscan(lines: &[&str], _: Option<&dyn EntityTagger>) -> Option<String> {
    for (i, line) in lines.iter().enumerate().take(SUMMARY_SCAN_LINES) {
        if !line.to_lowercase().starts_with("summary") {
            continue;
        }
        let floor = i.saturating_sub(BACKSCAN_DEPTH);
        for candidate in lines[floor..i].iter().rev() {
            let words = word_count(candidate);
            if (2..=4).contains(&words)
                && !has_digit(candidate)
                && !candidate.contains('@')
                && !mentions_non_name(candidate)
                && (is_title_case(candidate) || is_upper(candidate))
            {
                return Some(title_case(candidate));
            }
        }
    }
    None
}

fn top_of_document(lines: &[&str], _: Option<&dyn EntityTagger>) -> Option<String> {
    lines
        .iter()
        .take(TOP_SCAN_LINES)
        .filter(|line| {
            let lower = line.to_lowercase();
            !contains_any(&lower, NAME_CONTACT_MARKERS) && !contains_any(&lower, NON_NAME_INDICATORS)
        })
        .find(|line| CAPITALIZED_NAME.is_match(line))
        .map(|line| title_case(line))
}

fn tagged_person(lines: &[&str], tagger: Option<&dyn EntityTagger>) -> Option<String> {
    let tagger = tagger?;
    for line in lines.iter().take(TAGGER_SCAN_LINES) {
        if contains_any(&line.to_lowercase(), NAME_TAGGER_SKIPS) {
            continue;
        }
        let entities = match tagger.tag_entities(line) {
            Ok(entities) => entities,
            Err(e) => {
                debug!("Entity tagger failed on name line: {e}");
                continue;
            }
        };
        let hit = entities.into_iter().find(|ent| {
            let lower = ent.text.to_lowercase();
            ent.label == EntityLabel::Person
                && word_count(&ent.text) >= 2
                && !NAME_BOILERPLATE.contains(&lower.as_str())
                && !contains_any(&lower, NON_NAME_INDICATORS)
        });
        if let Some(ent) = hit {
            return Some(title_case(&ent.text));
        }
    }
    None
}

fn first_line(lines: &[&str], _: Option<&dyn EntityTagger>) -> Option<String> {
    let first = lines.first()?;
    ((2..=4).contains(&word_count(first)) && !has_digit(first) && !mentions_non_name(first))
        .then(|| title_case(first))
}
