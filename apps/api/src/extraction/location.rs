//! Location Resolver: "City, ST" pattern first, tagged place names second.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::lexicon::TECH_BLACKLIST;
use crate::extraction::normalize::{char_len, content_lines, take_chars};
use crate::nlp::{EntityLabel, EntityTagger};

static CITY_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]+(?:\s[A-Z][a-z]+)*),\s([A-Z]{2})(?:\s*\(Remote\))?").unwrap()
});

const PATTERN_SCAN_LINES: usize = 10;

/// Characters of the document handed to the tagger.
pub const TAGGER_WINDOW_CHARS: usize = 2000;

type LocationStrategy = fn(&str, Option<&dyn EntityTagger>) -> Option<String>;

const STRATEGIES: &[(&str, LocationStrategy)] = &[
    ("city_state_pattern", city_state_pattern),
    ("entity_tagger", tagged_place),
];

pub fn resolve_location(text: &str, tagger: Option<&dyn EntityTagger>) -> String {
    STRATEGIES
        .iter()
        .find_map(|(strategy, resolve)| {
            resolve(text, tagger).map(|location| {
                debug!(strategy = *strategy, "Location resolved");
                location
            })
        })
        .unwrap_or_default()
}

fn city_state_pattern(text: &str, _: Option<&dyn EntityTagger>) -> Option<String> {
    content_lines(text)
        .into_iter()
        .take(PATTERN_SCAN_LINES)
        .find_map(|line| CITY_STATE.captures(line))
        .map(|caps| format!("{}, {}", &caps[1], &caps[2]))
}

fn tagged_place(text: &str, tagger: Option<&dyn EntityTagger>) -> Option<String> {
    let tagger = tagger?;
    let entities = match tagger.tag_entities(take_chars(text, TAGGER_WINDOW_CHARS)) {
        Ok(entities) => entities,
        Err(e) => {
            debug!("Entity tagger failed on location window: {e}");
            return None;
        }
    };
    entities
        .into_iter()
        .find(|ent| {
            ent.label == EntityLabel::Gpe
                && !TECH_BLACKLIST.contains(&ent.text.as_str())
                && char_len(&ent.text) > 2
        })
        .map(|ent| ent.text)
}
