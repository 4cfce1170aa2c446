//! Achievement Synthesizer: quantified statements become `{title, description, metric}`.
//!
//! Runs over reconstructed logical lines. Each line passes a chain of cheap
//! rejects (contact details, first-person prose, dates, dangling fragments)
//! before the metric, title, and description are derived from it.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::lexicon::{
    contains_any, ACHIEVEMENT_LEAD_CONNECTIVES, CONTACT_MARKERS, CONTINUATION_CONNECTIVES,
    IMPACT_VERBS,
};
use crate::extraction::models::{Achievement, LogicalLine, KEY_RESULT_METRIC};
use crate::extraction::normalize::{byte_offset, char_len, normalize, starts_lowercase};
use crate::extraction::reconstruct::reconstruct;
use crate::extraction::title::synthesize_title;
use crate::nlp::{EntityTagger, TaggedSentence};

pub const MAX_ACHIEVEMENTS: usize = 8;
pub const MIN_DESCRIPTION_CHARS: usize = 80;
pub const MAX_DESCRIPTION_CHARS: usize = 600;

const SENTENCE_SEARCH_FROM: usize = 100;
const TENURE_CUTOFF: usize = 50;
const ELLIPSIS: &str = "...";

static FIRST_PERSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:I\s+(?:am|was|have|had|own|lead|managed|worked|built)|My\s+)").unwrap()
});

static MONTH_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\s+\d{4}").unwrap()
});

static LEADING_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[●•‣⁃⁌\-*\d]+\.*\s*").unwrap());

static BARE_NUMBER_LEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d%]+\s").unwrap());

static PAGE_ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Page\s+\d+\s+of\s+\d+").unwrap());

static METRIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?\s*(?:%|k|M|B|\+|years?|yrs?|users?|customers?))").unwrap()
});

/// Tenure, date, and parenthetical tails, tried in order.
static TENURE_TAILS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+\s+(?:yr|yrs|year|years|mo|mos|month|months)(?:\s+\d+\s+(?:mo|mos|month|months))?",
        r"\d{4}\s*-\s*\d{4}",
        r"[A-Z][a-z]+\s*\d{4}",
        r"Present",
        r"\(.*?\)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+[A-Z]").unwrap());

/// Reconstructs `text` and synthesizes its achievements.
pub fn extract_achievements(text: &str, tagger: Option<&dyn EntityTagger>) -> Vec<Achievement> {
    synthesize_achievements(&reconstruct(text), tagger)
}

pub fn synthesize_achievements(
    lines: &[LogicalLine],
    tagger: Option<&dyn EntityTagger>,
) -> Vec<Achievement> {
    let mut achievements = Vec::new();
    for line in lines {
        if let Some(achievement) = synthesize_one(&normalize(&line.text), tagger) {
            achievements.push(achievement);
            if achievements.len() >= MAX_ACHIEVEMENTS {
                break;
            }
        }
    }
    achievements
}

fn synthesize_one(line: &str, tagger: Option<&dyn EntityTagger>) -> Option<Achievement> {
    let lower = line.to_lowercase();
    if contains_any(&lower, CONTACT_MARKERS) || FIRST_PERSON.is_match(line) || MONTH_DATE.is_match(line)
    {
        return None;
    }

    let has_number = line.chars().any(|c| c.is_ascii_digit());
    let has_symbol = line.contains(['%', '$', '+']);
    let has_impact = contains_any(&lower, IMPACT_VERBS);

    let cleaned = LEADING_MARKERS.replace(line, "");
    let cleaned = cleaned.as_ref();
    let first_word = cleaned.split_whitespace().next()?.to_lowercase();
    let numeric_lead = {
        let digits = first_word.replace('%', "");
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    };
    if CONTINUATION_CONNECTIVES.contains(&first_word.as_str())
        || ACHIEVEMENT_LEAD_CONNECTIVES.contains(&first_word.as_str())
        || starts_lowercase(cleaned)
        || numeric_lead
    {
        return None;
    }

    if !(has_number && (has_symbol || has_impact)) {
        return None;
    }
    if BARE_NUMBER_LEAD.is_match(cleaned) || cleaned.starts_with('%') || PAGE_ARTIFACT.is_match(cleaned) {
        return None;
    }

    let metric = METRIC
        .captures(cleaned)
        .map_or_else(|| KEY_RESULT_METRIC.to_string(), |caps| caps[1].to_string());

    let description = finalize_description(cleaned)?;

    let sentence = match tagger {
        Some(tagger) => tagger.analyze(cleaned).unwrap_or_else(|e| {
            debug!("Entity tagger failed on achievement line: {e}");
            TaggedSentence::untagged(cleaned)
        }),
        None => TaggedSentence::untagged(cleaned),
    };
    let title = synthesize_title(cleaned, &sentence);

    Some(Achievement {
        title,
        description,
        metric,
    })
}

/// Strips artifacts, cuts tenure tails, and enforces length and punctuation.
/// `None` when the statement is too short to stand alone.
fn finalize_description(cleaned: &str) -> Option<String> {
    let mut description = PAGE_ARTIFACT.replace_all(cleaned, "").trim().to_string();

    for tail in TENURE_TAILS.iter() {
        if let Some(found) = tail.find(&description) {
            if char_len(&description[..found.start()]) > TENURE_CUTOFF {
                description = description[..found.start()].trim().to_string();
            }
        }
    }

    if char_len(&description) < MIN_DESCRIPTION_CHARS {
        return None;
    }

    if char_len(&description) > MAX_DESCRIPTION_CHARS {
        description = shorten(&description);
    }

    if !description.ends_with(['.', '!', '?']) {
        if char_len(&description) >= MAX_DESCRIPTION_CHARS {
            description.truncate(byte_offset(&description, MAX_DESCRIPTION_CHARS - 1));
            description = description.trim_end().to_string();
        }
        description.push('.');
    }
    Some(description)
}

/// Cuts an over-long description at a sentence end, else a word boundary.
fn shorten(description: &str) -> String {
    let window_start = byte_offset(description, SENTENCE_SEARCH_FROM);
    let window_end = byte_offset(description, MAX_DESCRIPTION_CHARS);
    if let Some(end) = SENTENCE_END
        .find_iter(&description[window_start..window_end])
        .last()
    {
        return description[..window_start + end.start() + 1].to_string();
    }

    let budget = MAX_DESCRIPTION_CHARS - ELLIPSIS.len();
    let head = &description[..byte_offset(description, budget)];
    match head.rfind(' ') {
        Some(space) if char_len(&head[..space]) > SENTENCE_SEARCH_FROM => {
            format!("{}{ELLIPSIS}", &head[..space])
        }
        _ => format!("{head}{ELLIPSIS}"),
    }
}
