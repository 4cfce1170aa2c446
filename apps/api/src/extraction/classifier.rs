//! Line Classifier: labels one physical line for the reconstruction engine.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extraction::lexicon::{
    contains_any, BULLET_GLYPHS, CONTACT_MARKERS, CONTINUATION_CONNECTIVES, JOB_TITLE_SUFFIXES,
    JOB_TITLE_WORDS, SECTION_KEYWORDS,
};
use crate::extraction::normalize::{char_len, is_upper, starts_lowercase, starts_uppercase};

const MONTH: &str = r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?";

static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i){MONTH}\s+\d{{4}}\s*[-–]\s*(?:Present|{MONTH}\s+\d{{4}})"
    ))
    .unwrap()
});

static TENURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:\(?\d+\s+(?:yr|yrs|year|years|mo|mos|month|months)|\d{4}\s*[-–]\s*(?:Present|\d{4}))",
    )
    .unwrap()
});

static BARE_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:{})\s*(?:{})?$",
        JOB_TITLE_WORDS.join("|"),
        JOB_TITLE_SUFFIXES.join("|")
    ))
    .unwrap()
});

static HEADER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\|.*\(").unwrap(),
        Regex::new(r"\d{4}[–-](?:\d{4}|Present)").unwrap(),
        Regex::new(r"[–-]\s*[A-Z]{2}$").unwrap(),
        Regex::new(&format!(r"^(?:{})", SECTION_KEYWORDS.join("|"))).unwrap(),
    ]
});

/// Structural label of a physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTag {
    JobMeta,
    BulletStart,
    Header,
    Continuation,
    Plain,
}

/// Every raw signal the classifier computes for a line.
///
/// `tag()` reduces them to a single first-match label; the reconstruction
/// engine also reads the individual flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineSignals {
    pub job_meta: bool,
    pub bullet_start: bool,
    pub header: bool,
    /// Short all-caps line, usually a section banner.
    pub shouting: bool,
    pub mentions_present: bool,
    pub contact: bool,
    /// Lower-case lead, connective first word, or leading `,` / `(`.
    pub continuation_lead: bool,
}

impl LineSignals {
    pub fn inspect(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::default();
        }
        let lower = line.to_lowercase();
        let first_word = lower.split_whitespace().next().unwrap_or_default();

        LineSignals {
            job_meta: is_job_meta(line),
            bullet_start: starts_with_bullet(line),
            header: HEADER_PATTERNS.iter().any(|p| p.is_match(line)),
            shouting: is_upper(line) && char_len(line) < 50,
            mentions_present: line.contains("Present"),
            contact: contains_any(&lower, CONTACT_MARKERS),
            continuation_lead: starts_lowercase(line)
                || CONTINUATION_CONNECTIVES.contains(&first_word)
                || line.starts_with(',')
                || line.starts_with('('),
        }
    }

    /// Header, banner, "Present", or job metadata: the previous statement is over.
    pub fn starts_new_section(&self) -> bool {
        self.header || self.shouting || self.mentions_present || self.job_meta
    }

    pub fn is_continuation(&self) -> bool {
        !self.bullet_start && !self.starts_new_section() && self.continuation_lead
    }

    pub fn tag(&self) -> LineTag {
        if self.job_meta {
            LineTag::JobMeta
        } else if self.bullet_start {
            LineTag::BulletStart
        } else if self.header {
            LineTag::Header
        } else if self.is_continuation() {
            LineTag::Continuation
        } else {
            LineTag::Plain
        }
    }
}

pub fn classify(line: &str) -> LineTag {
    LineSignals::inspect(line).tag()
}

pub fn starts_with_bullet(line: &str) -> bool {
    line.starts_with(BULLET_GLYPHS)
}

/// Dates, tenure, or a bare job title: LinkedIn job-history furniture.
pub fn is_job_meta(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }
    if DATE_RANGE.is_match(line) || TENURE.is_match(line) || BARE_TITLE.is_match(line) {
        return true;
    }
    if char_len(line) < 50 && !line.starts_with(['•', '-', '*']) && !line.contains('.') {
        let words: Vec<&str> = line.split_whitespace().collect();
        return (1..=5).contains(&words.len())
            && words
                .iter()
                .filter(|w| w.chars().all(char::is_alphabetic))
                .all(|w| starts_uppercase(w));
    }
    false
}
