//! Pipeline Orchestrator: runs every extractor over one document.
//!
//! Extractors are independent: each degrades to its empty value on its own, so
//! a miss in one field never costs another. The tagger is optional and is only
//! forwarded to the strategies that consult it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::document;
use crate::extraction::achievements::extract_achievements;
use crate::extraction::awards::extract_awards;
use crate::extraction::contact::{extract_email, extract_linkedin, extract_phone};
use crate::extraction::location::resolve_location;
use crate::extraction::models::ExtractionResult;
use crate::extraction::normalize::{content_lines, normalize};
use crate::extraction::person::resolve_name;
use crate::extraction::role::resolve_role;
use crate::extraction::summary::extract_summary;
use crate::nlp::EntityTagger;

/// One parse, as returned to API callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub parse_id: Uuid,
    pub parsed_at: DateTime<Utc>,
    pub result: ExtractionResult,
}

#[derive(Clone, Default)]
pub struct ResumeParser {
    tagger: Option<Arc<dyn EntityTagger>>,
}

impl ResumeParser {
    pub fn new(tagger: Option<Arc<dyn EntityTagger>>) -> Self {
        Self { tagger }
    }

    pub fn has_tagger(&self) -> bool {
        self.tagger.is_some()
    }

    /// Parses raw document text under a fresh parse id.
    pub fn parse_text(&self, text: &str) -> ParsedResume {
        let parse_id = Uuid::new_v4();
        let span = info_span!("parse", parse_id = %parse_id);
        let _enter = span.enter();
        ParsedResume {
            parse_id,
            parsed_at: Utc::now(),
            result: self.extract(text),
        }
    }

    /// Parses a PDF. Unreadable documents yield an all-empty result.
    pub fn parse_pdf(&self, bytes: &[u8]) -> ParsedResume {
        let parse_id = Uuid::new_v4();
        let span = info_span!("parse", parse_id = %parse_id);
        let _enter = span.enter();
        let result = match document::extract_text_from_pdf(bytes) {
            Ok(text) => self.extract(&text),
            Err(e) => {
                warn!("PDF extraction returned no text: {e}");
                ExtractionResult::default()
            }
        };
        ParsedResume {
            parse_id,
            parsed_at: Utc::now(),
            result,
        }
    }

    /// Runs every extractor over `text`.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        if text.trim().is_empty() {
            warn!("Document contains no text");
            return ExtractionResult::default();
        }
        info!("Parsing {} characters of text", text.chars().count());

        let tagger = self.tagger.as_deref();
        if tagger.is_none() {
            warn!("Entity tagger unavailable for this parse");
        }

        let lines = content_lines(text);
        let flat = normalize(text);

        let name = resolve_name(&lines, tagger);
        let role = resolve_role(&lines, &name);
        let result = ExtractionResult {
            role,
            email: extract_email(&flat),
            phone: extract_phone(&flat),
            linkedin: extract_linkedin(text),
            location: resolve_location(text, tagger),
            summary: extract_summary(text),
            achievements: extract_achievements(text, tagger),
            awards: extract_awards(text),
            name,
        };
        log_outcome(&result);
        result
    }
}

fn log_outcome(result: &ExtractionResult) {
    let found = |value: &str| if value.is_empty() { "Not Found" } else { "Found" };
    for (field, value) in [
        ("name", &result.name),
        ("role", &result.role),
        ("email", &result.email),
        ("phone", &result.phone),
        ("linkedin", &result.linkedin),
        ("location", &result.location),
        ("summary", &result.summary),
    ] {
        info!("Extraction for {field}: {}", found(value.as_str()));
    }
    info!("Extracted {} items for key: achievements", result.achievements.len());
    info!("Extracted {} items for key: awards", result.awards.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::models::KEY_RESULT_METRIC;
    use crate::nlp::{HeuristicTagger, Lexicon};

    fn parser() -> ResumeParser {
        ResumeParser::new(Some(Arc::new(HeuristicTagger::new(Lexicon::default()))))
    }

    #[test]
    fn test_contact_header() {
        let text = "Jane Smith\nSenior Software Engineer\nEmail: jane@x.com\nPhone: 415-555-0100";
        for parser in [parser(), ResumeParser::new(None)] {
            let result = parser.extract(text);
            assert_eq!(result.name, "Jane Smith");
            assert!(result.role.contains("Software Engineer"), "{}", result.role);
            assert_eq!(result.email, "jane@x.com");
            assert_eq!(result.phone, "415-555-0100");
        }
    }

    #[test]
    fn test_quantified_bullet() {
        let text = "Experience\n\
            • Increased revenue by 35% through new pricing strategy, resulting in $2M additional annual revenue for the company.";
        let result = parser().extract(text);
        assert_eq!(result.achievements.len(), 1);
        assert_eq!(result.achievements[0].metric, "35%");
        assert!(result.achievements[0].title.starts_with("Increased"));
    }

    #[test]
    fn test_wrapped_bullet() {
        let text = "• Led a team of 8 engineers\nto deliver a new platform.";
        let lines = crate::extraction::reconstruct::reconstruct(text);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].text,
            "• Led a team of 8 engineers to deliver a new platform."
        );
        // Too short to stand alone once merged.
        assert!(parser().extract(text).achievements.is_empty());
    }

    #[test]
    fn test_awards_section() {
        let text = "Honors-Awards\nEmployee of the Year 2020\nExperience\nStaff Engineer Award for Reliability";
        let result = parser().extract(text);
        assert_eq!(result.awards.len(), 1);
        assert_eq!(result.awards[0].title, "Employee of the Year 2020");
    }

    #[test]
    fn test_linkedin_export_layout() {
        let text = "Contact\n\
            www.linkedin.com/in/\n\
            janesmith (LinkedIn)\n\
            Top Skills\n\
            Rust\n\
            Jane Smith\n\
            Staff Engineer at Acme\n\
            Denver, CO\n\
            Summary\n\
            Builds reliable distributed systems.\n\
            Experience\n\
            Acme\n\
            • Reduced p99 latency by 40% across the checkout path by rewriting the pricing cache in Rust.";
        let result = parser().extract(text);
        assert_eq!(result.name, "Jane Smith");
        assert_eq!(result.role, "Staff Engineer at Acme");
        assert_eq!(result.linkedin, "https://linkedin.com/in/janesmith");
        assert_eq!(result.location, "Denver, CO");
        assert_eq!(result.summary, "Builds reliable distributed systems.");
        assert_eq!(result.achievements.len(), 1);
        assert_eq!(result.achievements[0].metric, "40%");
        assert_ne!(result.achievements[0].metric, KEY_RESULT_METRIC);
    }

    #[test]
    fn test_blank_text_is_empty_result() {
        assert!(parser().extract("  \n\n\t").is_empty());
    }

    #[test]
    fn test_unreadable_pdf_is_empty_result() {
        let parsed = parser().parse_pdf(b"not a pdf");
        assert!(parsed.result.is_empty());
    }

    #[test]
    fn test_malformed_content_stream_is_empty_result() {
        let pdf = crate::document::single_page_pdf("BT Tf (Hello) Tj ET");
        assert!(parser().parse_pdf(&pdf).result.is_empty());
    }

    #[test]
    fn test_parse_ids_are_unique() {
        let parser = parser();
        let a = parser.parse_text("Jane Smith");
        let b = parser.parse_text("Jane Smith");
        assert_ne!(a.parse_id, b.parse_id);
        assert_eq!(a.result, b.result);
    }
}
