//! Entity tagger: the optional NLP capability consulted by the name, location,
//! and achievement-title strategies.
//!
//! Extractors never construct a tagger. One instance is built at startup by
//! `load_tagger` and handed to `ResumeParser`; `None` means every consuming
//! strategy falls through to its pattern-only fallback.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

pub mod heuristic;

pub use heuristic::{HeuristicTagger, Lexicon};

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid lexicon file: {0}")]
    Lexicon(#[from] serde_json::Error),

    #[error("Tagging failed: {0}")]
    Inference(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Gpe,
    Org,
}

/// A labelled span produced by the tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTag {
    pub text: String,
    pub label: EntityLabel,
}

impl EntityTag {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Coarse part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Verb,
    Noun,
    ProperNoun,
    Pronoun,
    Adjective,
    Adposition,
    Determiner,
    Conjunction,
    Numeral,
    Punctuation,
    Other,
}

impl PartOfSpeech {
    pub fn is_nominal(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// A base noun phrase and the part of speech of its head word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounChunk {
    pub text: String,
    pub root_pos: PartOfSpeech,
}

/// Tokenised view of one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedSentence {
    pub tokens: Vec<Token>,
    pub noun_chunks: Vec<NounChunk>,
}

impl TaggedSentence {
    /// Untagged tokens for when no tagger is available: words and punctuation,
    /// every part of speech `Other`, no chunks.
    pub fn untagged(text: &str) -> Self {
        Self {
            tokens: heuristic::tokenize(text)
                .into_iter()
                .map(|t| Token::new(t, PartOfSpeech::Other))
                .collect(),
            noun_chunks: Vec::new(),
        }
    }
}

/// The injected NLP capability. Calls are blocking and never retried.
pub trait EntityTagger: Send + Sync {
    fn tag_entities(&self, text: &str) -> Result<Vec<EntityTag>, TaggerError>;

    fn analyze(&self, text: &str) -> Result<TaggedSentence, TaggerError>;
}

/// Builds the process-wide tagger once. Any failure degrades to `None`.
pub fn load_tagger(config: &Config) -> Option<Arc<dyn EntityTagger>> {
    if !config.enable_entity_tagger {
        warn!("Entity tagger disabled; name, location, and title strategies run pattern-only");
        return None;
    }

    let lexicon = match config.entity_lexicon_path.as_deref() {
        Some(path) => match load_lexicon(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                warn!("Could not load entity lexicon from {}: {e}", path.display());
                return None;
            }
        },
        None => Lexicon::default(),
    };

    info!(
        "Entity tagger ready ({} first names, {} places)",
        lexicon.first_names.len(),
        lexicon.places.len()
    );
    Some(Arc::new(HeuristicTagger::new(lexicon)))
}

/// Reads a JSON gazetteer file and merges it over the built-in lexicon.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, TaggerError> {
    let raw = std::fs::read_to_string(path)?;
    let extension: Lexicon = serde_json::from_str(&raw)?;
    let mut lexicon = Lexicon::default();
    lexicon.extend(extension);
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config(enable: bool, path: Option<std::path::PathBuf>) -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 1024,
            enable_entity_tagger: enable,
            entity_lexicon_path: path,
        }
    }

    #[test]
    fn test_disabled_tagger_is_none() {
        assert!(load_tagger(&config(false, None)).is_none());
    }

    #[test]
    fn test_default_tagger_loads() {
        assert!(load_tagger(&config(true, None)).is_some());
    }

    #[test]
    fn test_missing_lexicon_degrades_to_none() {
        let path = std::path::PathBuf::from("/definitely/not/here/lexicon.json");
        assert!(load_tagger(&config(true, Some(path))).is_none());
    }

    #[test]
    fn test_lexicon_file_extends_gazetteers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"first_names": ["Zebulon"], "places": ["Tromsø"]}}"#).unwrap();

        let lexicon = load_lexicon(file.path()).unwrap();
        assert!(lexicon.first_names.contains("zebulon"));
        assert!(lexicon.places.contains("tromsø"));
        assert!(lexicon.first_names.contains("jane"), "built-ins are kept");
    }

    #[test]
    fn test_malformed_lexicon_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_lexicon(file.path()),
            Err(TaggerError::Lexicon(_))
        ));
    }

    #[test]
    fn test_untagged_sentence_has_no_chunks() {
        let sentence = TaggedSentence::untagged("Increased revenue by 35%.");
        let texts: Vec<_> = sentence.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Increased", "revenue", "by", "35", "%", "."]);
        assert!(sentence.noun_chunks.is_empty());
    }
}
