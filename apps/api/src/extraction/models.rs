use serde::{Deserialize, Serialize};

use crate::extraction::classifier::LineTag;

/// Placeholder metric for an achievement with no explicit quantity.
pub const KEY_RESULT_METRIC: &str = "Key Result";

/// Metric carried by every award.
pub const AWARD_METRIC: &str = "Award";

/// A statement rebuilt from one or more wrapped physical lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalLine {
    /// Tag of the physical line that opened the statement.
    pub tag: LineTag,
    pub text: String,
}

impl LogicalLine {
    pub fn new(tag: LineTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }
}

/// A quantifiable accomplishment lifted from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// At most four title-cased words.
    pub title: String,
    /// 80 to 600 characters, ending in terminal punctuation.
    pub description: String,
    /// Quantity expression such as `35%`, or `Key Result`.
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub description: String,
    pub metric: String,
}

impl Award {
    pub fn from_title(title: String) -> Self {
        Self {
            description: format!("Recognized for excellence: {title}"),
            title,
            metric: AWARD_METRIC.to_string(),
        }
    }
}

/// Structured record for one document. Empty string / empty vec means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
    pub summary: String,
    pub achievements: Vec<Achievement>,
    pub awards: Vec<Award>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
