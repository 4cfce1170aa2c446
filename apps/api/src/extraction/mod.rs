//! Heuristic resume extraction.
//!
//! `pipeline::ResumeParser` is the entry point; every other module is one
//! extractor or a helper shared between them.

pub mod achievements;
pub mod awards;
pub mod classifier;
pub mod contact;
pub mod handlers;
pub mod lexicon;
pub mod location;
pub mod models;
pub mod normalize;
pub mod person;
pub mod pipeline;
pub mod reconstruct;
pub mod role;
pub mod summary;
pub mod title;

pub use models::{Achievement, Award, ExtractionResult};
pub use pipeline::{ParsedResume, ResumeParser};
