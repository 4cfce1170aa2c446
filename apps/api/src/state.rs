use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; carries the optional entity tagger.
    pub parser: Arc<ResumeParser>,
}
