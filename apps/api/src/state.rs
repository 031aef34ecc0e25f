use std::sync::Arc;

use crate::config::Config;
use crate::tailoring::highlight_selector::SelectionLimits;
use crate::tailoring::relevance::{HighlightScorer, KeywordOverlapScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Per-record auto-selection bounds (jobs 4, projects 2 unless overridden).
    pub limits: SelectionLimits,
    /// Pluggable relevance scorer. Default: KeywordOverlapScorer.
    pub scorer: Arc<dyn HighlightScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            limits: config.limits,
            scorer: Arc::new(KeywordOverlapScorer),
        }
    }
}
