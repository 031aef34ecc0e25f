//! Relevance scoring — how strongly one highlight overlaps a job description.
//!
//! Pluggable behind `HighlightScorer`; `AppState` holds an `Arc<dyn HighlightScorer>`.
//! Default: `KeywordOverlapScorer` (pure lexical overlap, deterministic).

use std::collections::HashSet;

use crate::models::profile::Highlight;
use crate::tailoring::tokenizer::{token_set, tokenize};

/// Points for a tagged technology found anywhere in the JD text.
pub const TECH_MATCH_POINTS: u32 = 3;
/// Points for each body-text token that is also a JD token.
pub const WORD_MATCH_POINTS: u32 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Job description
// ────────────────────────────────────────────────────────────────────────────

/// A non-blank job description, pre-normalized for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDescription {
    lowered: String,
    words: HashSet<String>,
}

impl JobDescription {
    /// Returns `None` for absent, empty or whitespace-only text.
    pub fn parse(text: Option<&str>) -> Option<Self> {
        let text = text?;
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            lowered: text.to_lowercase(),
            words: token_set(text),
        })
    }

    /// Case-insensitive substring test against the whole JD text.
    ///
    /// No special case for blank needles: `""` is in every JD and `" "` is in
    /// any JD with a space. Blank tags are kept out at edit time instead.
    pub fn mentions(&self, needle: &str) -> bool {
        self.lowered.contains(&needle.to_lowercase())
    }

    pub fn has_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer trait
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the relevance heuristic without touching the
/// selector, the filter or the handlers.
pub trait HighlightScorer: Send + Sync {
    fn score(&self, highlight: &Highlight, jd: &JobDescription) -> u32;

    /// Short label reported alongside scores.
    fn backend(&self) -> &'static str;
}

/// Tagged-technology substring hits (3 points each) plus body-token hits (1 point each).
///
/// A tagged technology is a stronger signal than incidental word overlap, hence
/// the 3:1 weighting. Duplicate tags and duplicate body tokens each count.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordOverlapScorer;

impl HighlightScorer for KeywordOverlapScorer {
    fn score(&self, highlight: &Highlight, jd: &JobDescription) -> u32 {
        score_highlight(highlight, jd)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

pub fn score_highlight(highlight: &Highlight, jd: &JobDescription) -> u32 {
    let tech_score: u32 = highlight
        .tech_stack
        .iter()
        .filter(|tech| jd.mentions(tech))
        .map(|_| TECH_MATCH_POINTS)
        .sum();

    let word_score: u32 = tokenize(&highlight.full_text)
        .iter()
        .filter(|word| jd.has_word(word))
        .map(|_| WORD_MATCH_POINTS)
        .sum();

    tech_score + word_score
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
