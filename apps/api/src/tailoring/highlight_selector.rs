//! Highlight Selector — ranks one record's bullets and auto-selects the best few.
//!
//! Algorithm:
//! 1. Score every highlight against the job description
//! 2. Stable-sort descending by score (ties keep authoring order)
//! 3. Select ranks `0..limit` whose score is strictly positive; deselect the rest
//!
//! The reordering is part of the output: bullets render in relevance order.

use serde::{Deserialize, Serialize};

use crate::models::profile::Highlight;
use crate::tailoring::relevance::{HighlightScorer, JobDescription};

/// Maximum bullets auto-selected per job.
pub const DEFAULT_JOB_HIGHLIGHT_LIMIT: usize = 4;
/// Maximum bullets auto-selected per project. Projects weigh less than jobs.
pub const DEFAULT_PROJECT_HIGHLIGHT_LIMIT: usize = 2;

/// Per-record selection bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionLimits {
    pub job_highlights: usize,
    pub project_highlights: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            job_highlights: DEFAULT_JOB_HIGHLIGHT_LIMIT,
            project_highlights: DEFAULT_PROJECT_HIGHLIGHT_LIMIT,
        }
    }
}

/// A highlight with its score and position before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedHighlight {
    pub original_index: usize,
    pub score: u32,
    pub highlight: Highlight,
}

/// Scores and stable-sorts `highlights`, then applies the selection rule.
pub fn rank_highlights(
    highlights: &[Highlight],
    jd: &JobDescription,
    limit: usize,
    scorer: &dyn HighlightScorer,
) -> Vec<RankedHighlight> {
    let mut ranked: Vec<RankedHighlight> = highlights
        .iter()
        .enumerate()
        .map(|(original_index, highlight)| RankedHighlight {
            original_index,
            score: scorer.score(highlight, jd),
            highlight: highlight.clone(),
        })
        .collect();

    // `sort_by` is stable: equal scores stay in authoring order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    for (rank, entry) in ranked.iter_mut().enumerate() {
        entry.highlight.is_selected = entry.score > 0 && rank < limit;
    }

    ranked
}

/// Ranked highlights with `is_selected` reassigned; every other field untouched.
pub fn select_highlights(
    highlights: &[Highlight],
    jd: &JobDescription,
    limit: usize,
    scorer: &dyn HighlightScorer,
) -> Vec<Highlight> {
    rank_highlights(highlights, jd, limit, scorer)
        .into_iter()
        .map(|ranked| ranked.highlight)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tailoring::relevance::KeywordOverlapScorer;

    fn jd(text: &str) -> JobDescription {
        JobDescription::parse(Some(text)).unwrap()
    }

    /// Scores by the number in the text, so tests can dictate exact scores.
    struct FixedScorer;

    impl HighlightScorer for FixedScorer {
        fn score(&self, highlight: &Highlight, _jd: &JobDescription) -> u32 {
            highlight
                .full_text
                .split(':')
                .nth(1)
                .and_then(|n| n.trim().parse().ok())
                .unwrap_or(0)
        }

        fn backend(&self) -> &'static str {
            "fixed"
        }
    }

    fn scored(label: &str, score: u32) -> Highlight {
        Highlight::new(format!("{label}:{score}"), &[], false)
    }

    fn labels(highlights: &[Highlight]) -> Vec<&str> {
        highlights
            .iter()
            .map(|h| h.full_text.split(':').next().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_default_limits_are_four_and_two() {
        let limits = SelectionLimits::default();
        assert_eq!(limits.job_highlights, 4);
        assert_eq!(limits.project_highlights, 2);
    }

    #[test]
    fn test_tagged_match_ranks_first_and_is_selected() {
        let jd = jd("Experienced with React and Node.js, Docker");
        let highlights = vec![
            Highlight::new("Wrote scripts", &[], true),
            Highlight::new("Built dashboards", &["React"], false),
        ];
        let out = select_highlights(&highlights, &jd, 4, &KeywordOverlapScorer);

        assert_eq!(out[0].full_text, "Built dashboards");
        assert!(out[0].is_selected);
        assert_eq!(out[1].full_text, "Wrote scripts");
        assert!(!out[1].is_selected, "zero score must be deselected");
    }

    #[test]
    fn test_limit_truncates_after_tie_break() {
        let highlights = vec![scored("X", 3), scored("TOP", 5), scored("Y", 3)];
        let out = select_highlights(&highlights, &jd("any"), 2, &FixedScorer);

        assert_eq!(labels(&out), vec!["TOP", "X", "Y"]);
        assert!(out[0].is_selected);
        assert!(out[1].is_selected);
        assert!(!out[2].is_selected, "positive score outside the bound");
    }

    #[test]
    fn test_zero_score_never_selected_even_within_bound() {
        let highlights = vec![scored("A", 2), scored("B", 0), scored("C", 0)];
        let out = select_highlights(&highlights, &jd("any"), 4, &FixedScorer);

        let selected: Vec<bool> = out.iter().map(|h| h.is_selected).collect();
        assert_eq!(selected, vec![true, false, false]);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let highlights: Vec<Highlight> =
            ["a", "b", "c", "d", "e", "f"].iter().map(|l| scored(l, 1)).collect();
        let out = select_highlights(&highlights, &jd("any"), 4, &FixedScorer);
        assert_eq!(labels(&out), vec!["a", "b", "c", "d", "e", "f"]);

        let mut reversed = highlights.clone();
        reversed.reverse();
        let out = select_highlights(&reversed, &jd("any"), 4, &FixedScorer);
        assert_eq!(labels(&out), vec!["f", "e", "d", "c", "b", "a"]);
    }

    #[test]
    fn test_ties_interleaved_with_higher_scores_stay_stable() {
        let highlights = vec![
            scored("p", 1),
            scored("q", 4),
            scored("r", 1),
            scored("s", 4),
            scored("t", 1),
        ];
        let out = select_highlights(&highlights, &jd("any"), 4, &FixedScorer);
        assert_eq!(labels(&out), vec!["q", "s", "p", "r", "t"]);
    }

    #[test]
    fn test_selection_count_never_exceeds_limit() {
        let highlights: Vec<Highlight> = (0..10).map(|i| scored("h", i + 1)).collect();
        for limit in 0..12 {
            let out = select_highlights(&highlights, &jd("any"), limit, &FixedScorer);
            let selected = out.iter().filter(|h| h.is_selected).count();
            assert_eq!(selected, limit.min(10));
        }
    }

    #[test]
    fn test_other_fields_untouched() {
        let jd = jd("rust services");
        let original = Highlight::new("Rust services at scale", &["Rust", "Tokio"], false);
        let out = select_highlights(std::slice::from_ref(&original), &jd, 4, &KeywordOverlapScorer);

        assert_eq!(out[0].full_text, original.full_text);
        assert_eq!(out[0].tech_stack, original.tech_stack);
        assert!(out[0].is_selected);
    }

    #[test]
    fn test_rank_reports_original_index_and_score() {
        let highlights = vec![scored("low", 1), scored("high", 9)];
        let ranked = rank_highlights(&highlights, &jd("any"), 1, &FixedScorer);

        assert_eq!(ranked[0].original_index, 1);
        assert_eq!(ranked[0].score, 9);
        assert!(ranked[0].highlight.is_selected);
        assert_eq!(ranked[1].original_index, 0);
        assert!(!ranked[1].highlight.is_selected);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let out = select_highlights(&[], &jd("any"), 4, &KeywordOverlapScorer);
        assert!(out.is_empty());
    }
}
