//! Relevance Report — per-bullet scores behind a tailoring decision.
//!
//! Uses `rank_highlights`, so ordering and selection match `filter_profile` exactly.

use serde::{Deserialize, Serialize};

use crate::models::profile::{Highlight, Profile};
use crate::tailoring::highlight_selector::{rank_highlights, SelectionLimits};
use crate::tailoring::relevance::{HighlightScorer, JobDescription};
use crate::tailoring::skill_matcher::match_skills;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightScore {
    pub original_index: usize,
    pub score: u32,
    pub selected: bool,
    pub full_text: String,
}

/// One job or project, highlights in ranked order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReport {
    pub title: String,
    pub period: Option<String>,
    pub limit: usize,
    pub highlights: Vec<HighlightScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceReport {
    pub matched_keywords: Vec<String>,
    pub jobs: Vec<SectionReport>,
    pub projects: Vec<SectionReport>,
    pub scorer_backend: String,
}

pub fn build_relevance_report(
    profile: &Profile,
    jd: &JobDescription,
    limits: &SelectionLimits,
    scorer: &dyn HighlightScorer,
) -> RelevanceReport {
    let section = |title: String, period: Option<String>, highlights: &[Highlight], limit: usize| {
        SectionReport {
            title,
            period,
            limit,
            highlights: rank_highlights(highlights, jd, limit, scorer)
                .into_iter()
                .map(|ranked| HighlightScore {
                    original_index: ranked.original_index,
                    score: ranked.score,
                    selected: ranked.highlight.is_selected,
                    full_text: ranked.highlight.full_text,
                })
                .collect(),
        }
    };

    let jobs = profile
        .work
        .iter()
        .map(|job| {
            section(
                job.title(),
                Some(job.period()),
                job.highlights.as_slice(),
                limits.job_highlights,
            )
        })
        .collect();

    let projects = profile
        .projects
        .iter()
        .map(|project| {
            section(
                project.name.clone(),
                None,
                project.highlights.as_slice(),
                limits.project_highlights,
            )
        })
        .collect();

    RelevanceReport {
        matched_keywords: match_skills(&profile.skills, jd),
        jobs,
        projects,
        scorer_backend: scorer.backend().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_profile;
    use crate::tailoring::profile_filter::filter_profile;
    use crate::tailoring::relevance::KeywordOverlapScorer;

    const JD: &str = "Go developer for AWS and GCP multi-cloud deployment tooling";

    #[test]
    fn test_report_agrees_with_filter() {
        let profile = sample_profile();
        let limits = SelectionLimits::default();
        let jd = JobDescription::parse(Some(JD)).unwrap();

        let report = build_relevance_report(&profile, &jd, &limits, &KeywordOverlapScorer);
        let filtered = filter_profile(&profile, Some(JD), &limits, &KeywordOverlapScorer);

        assert_eq!(report.matched_keywords, filtered.matched_keywords);
        for (section, job) in report.jobs.iter().zip(&filtered.profile.work) {
            let texts: Vec<&str> = section.highlights.iter().map(|h| h.full_text.as_str()).collect();
            let expected: Vec<&str> = job.highlights.iter().map(|h| h.full_text.as_str()).collect();
            assert_eq!(texts, expected);
            for (score, h) in section.highlights.iter().zip(&job.highlights) {
                assert_eq!(score.selected, h.is_selected);
            }
        }
    }

    #[test]
    fn test_report_ranks_go_project_first_with_scores() {
        let profile = sample_profile();
        let jd = JobDescription::parse(Some(JD)).unwrap();
        let report =
            build_relevance_report(&profile, &jd, &SelectionLimits::default(), &KeywordOverlapScorer);

        let cloud = &report.projects[1];
        assert_eq!(cloud.title, "CloudDeploy CLI");
        assert_eq!(cloud.limit, 2);
        assert_eq!(cloud.highlights[0].original_index, 0);
        assert!(cloud.highlights[0].score >= 9, "three tagged clouds match");
        assert!(cloud.period.is_none());
        assert_eq!(report.scorer_backend, "keyword");
    }

    #[test]
    fn test_job_sections_carry_title_and_period() {
        let profile = sample_profile();
        let jd = JobDescription::parse(Some(JD)).unwrap();
        let report =
            build_relevance_report(&profile, &jd, &SelectionLimits::default(), &KeywordOverlapScorer);

        assert_eq!(report.jobs[0].title, "Senior Full-Stack Engineer @ TechCorp Inc.");
        assert_eq!(report.jobs[0].period.as_deref(), Some("Mar 2022 – Present"));
        assert_eq!(report.jobs[0].limit, 4);
    }
}
