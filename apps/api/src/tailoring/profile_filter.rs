//! Profile Filter — tailors a whole profile to a job description.
//!
//! Blank JD → manual mode: the profile comes back as the user left it.
//! Otherwise every job and project has its highlights re-ranked and re-selected,
//! and the declared skills found in the JD are collected for emphasis.
//! The input profile is only borrowed; the result is always a new value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::profile::{Job, Profile, Project};
use crate::tailoring::highlight_selector::{select_highlights, SelectionLimits};
use crate::tailoring::relevance::{HighlightScorer, JobDescription, KeywordOverlapScorer};
use crate::tailoring::skill_matcher::match_skills;

/// The tailored profile plus skills to emphasize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    #[serde(flatten)]
    pub profile: Profile,
    /// Empty when no job description was given.
    #[serde(rename = "matchedKeywords", default)]
    pub matched_keywords: Vec<String>,
}

/// Tailors `profile` with the default limits and keyword scorer.
pub fn filter_profile_default(profile: &Profile, job_description: Option<&str>) -> FilterResult {
    filter_profile(
        profile,
        job_description,
        &SelectionLimits::default(),
        &KeywordOverlapScorer,
    )
}

pub fn filter_profile(
    profile: &Profile,
    job_description: Option<&str>,
    limits: &SelectionLimits,
    scorer: &dyn HighlightScorer,
) -> FilterResult {
    let Some(jd) = JobDescription::parse(job_description) else {
        return FilterResult {
            profile: profile.clone(),
            matched_keywords: Vec::new(),
        };
    };

    let matched_keywords = match_skills(&profile.skills, &jd);

    let work: Vec<Job> = profile
        .work
        .iter()
        .map(|job| Job {
            highlights: select_highlights(&job.highlights, &jd, limits.job_highlights, scorer),
            ..job.clone()
        })
        .collect();

    let projects: Vec<Project> = profile
        .projects
        .iter()
        .map(|project| Project {
            highlights: select_highlights(
                &project.highlights,
                &jd,
                limits.project_highlights,
                scorer,
            ),
            ..project.clone()
        })
        .collect();

    debug!(
        jobs = work.len(),
        projects = projects.len(),
        matched_keywords = matched_keywords.len(),
        scorer = scorer.backend(),
        "Profile tailored to job description"
    );

    FilterResult {
        profile: Profile {
            basics: profile.basics.clone(),
            skills: profile.skills.clone(),
            work,
            projects,
            education: profile.education.clone(),
        },
        matched_keywords,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
