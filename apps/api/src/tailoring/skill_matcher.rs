//! Skill Matcher — which declared skills appear in the job description text.

use crate::models::profile::SkillGroup;
use crate::tailoring::relevance::JobDescription;

/// Skill names (original casing) whose lowercase form is a substring of the JD.
///
/// Traversal is groups in order, then items in order. A name declared in two
/// groups is reported twice; callers that want a set must dedupe themselves.
pub fn match_skills(skills: &[SkillGroup], jd: &JobDescription) -> Vec<String> {
    skills
        .iter()
        .flat_map(|group| group.items.iter())
        .filter(|name| jd.mentions(name))
        .cloned()
        .collect()
}
