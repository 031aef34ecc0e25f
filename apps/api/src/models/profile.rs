//! Profile data model — the structured résumé exchanged with the editor and renderer.
//!
//! Every field defaults when absent so partially-filled editor payloads always
//! deserialize. Sequences are never optional: a missing `work` is an empty `work`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::dates::ResumeDate;

/// The complete résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub basics: Basics,
    pub skills: Vec<SkillGroup>,
    pub work: Vec<Job>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub email: String,
    pub phone: String,
    pub url: String,
    pub summary: String,
    pub profiles: Vec<ProfileLink>,
}

/// External profile link (LinkedIn, GitHub, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLink {
    pub network: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    #[serde(deserialize_with = "deserialize_skill_items")]
    pub items: Vec<String>,
}

/// One achievement bullet, owned by exactly one job or project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub full_text: String,
    pub tech_stack: Vec<String>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub company: String,
    pub position: String,
    pub url: String,
    pub start_date: ResumeDate,
    pub end_date: ResumeDate,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
    pub keywords: Vec<String>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub area: String,
    pub study_type: String,
    pub start_date: ResumeDate,
    pub end_date: ResumeDate,
    pub score: String,
}

impl Job {
    /// "Position @ Company", skipping whichever half is blank.
    pub fn title(&self) -> String {
        join_title(&self.position, " @ ", &self.company)
    }

    pub fn period(&self) -> String {
        format!("{} – {}", self.start_date.label(), self.end_date.label())
    }
}

impl Highlight {
    pub fn new(full_text: impl Into<String>, tech_stack: &[&str], is_selected: bool) -> Self {
        Self {
            full_text: full_text.into(),
            tech_stack: tech_stack.iter().map(|t| t.to_string()).collect(),
            is_selected,
        }
    }
}

fn join_title(left: &str, sep: &str, right: &str) -> String {
    match (left.trim().is_empty(), right.trim().is_empty()) {
        (false, false) => format!("{left}{sep}{right}"),
        (false, true) => left.to_string(),
        (true, false) => right.to_string(),
        (true, true) => String::new(),
    }
}

/// Older editor builds send skill items as `{ "name": "Rust" }` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillItemWire {
    Bare(String),
    Named { name: String },
}

fn deserialize_skill_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<SkillItemWire>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items
        .into_iter()
        .map(|item| match item {
            SkillItemWire::Bare(name) | SkillItemWire::Named { name } => name,
        })
        .collect())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
