//! Typed profile edits.
//!
//! Each `ProfileEdit` names exactly one field or sequence. `apply_edit` never
//! touches its input: it clones the profile, changes that one thing, and
//! returns the new value. Indices are checked; nothing is silently created.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::dates::ResumeDate;
use crate::models::profile::{
    Education, Highlight, Job, Profile, ProfileLink, Project, SkillGroup,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("{collection} index {index} out of range (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Edit vocabulary
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicsField {
    Name,
    Label,
    Email,
    Phone,
    Url,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    Company,
    Position,
    Url,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Description,
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Area,
    StudyType,
    StartDate,
    EndDate,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Work,
    Projects,
}

/// The job or project that owns a highlight list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightParent {
    pub section: Section,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ProfileEdit {
    SetBasics {
        field: BasicsField,
        value: String,
    },
    AddProfileLink,
    UpdateProfileLink {
        index: usize,
        network: String,
        url: String,
    },
    RemoveProfileLink {
        index: usize,
    },

    AddSkillGroup,
    SetSkillCategory {
        group: usize,
        category: String,
    },
    SetSkillItems {
        group: usize,
        items: Vec<String>,
    },
    RemoveSkillGroup {
        group: usize,
    },

    AddJob,
    SetJobField {
        job: usize,
        field: JobField,
        value: String,
    },
    RemoveJob {
        job: usize,
    },

    AddProject,
    SetProjectField {
        project: usize,
        field: ProjectField,
        value: String,
    },
    SetProjectKeywords {
        project: usize,
        keywords: Vec<String>,
    },
    RemoveProject {
        project: usize,
    },

    AddEducation,
    SetEducationField {
        education: usize,
        field: EducationField,
        value: String,
    },
    RemoveEducation {
        education: usize,
    },

    AddHighlight {
        parent: HighlightParent,
    },
    SetHighlightText {
        parent: HighlightParent,
        index: usize,
        text: String,
    },
    SetHighlightTechStack {
        parent: HighlightParent,
        index: usize,
        tech_stack: Vec<String>,
    },
    SetHighlightSelected {
        parent: HighlightParent,
        index: usize,
        selected: bool,
    },
    RemoveHighlight {
        parent: HighlightParent,
        index: usize,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Application
// ────────────────────────────────────────────────────────────────────────────

/// Returns a new profile with `edit` applied.
pub fn apply_edit(profile: &Profile, edit: ProfileEdit) -> Result<Profile, EditError> {
    let mut next = profile.clone();
    apply_in_place(&mut next, edit)?;
    Ok(next)
}

/// Applies `edits` in order; the first failure aborts and leaves `profile` as it was.
pub fn apply_edits(profile: &Profile, edits: Vec<ProfileEdit>) -> Result<Profile, EditError> {
    let mut next = profile.clone();
    for edit in edits {
        apply_in_place(&mut next, edit)?;
    }
    Ok(next)
}

fn apply_in_place(profile: &mut Profile, edit: ProfileEdit) -> Result<(), EditError> {
    match edit {
        ProfileEdit::SetBasics { field, value } => {
            let basics = &mut profile.basics;
            let target = match field {
                BasicsField::Name => &mut basics.name,
                BasicsField::Label => &mut basics.label,
                BasicsField::Email => &mut basics.email,
                BasicsField::Phone => &mut basics.phone,
                BasicsField::Url => &mut basics.url,
                BasicsField::Summary => &mut basics.summary,
            };
            *target = value;
        }
        ProfileEdit::AddProfileLink => profile.basics.profiles.push(ProfileLink::default()),
        ProfileEdit::UpdateProfileLink {
            index,
            network,
            url,
        } => {
            *slot(&mut profile.basics.profiles, index, "basics.profiles")? =
                ProfileLink { network, url };
        }
        ProfileEdit::RemoveProfileLink { index } => {
            remove(&mut profile.basics.profiles, index, "basics.profiles")?;
        }

        ProfileEdit::AddSkillGroup => profile.skills.push(SkillGroup::default()),
        ProfileEdit::SetSkillCategory { group, category } => {
            slot(&mut profile.skills, group, "skills")?.category = category;
        }
        ProfileEdit::SetSkillItems { group, items } => {
            slot(&mut profile.skills, group, "skills")?.items = normalize_tags(items);
        }
        ProfileEdit::RemoveSkillGroup { group } => {
            remove(&mut profile.skills, group, "skills")?;
        }

        ProfileEdit::AddJob => profile.work.push(Job {
            end_date: ResumeDate::Present,
            ..Job::default()
        }),
        ProfileEdit::SetJobField { job, field, value } => {
            let job = slot(&mut profile.work, job, "work")?;
            match field {
                JobField::Company => job.company = value,
                JobField::Position => job.position = value,
                JobField::Url => job.url = value,
                JobField::StartDate => job.start_date = ResumeDate::parse(&value),
                JobField::EndDate => job.end_date = ResumeDate::parse(&value),
            }
        }
        ProfileEdit::RemoveJob { job } => {
            remove(&mut profile.work, job, "work")?;
        }

        ProfileEdit::AddProject => profile.projects.push(Project::default()),
        ProfileEdit::SetProjectField {
            project,
            field,
            value,
        } => {
            let project = slot(&mut profile.projects, project, "projects")?;
            match field {
                ProjectField::Name => project.name = value,
                ProjectField::Description => project.description = value,
                ProjectField::Url => project.url = value,
            }
        }
        ProfileEdit::SetProjectKeywords { project, keywords } => {
            slot(&mut profile.projects, project, "projects")?.keywords = normalize_tags(keywords);
        }
        ProfileEdit::RemoveProject { project } => {
            remove(&mut profile.projects, project, "projects")?;
        }

        ProfileEdit::AddEducation => profile.education.push(Education::default()),
        ProfileEdit::SetEducationField {
            education,
            field,
            value,
        } => {
            let edu = slot(&mut profile.education, education, "education")?;
            match field {
                EducationField::Institution => edu.institution = value,
                EducationField::Area => edu.area = value,
                EducationField::StudyType => edu.study_type = value,
                EducationField::StartDate => edu.start_date = ResumeDate::parse(&value),
                EducationField::EndDate => edu.end_date = ResumeDate::parse(&value),
                EducationField::Score => edu.score = value,
            }
        }
        ProfileEdit::RemoveEducation { education } => {
            remove(&mut profile.education, education, "education")?;
        }

        ProfileEdit::AddHighlight { parent } => {
            highlights_of(profile, parent)?.push(Highlight {
                is_selected: true,
                ..Highlight::default()
            });
        }
        ProfileEdit::SetHighlightText {
            parent,
            index,
            text,
        } => {
            highlight_at(profile, parent, index)?.full_text = text;
        }
        ProfileEdit::SetHighlightTechStack {
            parent,
            index,
            tech_stack,
        } => {
            highlight_at(profile, parent, index)?.tech_stack = normalize_tags(tech_stack);
        }
        ProfileEdit::SetHighlightSelected {
            parent,
            index,
            selected,
        } => {
            highlight_at(profile, parent, index)?.is_selected = selected;
        }
        ProfileEdit::RemoveHighlight { parent, index } => {
            let collection = highlights_label(parent.section);
            remove(highlights_of(profile, parent)?, index, collection)?;
        }
    }
    Ok(())
}

fn slot<'a, T>(
    items: &'a mut [T],
    index: usize,
    collection: &'static str,
) -> Result<&'a mut T, EditError> {
    let len = items.len();
    items.get_mut(index).ok_or(EditError::IndexOutOfRange {
        collection,
        index,
        len,
    })
}

fn remove<T>(items: &mut Vec<T>, index: usize, collection: &'static str) -> Result<T, EditError> {
    if index >= items.len() {
        return Err(EditError::IndexOutOfRange {
            collection,
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}

fn highlights_label(section: Section) -> &'static str {
    match section {
        Section::Work => "work.highlights",
        Section::Projects => "projects.highlights",
    }
}

fn highlights_of(
    profile: &mut Profile,
    parent: HighlightParent,
) -> Result<&mut Vec<Highlight>, EditError> {
    Ok(match parent.section {
        Section::Work => &mut slot(&mut profile.work, parent.index, "work")?.highlights,
        Section::Projects => {
            &mut slot(&mut profile.projects, parent.index, "projects")?.highlights
        }
    })
}

fn highlight_at(
    profile: &mut Profile,
    parent: HighlightParent,
    index: usize,
) -> Result<&mut Highlight, EditError> {
    let collection = highlights_label(parent.section);
    slot(highlights_of(profile, parent)?, index, collection)
}

/// Trims tags, drops blanks and exact repeats; first occurrence wins.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_profile;

    fn work(index: usize) -> HighlightParent {
        HighlightParent {
            section: Section::Work,
            index,
        }
    }

    #[test]
    fn test_set_basics_returns_new_profile_and_leaves_input() {
        let profile = sample_profile();
        let next = apply_edit(
            &profile,
            ProfileEdit::SetBasics {
                field: BasicsField::Name,
                value: "Sam Lee".to_string(),
            },
        )
        .unwrap();

        assert_eq!(next.basics.name, "Sam Lee");
        assert_eq!(profile.basics.name, "Alex Johnson");
        assert_eq!(next.work, profile.work);
    }

    #[test]
    fn test_add_job_uses_present_end_date() {
        let next = apply_edit(&Profile::default(), ProfileEdit::AddJob).unwrap();
        assert_eq!(next.work.len(), 1);
        assert_eq!(next.work[0].end_date, ResumeDate::Present);
        assert!(next.work[0].highlights.is_empty());
    }

    #[test]
    fn test_new_highlight_starts_selected() {
        let profile = apply_edits(
            &Profile::default(),
            vec![
                ProfileEdit::AddJob,
                ProfileEdit::AddHighlight { parent: work(0) },
                ProfileEdit::SetHighlightText {
                    parent: work(0),
                    index: 0,
                    text: "Cut p99 latency by 40%".to_string(),
                },
            ],
        )
        .unwrap();

        let h = &profile.work[0].highlights[0];
        assert!(h.is_selected);
        assert_eq!(h.full_text, "Cut p99 latency by 40%");
    }

    #[test]
    fn test_toggle_selection_and_remove_highlight() {
        let profile = sample_profile();
        let toggled = apply_edit(
            &profile,
            ProfileEdit::SetHighlightSelected {
                parent: work(0),
                index: 3,
                selected: true,
            },
        )
        .unwrap();
        assert!(toggled.work[0].highlights[3].is_selected);

        let removed = apply_edit(
            &toggled,
            ProfileEdit::RemoveHighlight {
                parent: work(0),
                index: 0,
            },
        )
        .unwrap();
        assert_eq!(removed.work[0].highlights.len(), 3);
        assert_eq!(removed.work[0].highlights[0], profile.work[0].highlights[1]);
    }

    #[test]
    fn test_tag_lists_are_trimmed_and_deduplicated() {
        let profile = apply_edits(
            &sample_profile(),
            vec![ProfileEdit::SetHighlightTechStack {
                parent: HighlightParent {
                    section: Section::Projects,
                    index: 1,
                },
                index: 1,
                tech_stack: vec![
                    " Terraform ".to_string(),
                    "".to_string(),
                    "Terraform".to_string(),
                    "AWS".to_string(),
                ],
            }],
        )
        .unwrap();
        assert_eq!(
            profile.projects[1].highlights[1].tech_stack,
            vec!["Terraform", "AWS"]
        );
    }

    #[test]
    fn test_job_dates_are_parsed() {
        let profile = apply_edit(
            &sample_profile(),
            ProfileEdit::SetJobField {
                job: 1,
                field: JobField::EndDate,
                value: "present".to_string(),
            },
        )
        .unwrap();
        assert_eq!(profile.work[1].end_date, ResumeDate::Present);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let err = apply_edit(&Profile::default(), ProfileEdit::RemoveJob { job: 0 }).unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfRange {
                collection: "work",
                index: 0,
                len: 0
            }
        );

        let err = apply_edit(
            &sample_profile(),
            ProfileEdit::SetHighlightText {
                parent: work(2),
                index: 9,
                text: String::new(),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "work.highlights index 9 out of range (len 2)");
    }

    #[test]
    fn test_failed_batch_leaves_input_untouched() {
        let profile = sample_profile();
        let result = apply_edits(
            &profile,
            vec![ProfileEdit::AddSkillGroup, ProfileEdit::RemoveProject { project: 7 }],
        );
        assert!(result.is_err());
        assert_eq!(profile.skills.len(), 4);
    }

    #[test]
    fn test_edit_wire_format() {
        let json = r#"[
            {"op": "add_skill_group"},
            {"op": "set_skill_category", "group": 0, "category": "Languages"},
            {"op": "set_skill_items", "group": 0, "items": ["Rust", {"ignored": true}]}
        ]"#;
        assert!(serde_json::from_str::<Vec<ProfileEdit>>(json).is_err());

        let json = r#"[
            {"op": "add_skill_group"},
            {"op": "set_skill_category", "group": 0, "category": "Languages"},
            {"op": "set_skill_items", "group": 0, "items": ["Rust", "Go"]},
            {"op": "set_education_field", "education": 0, "field": "study_type", "value": "BSc"}
        ]"#;
        let edits: Vec<ProfileEdit> = serde_json::from_str(json).unwrap();
        let mut base = Profile::default();
        base.education.push(Education::default());
        let profile = apply_edits(&base, edits).unwrap();

        assert_eq!(profile.skills[0].category, "Languages");
        assert_eq!(profile.skills[0].items, vec!["Rust", "Go"]);
        assert_eq!(profile.education[0].study_type, "BSc");
    }

    #[test]
    fn test_profile_links() {
        let profile = apply_edits(
            &Profile::default(),
            vec![
                ProfileEdit::AddProfileLink,
                ProfileEdit::UpdateProfileLink {
                    index: 0,
                    network: "GitHub".to_string(),
                    url: "https://github.com/sam".to_string(),
                },
                ProfileEdit::AddProfileLink,
                ProfileEdit::RemoveProfileLink { index: 1 },
            ],
        )
        .unwrap();
        assert_eq!(profile.basics.profiles.len(), 1);
        assert_eq!(profile.basics.profiles[0].network, "GitHub");
    }
}
