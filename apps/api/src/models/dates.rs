//! Résumé date fields: an ISO calendar date, the "Present" sentinel, or free text.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const PRESENT: &str = "Present";
const ISO_FORMAT: &str = "%Y-%m-%d";

/// A start/end date as typed into the editor.
///
/// Anything that is neither the sentinel nor a valid `YYYY-MM-DD` date is kept
/// verbatim as `Raw`, so user input is never lost on a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeDate {
    Present,
    Date(NaiveDate),
    Raw(String),
}

impl Default for ResumeDate {
    fn default() -> Self {
        ResumeDate::Raw(String::new())
    }
}

impl ResumeDate {
    /// Padded text is never normalized: `" 2019-06-15 "` stays `Raw`.
    pub fn parse(text: &str) -> Self {
        if text.eq_ignore_ascii_case(PRESENT) {
            return ResumeDate::Present;
        }
        if text.trim() != text {
            return ResumeDate::Raw(text.to_string());
        }
        match NaiveDate::parse_from_str(text, ISO_FORMAT) {
            Ok(date) => ResumeDate::Date(date),
            Err(_) => ResumeDate::Raw(text.to_string()),
        }
    }

    /// Human-readable form, e.g. "Mar 2022". Blank dates read as ongoing.
    pub fn label(&self) -> String {
        match self {
            ResumeDate::Present => PRESENT.to_string(),
            ResumeDate::Date(date) => date.format("%b %Y").to_string(),
            ResumeDate::Raw(text) if text.trim().is_empty() => PRESENT.to_string(),
            ResumeDate::Raw(text) => text.clone(),
        }
    }

    fn as_wire(&self) -> String {
        match self {
            ResumeDate::Present => PRESENT.to_string(),
            ResumeDate::Date(date) => date.format(ISO_FORMAT).to_string(),
            ResumeDate::Raw(text) => text.clone(),
        }
    }
}

impl Serialize for ResumeDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ResumeDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(ResumeDate::parse(&text))
    }
}
