use std::str::FromStr;

use anyhow::{Context, Result};

use crate::tailoring::highlight_selector::{
    SelectionLimits, DEFAULT_JOB_HIGHLIGHT_LIMIT, DEFAULT_PROJECT_HIGHLIGHT_LIMIT,
};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub limits: SelectionLimits,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (env, test map, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            limits: SelectionLimits {
                job_highlights: parse_or(&lookup, "JOB_HIGHLIGHT_LIMIT", DEFAULT_JOB_HIGHLIGHT_LIMIT)?,
                project_highlights: parse_or(
                    &lookup,
                    "PROJECT_HIGHLIGHT_LIMIT",
                    DEFAULT_PROJECT_HIGHLIGHT_LIMIT,
                )?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
