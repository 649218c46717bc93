//! User preference management for the job pilot

use crate::error::{JobPilotError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Search and submission preferences, loaded once per run.
///
/// Skill lists are normalized to lowercase at load time so they can be
/// compared directly against tokenized posting text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub target_locations: Vec<String>,
    pub target_titles: Vec<String>,
    pub required_skills: Vec<String>,
    pub optional_skills: Vec<String>,
    pub throttle_seconds: f64,
    pub review_mode: bool,
    pub min_score: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            target_locations: Vec::new(),
            target_titles: Vec::new(),
            required_skills: Vec::new(),
            optional_skills: Vec::new(),
            throttle_seconds: 2.0,
            review_mode: false,
            min_score: 0.45,
        }
    }
}

impl Preferences {
    /// Load preferences from a JSON document. All keys are optional and
    /// fall back to the defaults above; a value of the wrong type is a
    /// fatal configuration error naming the offending key.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JobPilotError::Configuration(format!(
                "Preferences file not found at {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let raw: Value = serde_json::from_str(&content)?;
        let map = raw.as_object().ok_or_else(|| {
            JobPilotError::Configuration(format!(
                "Preferences document must be a JSON object: {}",
                path.display()
            ))
        })?;

        let defaults = Self::default();
        Ok(Self {
            target_locations: string_list(map, "target_locations")?,
            target_titles: string_list(map, "target_titles")?,
            required_skills: lowercase(string_list(map, "required_skills")?),
            optional_skills: lowercase(string_list(map, "optional_skills")?),
            throttle_seconds: number(map, "throttle_seconds", defaults.throttle_seconds)?,
            review_mode: boolean(map, "review_mode", defaults.review_mode)?,
            min_score: number(map, "min_score", defaults.min_score)?,
        })
    }
}

fn string_list(map: &serde_json::Map<String, Value>, key: &str) -> Result<Vec<String>> {
    match map.get(key) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    JobPilotError::Configuration(format!(
                        "'{}' must be a list of strings",
                        key
                    ))
                })
            })
            .collect(),
        Some(_) => Err(JobPilotError::Configuration(format!(
            "'{}' must be a list of strings",
            key
        ))),
    }
}

fn number(map: &serde_json::Map<String, Value>, key: &str, default: f64) -> Result<f64> {
    match map.get(key) {
        None => Ok(default),
        Some(value) => value.as_f64().ok_or_else(|| {
            JobPilotError::Configuration(format!("'{}' must be a number", key))
        }),
    }
}

fn boolean(map: &serde_json::Map<String, Value>, key: &str, default: bool) -> Result<bool> {
    match map.get(key) {
        None => Ok(default),
        Some(value) => value.as_bool().ok_or_else(|| {
            JobPilotError::Configuration(format!("'{}' must be a boolean", key))
        }),
    }
}

fn lowercase(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.to_lowercase()).collect()
}
