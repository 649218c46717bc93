//! Job posting model and acquisition seam

use crate::error::{JobPilotError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A single job listing as obtained from a job source. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

fn default_platform() -> String {
    "fixture".to_string()
}

/// Acquisition is an external collaborator; the pipeline only consumes the
/// structured postings a source yields for the given search terms.
pub trait JobSource {
    fn fetch_jobs(&self, keywords: &[String], locations: &[String]) -> Result<Vec<JobPosting>>;
}

/// Fixture-backed source reading a JSON array of postings from disk.
pub struct JsonJobSource {
    data_path: PathBuf,
}

impl JsonJobSource {
    pub fn new(data_path: &Path) -> Self {
        Self {
            data_path: data_path.to_path_buf(),
        }
    }
}

impl JobSource for JsonJobSource {
    fn fetch_jobs(&self, _keywords: &[String], _locations: &[String]) -> Result<Vec<JobPosting>> {
        let content = std::fs::read_to_string(&self.data_path).map_err(|e| {
            JobPilotError::JobSource(format!(
                "Failed to read postings from {}: {}",
                self.data_path.display(),
                e
            ))
        })?;
        let postings: Vec<JobPosting> = serde_json::from_str(&content)?;
        Ok(postings)
    }
}

/// Collect postings from every configured source, preserving source order.
pub fn gather_jobs(
    sources: &[&dyn JobSource],
    keywords: &[String],
    locations: &[String],
) -> Result<Vec<JobPosting>> {
    let mut jobs = Vec::new();
    for source in sources {
        jobs.extend(source.fetch_jobs(keywords, locations)?);
    }
    Ok(jobs)
}
