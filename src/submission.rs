//! Application submission: review gating, artifact writing, pacing, and
//! the append-only application log

use crate::config::Preferences;
use crate::error::{JobPilotError, Result};
use crate::processing::profile::Profile;
use crate::processing::scorer::MatchResult;
use crate::processing::tailor::{render_cover_letter, select_highlights, DEFAULT_HIGHLIGHT_LIMIT};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One submitted application. Append-only; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub platform: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub notes: String,
}

/// Persistence collaborator for submission records. The pipeline never
/// reads the log back.
pub trait ApplicationLog {
    fn record(&mut self, record: &ApplicationRecord) -> Result<()>;
}

/// Append-only JSONL log, one record per line.
pub struct JsonlApplicationLog {
    path: PathBuf,
}

impl JsonlApplicationLog {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl ApplicationLog for JsonlApplicationLog {
    fn record(&mut self, record: &ApplicationRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(record)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

/// Walk the ranked matches and submit every accepted one: score gate,
/// optional human review, tailored artifacts, throttle, log entry. The
/// review decision is injected so this loop stays testable without
/// interactive input.
pub fn apply_matches(
    matches: &[MatchResult],
    profile: &Profile,
    prefs: &Preferences,
    cover_letter_template: &str,
    artifacts_dir: &Path,
    log: &mut dyn ApplicationLog,
    review: &mut dyn FnMut(&MatchResult) -> bool,
) -> Result<Vec<ApplicationRecord>> {
    let mut records = Vec::new();

    for m in matches {
        if m.score < prefs.min_score {
            debug!(
                "Skipping {} ({}): score {:.2} below minimum {:.2}",
                m.posting.title, m.posting.company, m.score, prefs.min_score
            );
            continue;
        }

        if prefs.review_mode && !review(m) {
            info!("Declined in review: {} at {}", m.posting.title, m.posting.company);
            continue;
        }

        let highlights = select_highlights(profile, &m.posting, DEFAULT_HIGHLIGHT_LIMIT);
        let cover_letter = render_cover_letter(cover_letter_template, profile, &m.posting, &highlights);
        persist_cover_letter(artifacts_dir, m, &cover_letter)?;

        std::thread::sleep(Duration::from_secs_f64(prefs.throttle_seconds.max(0.0)));

        let record = ApplicationRecord {
            job_id: m.posting.id.clone(),
            job_title: m.posting.title.clone(),
            company: m.posting.company.clone(),
            platform: m.posting.platform.clone(),
            status: "applied".to_string(),
            submitted_at: Utc::now(),
            notes: format!(
                "Score: {:.2}; skills: {}",
                m.score,
                m.breakdown.skill_overlap.join(", ")
            ),
        };
        log.record(&record)?;
        info!("Applied to {} at {}", record.job_title, record.company);
        records.push(record);
    }

    Ok(records)
}

fn persist_cover_letter(artifacts_dir: &Path, m: &MatchResult, cover_letter: &str) -> Result<()> {
    std::fs::create_dir_all(artifacts_dir)?;
    let sanitized = format!("{}_{}", m.posting.company, m.posting.title).replace(' ', "_");
    let path = artifacts_dir.join(format!("{}.txt", sanitized));
    std::fs::write(&path, cover_letter).map_err(|e| {
        JobPilotError::Submission(format!(
            "Failed to write cover letter {}: {}",
            path.display(),
            e
        ))
    })?;
    debug!("Wrote cover letter to {}", path.display());
    Ok(())
}
