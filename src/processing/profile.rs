//! Resume structuring: raw document text into a structured profile

use crate::error::Result;
use crate::input::extract_document;
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Process-wide default skill vocabulary. Immutable configuration data;
/// callers merge extra skills on top before structuring.
pub const DEFAULT_KNOWN_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "go",
    "c++",
    "c#",
    "aws",
    "gcp",
    "azure",
    "docker",
    "kubernetes",
    "terraform",
    "react",
    "vue",
    "angular",
    "django",
    "fastapi",
    "flask",
    "postgres",
    "mysql",
    "mongodb",
    "redis",
    "rabbitmq",
    "kafka",
    "pandas",
    "numpy",
    "pytorch",
    "tensorflow",
];

/// Merge the default vocabulary with caller-supplied extra skills,
/// lowercased and deduplicated, defaults first.
pub fn merged_vocabulary(extra_skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();
    for skill in DEFAULT_KNOWN_SKILLS
        .iter()
        .map(|s| s.to_string())
        .chain(extra_skills.iter().map(|s| s.to_lowercase()))
    {
        if !skill.is_empty() && seen.insert(skill.clone()) {
            vocabulary.push(skill);
        }
    }
    vocabulary
}

/// Structured representation of a resume. The raw text is the immutable
/// source of truth; every other field is a best-effort extraction and may
/// legitimately be absent or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub raw_text: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub projects: Vec<String>,
}

const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "degree"];
const PROJECT_KEYWORDS: &[&str] = &["projects", "project"];

const MAX_EXPERIENCE_LINES: usize = 20;
const MAX_EDUCATION_LINES: usize = 10;
const MAX_PROJECT_LINES: usize = 10;

/// Turns raw resume text into a [`Profile`] using substring and regex
/// heuristics. Skill detection is literal substring containment over the
/// whole document, intentionally distinct from the token-set membership
/// used when scoring postings.
pub struct ResumeStructurer {
    email_regex: Regex,
    phone_regex: Regex,
}

impl Default for ResumeStructurer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeStructurer {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[\w.\-]+@[\w.\-]+").expect("Invalid email regex");

        let phone_regex = Regex::new(r"(\+\d{1,2}\s?)?(\(?\d{3}\)?[\s\-]?)?\d{3}[\s\-]?\d{4}")
            .expect("Invalid phone regex");

        Self {
            email_regex,
            phone_regex,
        }
    }

    /// Read and structure a resume document from disk. Binary formats are
    /// decoded best-effort, falling back to a plain-text read.
    pub fn structure_file(&self, path: &Path, known_skills: &[String]) -> Result<Profile> {
        let text = extract_document(path)?;
        Ok(self.structure(&text, known_skills))
    }

    /// Structure already-extracted text. Total: absence of any field is an
    /// expected outcome, never an error.
    pub fn structure(&self, text: &str, known_skills: &[String]) -> Profile {
        let skills = self.detect_skills(text, known_skills);
        let (name, email, phone) = self.extract_contact(text);
        let experience = extract_section_lines(text, EXPERIENCE_KEYWORDS, MAX_EXPERIENCE_LINES);
        let education = extract_section_lines(text, EDUCATION_KEYWORDS, MAX_EDUCATION_LINES);
        let projects = extract_section_lines(text, PROJECT_KEYWORDS, MAX_PROJECT_LINES);

        Profile {
            raw_text: text.to_string(),
            name,
            email,
            phone,
            skills,
            experience,
            education,
            projects,
        }
    }

    /// Case-insensitive literal substring scan of the whole document
    /// against the skill vocabulary. Multi-word skills match here because
    /// no tokenization is involved. Reported sorted for determinism.
    fn detect_skills(&self, text: &str, known_skills: &[String]) -> Vec<String> {
        let patterns: Vec<String> = {
            let mut seen = HashSet::new();
            known_skills
                .iter()
                .map(|s| s.to_lowercase())
                .filter(|s| !s.is_empty() && seen.insert(s.clone()))
                .collect()
        };
        if patterns.is_empty() {
            return Vec::new();
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .expect("Failed to build skill matcher");

        let mut hit_indices = HashSet::new();
        for hit in matcher.find_overlapping_iter(text) {
            hit_indices.insert(hit.pattern().as_usize());
        }

        let mut skills: Vec<String> = hit_indices
            .into_iter()
            .map(|i| patterns[i].clone())
            .collect();
        skills.sort();
        skills
    }

    fn extract_contact(&self, text: &str) -> (Option<String>, Option<String>, Option<String>) {
        let email = self.email_regex.find(text).map(|m| m.as_str().to_string());
        let phone = self.phone_regex.find(text).map(|m| m.as_str().to_string());

        // First non-blank line qualifies as a name only when it looks like
        // 3-4 words and the whole document carries no contact info. The
        // document-wide coupling is a known quirk, kept until product
        // confirms a change.
        let name = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .filter(|line| {
                let words = line.split_whitespace().count();
                (3..=4).contains(&words) && email.is_none() && phone.is_none()
            })
            .map(str::to_string);

        (name, email, phone)
    }
}

/// Capture the lines following a section keyword line. The keyword line
/// itself is skipped, and capture ends at a blank line, a `---` divider,
/// or the line cap. A later keyword line re-arms capture.
fn extract_section_lines(text: &str, keywords: &[&str], max_lines: usize) -> Vec<String> {
    let mut collected = Vec::new();
    let mut capture = false;

    for line in text.lines().map(str::trim) {
        let lower = line.to_lowercase();
        if keywords.iter().any(|kw| lower.contains(kw)) {
            capture = true;
            continue;
        }
        if capture {
            if line.is_empty() || lower.starts_with("---") {
                break;
            }
            collected.push(line.to_string());
            if collected.len() >= max_lines {
                break;
            }
        }
    }
    collected
}
