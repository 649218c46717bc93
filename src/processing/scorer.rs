//! Deterministic, explainable match scoring for (profile, posting,
//! preferences) triples

use crate::config::Preferences;
use crate::jobs::JobPosting;
use crate::processing::profile::Profile;
use crate::processing::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const REQUIRED_WEIGHT: f64 = 0.55;
pub const OPTIONAL_HIT_BONUS: f64 = 0.05;
pub const TITLE_BONUS: f64 = 0.15;
pub const LOCATION_BONUS: f64 = 0.1;
pub const SKILL_HIT_BONUS: f64 = 0.03;

/// Which signals contributed to a score. Recomputed on every score call,
/// never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skill_overlap: Vec<String>,
    pub location_match: bool,
    pub title_match: bool,
    pub keyword_hits: Vec<String>,
}

/// A posting with its relevance score in [0, 1] and the explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub posting: JobPosting,
    pub score: f64,
    pub breakdown: MatchBreakdown,
}

/// Scores postings against a profile and preferences. Pure and total:
/// missing or empty fields contribute zero rather than erroring.
pub struct MatchScorer {
    tokenizer: Tokenizer,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Score every posting independently, then stable-sort descending so
    /// equal scores keep their input order.
    pub fn rank(
        &self,
        profile: &Profile,
        postings: &[JobPosting],
        prefs: &Preferences,
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = postings
            .iter()
            .map(|posting| self.score(profile, posting, prefs))
            .collect();
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }

    pub fn score(
        &self,
        profile: &Profile,
        posting: &JobPosting,
        prefs: &Preferences,
    ) -> MatchResult {
        let desc_tokens = self.tokenizer.token_set(&posting.description);

        // Skills count only when the whole skill string is itself a token.
        // Multi-word skills never match here, unlike the substring scan
        // used during resume structuring.
        let skill_hits = intersect_ordered(&profile.skills, &desc_tokens);
        let required_hits = intersect_ordered(&prefs.required_skills, &desc_tokens);
        let optional_hits = intersect_ordered(&prefs.optional_skills, &desc_tokens);

        let required_score =
            required_hits.len() as f64 / prefs.required_skills.len().max(1) as f64;
        let optional_score = optional_hits.len() as f64 * OPTIONAL_HIT_BONUS;

        let title_match = contains_any_ci(&posting.title, &prefs.target_titles);
        let title_score = if title_match { TITLE_BONUS } else { 0.0 };

        let location_match = contains_any_ci(&posting.location, &prefs.target_locations);
        let location_score = if location_match { LOCATION_BONUS } else { 0.0 };

        let skill_score = skill_hits.len() as f64 * SKILL_HIT_BONUS;

        let raw_score = required_score * REQUIRED_WEIGHT
            + optional_score
            + title_score
            + location_score
            + skill_score;
        let score = raw_score.clamp(0.0, 1.0);

        let keyword_hits = required_hits
            .iter()
            .chain(optional_hits.iter())
            .cloned()
            .collect();

        MatchResult {
            posting: posting.clone(),
            score,
            breakdown: MatchBreakdown {
                skill_overlap: skill_hits,
                location_match,
                title_match,
                keyword_hits,
            },
        }
    }
}

/// Keep the elements of `candidates` that appear in the token set, in
/// candidate order.
fn intersect_ordered(candidates: &[String], tokens: &HashSet<String>) -> Vec<String> {
    candidates
        .iter()
        .filter(|c| tokens.contains(*c))
        .cloned()
        .collect()
}

/// True when any needle is a case-insensitive substring of the haystack.
fn contains_any_ci(haystack: &str, needles: &[String]) -> bool {
    let lowered = haystack.to_lowercase();
    needles.iter().any(|n| lowered.contains(&n.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn posting(id: &str, title: &str, location: &str, description: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            description: description.to_string(),
            platform: "fixture".to_string(),
            url: None,
            metadata: HashMap::new(),
        }
    }

    fn profile_with_skills(skills: &[&str]) -> Profile {
        Profile {
            raw_text: String::new(),
            name: None,
            email: None,
            phone: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
        }
    }

    fn prefs() -> Preferences {
        Preferences::default()
    }

    #[test]
    fn test_reference_scoring_scenario() {
        let scorer = MatchScorer::new();
        let profile = profile_with_skills(&["python", "aws"]);
        let mut preferences = prefs();
        preferences.required_skills = vec!["python".to_string()];
        preferences.optional_skills = vec!["aws".to_string(), "docker".to_string()];

        let job = posting(
            "1",
            "Backend Role",
            "Remote",
            "Senior Python Engineer needed, AWS and Docker a plus",
        );
        let result = scorer.score(&profile, &job, &preferences);

        assert_eq!(result.breakdown.keyword_hits, vec!["python", "aws", "docker"]);
        assert_eq!(result.breakdown.skill_overlap, vec!["python", "aws"]);
        assert!(!result.breakdown.title_match);
        assert!(!result.breakdown.location_match);
        // 1.0 * 0.55 + 2 * 0.05 + 2 * 0.03
        assert!((result.score - 0.71).abs() < 1e-9);
    }

    #[test]
    fn test_empty_required_skills_is_not_a_division_error() {
        let scorer = MatchScorer::new();
        let profile = profile_with_skills(&[]);
        let result = scorer.score(&profile, &posting("1", "T", "L", "D"), &prefs());

        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_score_is_clamped_to_one() {
        let scorer = MatchScorer::new();
        // 40 profile skills all present: 40 * 0.03 alone exceeds 1.0.
        let skills: Vec<String> = (b'a'..=b'z')
            .flat_map(|first| (b'a'..=b'z').map(move |second| {
                format!("{}{}", first as char, second as char)
            }))
            .take(40)
            .collect();
        let skill_refs: Vec<&str> = skills.iter().map(|s| s.as_str()).collect();
        let profile = profile_with_skills(&skill_refs);

        let description = skills.join(" ");
        let result = scorer.score(&profile, &posting("1", "T", "L", &description), &prefs());

        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_title_and_location_are_substring_matches() {
        let scorer = MatchScorer::new();
        let profile = profile_with_skills(&[]);
        let mut preferences = prefs();
        preferences.target_titles = vec!["engineer".to_string()];
        preferences.target_locations = vec!["berlin".to_string()];

        let job = posting("1", "Senior Engineer", "Berlin, Germany", "");
        let result = scorer.score(&profile, &job, &preferences);

        assert!(result.breakdown.title_match);
        assert!(result.breakdown.location_match);
        assert!((result.score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_multiword_skill_never_matches_tokens() {
        let scorer = MatchScorer::new();
        let profile = profile_with_skills(&["machine learning"]);
        let job = posting("1", "T", "L", "We do machine learning here");
        let result = scorer.score(&profile, &job, &prefs());

        assert!(result.breakdown.skill_overlap.is_empty());
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_rank_is_stable_for_equal_scores() {
        let scorer = MatchScorer::new();
        let profile = profile_with_skills(&["python"]);

        let tied_a = posting("a", "T", "L", "python shop");
        let tied_b = posting("b", "T", "L", "python, all day");
        let winner = posting("c", "T", "L", "python");
        let mut preferences = prefs();
        preferences.required_skills = vec!["python".to_string()];

        let ranked = scorer.rank(
            &profile,
            &[tied_a, tied_b, winner],
            &preferences,
        );

        // All three score identically; input order must survive.
        assert_eq!(ranked[0].posting.id, "a");
        assert_eq!(ranked[1].posting.id, "b");
        assert_eq!(ranked[2].posting.id, "c");
    }

    #[test]
    fn test_rank_sorts_descending() {
        let scorer = MatchScorer::new();
        let profile = profile_with_skills(&["python", "aws"]);

        let weak = posting("weak", "T", "L", "nothing relevant");
        let strong = posting("strong", "T", "L", "python and aws");
        let ranked = scorer.rank(&profile, &[weak, strong], &prefs());

        assert_eq!(ranked[0].posting.id, "strong");
        assert_eq!(ranked[1].posting.id, "weak");
    }
}
