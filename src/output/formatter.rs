//! Console formatter for the ranked match report

use crate::processing::scorer::MatchResult;
use colored::Colorize;

/// Renders ranked matches for the terminal. Colors encode the score band;
/// they can be disabled for piped output.
pub struct MatchReporter {
    use_colors: bool,
    limit: usize,
}

impl MatchReporter {
    pub fn new(use_colors: bool, limit: usize) -> Self {
        Self { use_colors, limit }
    }

    pub fn print_top_matches(&self, matches: &[MatchResult], min_score: f64) {
        println!("Top matches:");
        for m in matches.iter().take(self.limit) {
            println!(" - {}", self.format_match(m, min_score));
        }
        if matches.is_empty() {
            println!(" (no postings scored)");
        }
    }

    pub fn format_match(&self, m: &MatchResult, min_score: f64) -> String {
        let score = format!("{:.2}", m.score);
        let score = if !self.use_colors {
            score.normal()
        } else if m.score >= min_score {
            score.green().bold()
        } else if m.score >= min_score / 2.0 {
            score.yellow()
        } else {
            score.red()
        };

        let mut line = format!(
            "{} @ {} ({}) | score={}",
            m.posting.title, m.posting.company, m.posting.location, score
        );
        if !m.breakdown.skill_overlap.is_empty() {
            line.push_str(&format!(" | skills: {}", m.breakdown.skill_overlap.join(", ")));
        }
        if m.breakdown.title_match {
            line.push_str(" | title match");
        }
        if m.breakdown.location_match {
            line.push_str(" | location match");
        }
        line
    }
}
