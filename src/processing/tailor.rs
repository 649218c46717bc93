//! Per-posting content tailoring: highlight selection and cover letter
//! rendering

use crate::jobs::JobPosting;
use crate::processing::profile::Profile;
use crate::processing::tokenizer::Tokenizer;

pub const DEFAULT_HIGHLIGHT_LIMIT: usize = 5;
const SKILLS_IN_LETTER: usize = 6;
const COMPANY_FALLBACK: &str = "your team";

/// Pick up to `limit` resume lines relevant to the posting: experience
/// lines first, then project lines, kept when any description token occurs
/// as a case-insensitive substring of the line. When nothing matches,
/// synthesize highlights from the profile's leading skills so the result
/// is non-empty whenever the profile has skills.
pub fn select_highlights(profile: &Profile, posting: &JobPosting, limit: usize) -> Vec<String> {
    let tokenizer = Tokenizer::new();
    let desc_tokens = tokenizer.token_set(&posting.description);

    let mut highlights = Vec::new();
    for line in profile.experience.iter().chain(profile.projects.iter()) {
        if highlights.len() >= limit {
            break;
        }
        let lower = line.to_lowercase();
        if desc_tokens.iter().any(|token| lower.contains(token)) {
            highlights.push(line.clone());
        }
    }

    if highlights.is_empty() {
        highlights = profile
            .skills
            .iter()
            .take(limit)
            .map(|skill| format!("Experience with {}", skill))
            .collect();
    }
    highlights.truncate(limit);
    highlights
}

/// Render a cover letter by literal placeholder substitution. Placeholders
/// not present in the template are simply unused; unknown brace text is
/// left verbatim.
pub fn render_cover_letter(
    template: &str,
    profile: &Profile,
    posting: &JobPosting,
    highlights: &[String],
) -> String {
    let selected_skills = profile
        .skills
        .iter()
        .take(SKILLS_IN_LETTER)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let selected_highlight = highlights.first().map(String::as_str).unwrap_or("");
    let company = if posting.company.is_empty() {
        COMPANY_FALLBACK
    } else {
        posting.company.as_str()
    };

    template
        .replace("{JOB_TITLE}", &posting.title)
        .replace("{COMPANY}", company)
        .replace("{SKILLS}", &selected_skills)
        .replace("{HIGHLIGHT}", selected_highlight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn posting(description: &str, company: &str) -> JobPosting {
        JobPosting {
            id: "1".to_string(),
            title: "Engineer".to_string(),
            company: company.to_string(),
            location: "Remote".to_string(),
            description: description.to_string(),
            platform: "fixture".to_string(),
            url: None,
            metadata: HashMap::new(),
        }
    }

    fn profile() -> Profile {
        Profile {
            raw_text: String::new(),
            name: None,
            email: None,
            phone: None,
            skills: vec!["aws".to_string(), "python".to_string()],
            experience: vec![
                "Built scalable APIs in Python".to_string(),
                "Maintained legacy Perl tooling".to_string(),
            ],
            education: vec!["BSc".to_string()],
            projects: vec!["Dockerized a build farm".to_string()],
        }
    }

    #[test]
    fn test_highlights_match_description_tokens() {
        let highlights = select_highlights(
            &profile(),
            &posting("Python and Docker experience wanted", "Acme"),
            DEFAULT_HIGHLIGHT_LIMIT,
        );

        assert_eq!(
            highlights,
            vec!["Built scalable APIs in Python", "Dockerized a build farm"]
        );
    }

    #[test]
    fn test_highlight_limit_is_respected() {
        let mut p = profile();
        p.experience = (0..10).map(|i| format!("python task {}", i)).collect();

        let highlights = select_highlights(&p, &posting("python", "Acme"), 3);
        assert_eq!(highlights.len(), 3);
    }

    #[test]
    fn test_skill_fallback_when_nothing_matches() {
        let highlights = select_highlights(
            &profile(),
            &posting("underwater basket weaving", "Acme"),
            DEFAULT_HIGHLIGHT_LIMIT,
        );

        assert_eq!(
            highlights,
            vec!["Experience with aws", "Experience with python"]
        );
    }

    #[test]
    fn test_cover_letter_substitution() {
        let template = "Dear {COMPANY}, I am excited about the {JOB_TITLE} role. {HIGHLIGHT}";
        let letter = render_cover_letter(
            template,
            &profile(),
            &posting("", "Acme"),
            &["Built scalable APIs".to_string()],
        );

        assert_eq!(
            letter,
            "Dear Acme, I am excited about the Engineer role. Built scalable APIs"
        );
    }

    #[test]
    fn test_company_fallback_and_unknown_placeholders() {
        let template = "To {COMPANY}: {SKILLS} / {UNKNOWN}";
        let letter = render_cover_letter(template, &profile(), &posting("", ""), &[]);

        assert_eq!(letter, "To your team: aws, python / {UNKNOWN}");
    }
}
