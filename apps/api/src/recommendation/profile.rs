//! Renders a stored user profile into the text block consumed by the
//! recommendation and validation prompts.

use crate::models::user::UserRow;

/// Bulleted profile summary. Unfilled fields render as "Not specified" so
/// the model gives foundational guidance instead of refusing.
pub fn profile_summary(user: &UserRow) -> String {
    format!(
        "- Languages: {}\n\
         - Frameworks & Libraries: {}\n\
         - Tools & Technologies: {}\n\
         - Platforms: {}\n\
         - Soft Skills: {}\n\
         - Projects: {}\n\
         - Certifications: {}",
        or_unspecified(&user.languages),
        or_unspecified(&user.frameworks),
        or_unspecified(&user.tools),
        or_unspecified(&user.platforms),
        or_unspecified(&user.soft_skills),
        or_unspecified(&user.projects),
        or_unspecified(&user.certifications),
    )
}

/// "Recently Graduated" once the graduation year has passed, otherwise the
/// remaining count as "N year(s)". An unparseable year counts as current.
pub fn time_to_graduate(grad_year: &str, now_year: i32) -> String {
    let year = grad_year.trim().parse::<i32>().unwrap_or(now_year);
    let remaining = year - now_year;
    if remaining <= 0 {
        "Recently Graduated".to_string()
    } else {
        format!("{remaining} year(s)")
    }
}

/// Comma-joined technical skill categories (soft skills excluded). Empty when
/// the user has filled in none of them.
pub fn technical_skills(user: &UserRow) -> String {
    [
        user.languages.as_str(),
        user.frameworks.as_str(),
        user.tools.as_str(),
        user.platforms.as_str(),
    ]
    .iter()
    .map(|s| s.trim())
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

fn or_unspecified(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Not specified"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRow;

    fn user() -> UserRow {
        UserRow::new(
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            "digest".to_string(),
        )
    }

    #[test]
    fn test_empty_profile_renders_not_specified() {
        let summary = profile_summary(&user());
        assert!(summary.contains("- Languages: Not specified"));
        assert!(summary.contains("- Certifications: Not specified"));
    }

    #[test]
    fn test_filled_fields_render_verbatim() {
        let mut u = user();
        u.languages = "Rust, Python".to_string();
        u.projects = "A toy database".to_string();
        let summary = profile_summary(&u);
        assert!(summary.contains("- Languages: Rust, Python"));
        assert!(summary.contains("- Projects: A toy database"));
    }

    #[test]
    fn test_time_to_graduate_future() {
        assert_eq!(time_to_graduate("2028", 2026), "2 year(s)");
        assert_eq!(time_to_graduate("2027", 2026), "1 year(s)");
    }

    #[test]
    fn test_time_to_graduate_past_or_now() {
        assert_eq!(time_to_graduate("2026", 2026), "Recently Graduated");
        assert_eq!(time_to_graduate("2020", 2026), "Recently Graduated");
    }

    #[test]
    fn test_time_to_graduate_unparseable_counts_as_current() {
        assert_eq!(time_to_graduate("soon", 2026), "Recently Graduated");
        assert_eq!(time_to_graduate("", 2026), "Recently Graduated");
    }

    #[test]
    fn test_technical_skills_joins_non_empty() {
        let mut u = user();
        u.languages = "Rust".to_string();
        u.platforms = "AWS".to_string();
        assert_eq!(technical_skills(&u), "Rust, AWS");
    }

    #[test]
    fn test_technical_skills_empty_profile() {
        assert_eq!(technical_skills(&user()), "");
    }

    #[test]
    fn test_technical_skills_excludes_soft_skills() {
        let mut u = user();
        u.soft_skills = "Communication".to_string();
        assert_eq!(technical_skills(&u), "");
    }
}
