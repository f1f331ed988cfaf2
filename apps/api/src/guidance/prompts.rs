// All LLM prompt constants for the guidance module.

/// Personalized guidance prompt template. Replace `{skills}` before sending.
pub const GUIDANCE_PROMPT_TEMPLATE: &str = r#"Act as a helpful career coach. The user has provided their current technical skills.
Based ONLY on these skills, provide personalized recommendations for:
1. Online Courses: 3-4 specific courses from reputable platforms (Coursera, Udemy, edX) that deepen existing skills or add complementary ones. For each, a short personalized reason why it fits.
2. Job Platforms: 3-4 of the most effective job platforms or communities for someone with this skill set. For each, a brief personalized reason.

User's Skills: "{skills}"

Return a JSON object with this EXACT schema (no extra fields):
{
  "recommendedCourses": [
    {"title": "course", "platform": "Coursera", "url": "https://...", "reason": "why it fits"}
  ],
  "jobPlatforms": [
    {"name": "LinkedIn", "url": "https://...", "reason": "why it fits"}
  ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_placeholder_present() {
        assert!(GUIDANCE_PROMPT_TEMPLATE.contains("{skills}"));
    }
}
