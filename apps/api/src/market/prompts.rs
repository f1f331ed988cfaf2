// All LLM prompt constants for the market module.

/// Market overview prompt template. Replace `{month_year}` before sending.
pub const MARKET_OVERVIEW_PROMPT_TEMPLATE: &str = r#"Act as a premium market intelligence analyst for the Indian job market for {month_year}.
Your task is to provide a single, comprehensive market overview.

Return a JSON object with this EXACT schema (no extra fields):
{
  "trendingJobs": [
    {
      "title": "AI/ML Engineer",
      "salaryRange": "₹15-25 LPA",
      "growth": "Hot",
      "topIndustries": ["SaaS", "FinTech", "HealthTech"],
      "keySkills": ["Python", "TensorFlow", "Cloud (AWS/GCP)"]
    }
  ],
  "topSkills": ["Artificial Intelligence"]
}

Rules:
1. trendingJobs: 6-8 high-demand roles. For each, an estimated annual salary range in Indian Rupees (LPA format), a growth assessment that is exactly one of "Hot", "Growing", or "Stable", the top 3 hiring industries, and the top 3 key skills.
2. topSkills: 8 of the most in-demand skills right now, mixing technical and soft skills, focusing on what has become critical recently."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_year_placeholder_present() {
        assert!(MARKET_OVERVIEW_PROMPT_TEMPLATE.contains("{month_year}"));
    }
}
