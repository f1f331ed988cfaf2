// All LLM prompt constants for the recommendation module.

/// System prompt for career recommendations — enforces JSON-only output and
/// the stable top-level key order the streaming reveal relies on.
pub const RECOMMENDATION_SYSTEM: &str =
    "You are an elite career strategist, performance review coach, and industry \
    insider with deep expertise in the Indian job market. \
    You MUST respond with a single valid JSON object and nothing else. \
    Do NOT use markdown code fences. \
    Do NOT include explanations outside the JSON. \
    Emit the top-level keys in exactly this order: summary, careerPath, \
    linkedinEnhancements, githubEnhancements, linkedinAnalysis, githubAnalysis, \
    growthPlan.";

/// Career recommendation prompt template.
/// Replace: {user_profile}, {college_tier}, {time_to_graduate}, {cgpa},
///          {linkedin_url}, {github_url}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Your response MUST be a comprehensive, actionable, multi-year career plan based on a rich, structured user profile.

CRITICAL INSTRUCTIONS:
1. INDIAN CONTEXT: All recommendations must be relevant to the Indian job market.
2. CURRENCY & SALARY FORMAT: All salary figures MUST be in Indian Rupees (₹) and use the Lakhs Per Annum (LPA) format (e.g., '₹8-12 LPA').
3. DEEP ANALYSIS: Leverage all the detailed information provided in the user's profile for a hyper-personalized analysis.

Student's Comprehensive Profile:
{user_profile}
- College Tier: {college_tier}
- Time until graduation: {time_to_graduate}
- Current CGPA: {cgpa}
- LinkedIn Profile: {linkedin_url}
- GitHub Profile: {github_url}

Based on this ENTIRE DETAILED PROFILE, generate the following, adhering strictly to the JSON schema below:

1. Career Timeline (5-10 years): a detailed, step-by-step career progression.
   - For THE VERY FIRST STEP only, include "targetCompanies": 3-4 top companies hiring for this role in India, each with the exact entry-level roles to target, the specific skills required (cross-referenced with the user's skills), and an estimated package in LPA format.
   - For ALL subsequent steps, provide title, duration, summary, skillsToMaster, and potentialSalary. Omit targetCompanies.
2. Overall Summary: a brief, high-level summary of the entire career path.
3. LinkedIn Analysis & Enhancement (ONLY if a LinkedIn URL is provided): a strengths/weaknesses analysis plus an enhancement plan.
4. GitHub Analysis & Enhancement (ONLY if a GitHub URL is provided): a strengths/weaknesses analysis plus a plan with project ideas that fill identified gaps.
5. AI Performance Review & Growth Plan: a Career Readiness Score (0-100), broken into 3-4 KPIs (each with name, 0-100 score, and a personalized summary), and a checklist of 3-5 concrete action items.

Return a JSON object with this EXACT schema (no extra fields):
{
  "summary": "high-level summary of the recommended path",
  "careerPath": [
    {
      "title": "Backend Engineer",
      "duration": "Years 0-2",
      "summary": "key goals and responsibilities for this stage",
      "skillsToMaster": ["Rust", "PostgreSQL"],
      "potentialSalary": "₹8-12 LPA",
      "targetCompanies": [
        {
          "companyName": "Infosys",
          "roles": ["Systems Engineer"],
          "estimatedPackageLPA": "₹4-6 LPA",
          "requiredSkills": ["Java", "SQL"]
        }
      ]
    }
  ],
  "linkedinEnhancements": {
    "headlineSlogan": "keyword-rich headline",
    "summaryKeywords": ["keyword"],
    "recommendedCourses": [{"title": "course", "url": "https://..."}]
  },
  "githubEnhancements": {
    "projectIdeas": ["idea"],
    "profileTips": ["tip"]
  },
  "linkedinAnalysis": {"strengths": ["..."], "weaknesses": ["..."]},
  "githubAnalysis": {"strengths": ["..."], "weaknesses": ["..."]},
  "growthPlan": {
    "readinessScore": 72,
    "kpis": [{"name": "Technical Skill Alignment", "score": 70, "summary": "..."}],
    "actionItems": [{"description": "a single, actionable task"}]
  }
}

summary and careerPath are mandatory. Omit linkedinEnhancements/linkedinAnalysis when no LinkedIn URL was provided, and githubEnhancements/githubAnalysis when no GitHub URL was provided."#;

/// Profile-details validation prompt template.
/// Replace: {name}, {college}
pub const VALIDATION_PROMPT_TEMPLATE: &str = r#"Act as a data validator. Analyze the provided user details.
- Name: "{name}"
- College: "{college}"

Check whether these look like real, legitimate user inputs or like placeholders, test data, or nonsensical entries (e.g., "Test User", "asdf", "My College"). An empty or generic college name is not valid.

Return a JSON object with this EXACT schema:
{
  "isValid": true,
  "feedback": "empty when valid; otherwise a friendly message explaining what seems wrong, e.g. 'The college name seems to be a placeholder. Please provide your actual college for a better recommendation.'"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_template_placeholders_present() {
        for placeholder in [
            "{user_profile}",
            "{college_tier}",
            "{time_to_graduate}",
            "{cgpa}",
            "{linkedin_url}",
            "{github_url}",
        ] {
            assert!(
                RECOMMENDATION_PROMPT_TEMPLATE.contains(placeholder),
                "missing {placeholder}"
            );
        }
    }

    #[test]
    fn test_validation_template_placeholders_present() {
        assert!(VALIDATION_PROMPT_TEMPLATE.contains("{name}"));
        assert!(VALIDATION_PROMPT_TEMPLATE.contains("{college}"));
    }
}
