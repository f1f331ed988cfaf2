//! The career recommendation document produced by the LLM.
//!
//! `summary` and `careerPath` are the required fields; every other section is
//! optional and validated only on the terminal snapshot of a stream.
//! Intermediate snapshots stay untyped (`serde_json::Value`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedRecommendation {
    pub summary: String,
    pub career_path: Vec<CareerPathStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_enhancements: Option<LinkedInEnhancement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_enhancements: Option<GitHubEnhancement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_analysis: Option<ProfileAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_analysis: Option<ProfileAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_plan: Option<GrowthPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathStep {
    pub title: String,
    pub duration: String,
    pub summary: String,
    pub skills_to_master: Vec<String>,
    pub potential_salary: String,
    /// Populated for the first career step only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_companies: Option<Vec<TargetCompany>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetCompany {
    pub company_name: String,
    pub roles: Vec<String>,
    #[serde(rename = "estimatedPackageLPA")]
    pub estimated_package_lpa: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInEnhancement {
    pub headline_slogan: String,
    pub summary_keywords: Vec<String>,
    pub recommended_courses: Vec<CourseLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubEnhancement {
    pub project_ideas: Vec<String>,
    pub profile_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPlan {
    /// 0-100 readiness for the recommended path.
    pub readiness_score: u32,
    pub kpis: Vec<GrowthPlanKpi>,
    pub action_items: Vec<GrowthPlanActionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPlanKpi {
    pub name: String,
    pub score: u32,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPlanActionItem {
    pub description: String,
}

/// Verdict from the profile-details validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default)]
    pub feedback: String,
}
