use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ResultSource;

/// Growth trajectory of a trending role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthTrend {
    Hot,
    Growing,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingJob {
    pub title: String,
    /// Annual range in LPA format, e.g. "₹12-18 LPA".
    pub salary_range: String,
    pub growth: GrowthTrend,
    pub top_industries: Vec<String>,
    pub key_skills: Vec<String>,
}

/// LLM-generated market snapshot: trending roles plus in-demand skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    pub trending_jobs: Vec<TrendingJob>,
    pub top_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverviewResponse {
    #[serde(flatten)]
    pub overview: MarketOverview,
    pub last_updated: DateTime<Utc>,
    pub source: ResultSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTrend {
    pub name: String,
    pub description: String,
    /// Relevance to the queried role, 1-10.
    pub relevance: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub title: String,
    pub platform: String,
    pub url: String,
    pub description: String,
}

/// Result of the external job-market analysis backend for one job title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub job_title: String,
    pub summary: String,
    pub trending_skills: Vec<SkillTrend>,
    pub recommended_courses: Vec<CourseRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub source: ResultSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_trend_wire_names() {
        assert_eq!(serde_json::to_string(&GrowthTrend::Hot).unwrap(), "\"Hot\"");
        let parsed: GrowthTrend = serde_json::from_str("\"Growing\"").unwrap();
        assert_eq!(parsed, GrowthTrend::Growing);
    }

    #[test]
    fn test_analysis_result_camel_case() {
        let json = r#"{
            "jobTitle": "Data Scientist",
            "summary": "In demand",
            "trendingSkills": [{"name": "SQL", "description": "Queries", "relevance": 9}],
            "recommendedCourses": []
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.job_title, "Data Scientist");
        assert_eq!(result.trending_skills[0].relevance, 9);
    }
}
