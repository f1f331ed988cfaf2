use serde::{Deserialize, Serialize};

use crate::models::ResultSource;

/// Skill-matched course and platform suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedGuidance {
    pub recommended_courses: Vec<GuidanceCourse>,
    pub job_platforms: Vec<JobPlatform>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceCourse {
    pub title: String,
    pub platform: String,
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPlatform {
    pub name: String,
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceResponse {
    #[serde(flatten)]
    pub guidance: PersonalizedGuidance,
    pub source: ResultSource,
}
