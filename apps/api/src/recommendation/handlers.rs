use axum::{extract::State, http::HeaderMap, Json};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::handlers::authenticate;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::models::recommendation::{DetailedRecommendation, ValidationResult};
use crate::models::user::UserRow;
use crate::models::ResultSource;
use crate::recommendation::profile::{profile_summary, time_to_graduate};
use crate::recommendation::prompts::{
    RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM, VALIDATION_PROMPT_TEMPLATE,
};
use crate::recommendation::stream::{recommendation_sse, RecommendationSse};
use crate::samples;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// College tier selected by the user (e.g. "Tier 1", "Tier 2").
    pub college_tier: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    #[serde(flatten)]
    pub recommendation: DetailedRecommendation,
    pub source: ResultSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// POST /api/v1/recommendations/stream
///
/// Streams the recommendation as SSE: `status` events for milestone progress,
/// `snapshot` events for each successful intermediate parse, one `complete`
/// event, then `[DONE]`.
pub async fn handle_recommendation_stream(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RecommendationRequest>,
) -> Result<RecommendationSse, AppError> {
    let user = authenticate(&state, &headers).await?;
    validate_profile(&state, &user).await?;

    let prompt = build_recommendation_prompt(&user, &req.college_tier);
    let fragments = state.llm.stream(&prompt, RECOMMENDATION_SYSTEM);
    Ok(recommendation_sse(fragments))
}

/// POST /api/v1/recommendations
///
/// Non-streaming variant: one LLM call, sample fallback on failure.
pub async fn handle_recommendation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let user = authenticate(&state, &headers).await?;
    validate_profile(&state, &user).await?;

    let prompt = build_recommendation_prompt(&user, &req.college_tier);
    let response = match state
        .llm
        .call_json::<DetailedRecommendation>(&prompt, RECOMMENDATION_SYSTEM)
        .await
    {
        Ok(recommendation) => RecommendationResponse {
            recommendation,
            source: ResultSource::Live,
            note: None,
        },
        Err(e) => {
            warn!("recommendation generation failed, serving sample result: {e}");
            RecommendationResponse {
                recommendation: samples::sample_detailed_recommendation(),
                source: ResultSource::Sample,
                note: Some(samples::FALLBACK_NOTE.to_string()),
            }
        }
    };
    Ok(Json(response))
}

/// LLM placeholder-detection gate on name/college. Fail-open: a validator
/// outage never blocks the user.
async fn validate_profile(state: &AppState, user: &UserRow) -> Result<(), AppError> {
    let prompt = VALIDATION_PROMPT_TEMPLATE
        .replace("{name}", &user.name)
        .replace("{college}", &user.college);

    match state
        .llm
        .call_json::<ValidationResult>(&prompt, JSON_ONLY_SYSTEM)
        .await
    {
        Ok(verdict) if !verdict.is_valid => Err(AppError::UnprocessableEntity(verdict.feedback)),
        Ok(_) => Ok(()),
        Err(e) => {
            warn!("profile validator unavailable, letting the request through: {e}");
            Ok(())
        }
    }
}

fn build_recommendation_prompt(user: &UserRow, college_tier: &str) -> String {
    let now_year = Utc::now().year();
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{user_profile}", &profile_summary(user))
        .replace("{college_tier}", college_tier)
        .replace(
            "{time_to_graduate}",
            &time_to_graduate(&user.grad_year, now_year),
        )
        .replace("{cgpa}", or_not_provided(&user.cgpa))
        .replace("{linkedin_url}", or_not_provided(&user.linkedin_url))
        .replace("{github_url}", or_not_provided(&user.github_url))
}

fn or_not_provided(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Not provided"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitutes_all_placeholders() {
        let mut user = UserRow::new(
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            "digest".to_string(),
        );
        user.languages = "Rust".to_string();
        user.cgpa = "8.4".to_string();
        user.linkedin_url = "https://linkedin.com/in/asha".to_string();

        let prompt = build_recommendation_prompt(&user, "Tier 2");
        for placeholder in [
            "{user_profile}",
            "{college_tier}",
            "{time_to_graduate}",
            "{cgpa}",
            "{linkedin_url}",
            "{github_url}",
        ] {
            assert!(!prompt.contains(placeholder), "unsubstituted {placeholder}");
        }
        assert!(prompt.contains("- Languages: Rust"));
        assert!(prompt.contains("College Tier: Tier 2"));
        assert!(prompt.contains("Current CGPA: 8.4"));
        assert!(prompt.contains("GitHub Profile: Not provided"));
    }
}
