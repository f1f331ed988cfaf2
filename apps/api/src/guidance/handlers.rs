use axum::{extract::State, http::HeaderMap, Json};
use tracing::warn;

use crate::auth::handlers::authenticate;
use crate::errors::AppError;
use crate::guidance::prompts::GUIDANCE_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::models::guidance::{GuidanceResponse, PersonalizedGuidance};
use crate::models::ResultSource;
use crate::recommendation::profile::technical_skills;
use crate::samples;
use crate::state::AppState;

/// POST /api/v1/guidance
///
/// Course and platform suggestions derived from the user's technical skills.
/// Requires at least one filled technical skill category; LLM failures fall
/// back to the sample guidance.
pub async fn handle_guidance(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<GuidanceResponse>, AppError> {
    let user = authenticate(&state, &headers).await?;

    let skills = technical_skills(&user);
    if skills.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Please enter some technical skills to get personalized guidance.".to_string(),
        ));
    }

    let prompt = GUIDANCE_PROMPT_TEMPLATE.replace("{skills}", &skills);
    let (guidance, source) = match state
        .llm
        .call_json::<PersonalizedGuidance>(&prompt, JSON_ONLY_SYSTEM)
        .await
    {
        Ok(guidance) => (guidance, ResultSource::Live),
        Err(e) => {
            warn!("guidance generation failed, serving sample result: {e}");
            (samples::sample_personalized_guidance(), ResultSource::Sample)
        }
    };

    Ok(Json(GuidanceResponse { guidance, source }))
}
