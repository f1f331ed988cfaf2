use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::market::analyzer::analyze_job_market;
use crate::market::prompts::MARKET_OVERVIEW_PROMPT_TEMPLATE;
use crate::models::market::{AnalyzeResponse, MarketOverview, MarketOverviewResponse};
use crate::models::ResultSource;
use crate::samples;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_title: String,
}

/// GET /api/v1/market/overview
///
/// LLM-generated snapshot of trending roles and skills. Never fails: any LLM
/// error is a silent fallback to the sample overview.
pub async fn handle_market_overview(State(state): State<AppState>) -> Json<MarketOverviewResponse> {
    let month_year = Utc::now().format("%B %Y").to_string();
    let prompt = MARKET_OVERVIEW_PROMPT_TEMPLATE.replace("{month_year}", &month_year);

    let (overview, source) = match state
        .llm
        .call_json::<MarketOverview>(&prompt, JSON_ONLY_SYSTEM)
        .await
    {
        Ok(overview) => (overview, ResultSource::Live),
        Err(e) => {
            warn!("market overview generation failed, serving sample data: {e}");
            (samples::sample_market_overview(), ResultSource::Sample)
        }
    };

    Json(MarketOverviewResponse {
        overview,
        last_updated: Utc::now(),
        source,
    })
}

/// POST /api/v1/market/analyze
///
/// Forwards the job title to the analysis backend; upstream failures fall
/// back to the sample analysis rather than erroring.
pub async fn handle_market_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let job_title = req.job_title.trim();
    if job_title.is_empty() {
        return Err(AppError::Validation("Job title must not be empty".to_string()));
    }

    let (result, source) = match analyze_job_market(
        &state.http,
        &state.config.market_analyzer_url,
        job_title,
    )
    .await
    {
        Ok(result) => (result, ResultSource::Live),
        Err(e) => {
            warn!("market analysis failed, serving sample result: {e}");
            (samples::sample_analysis_result(), ResultSource::Sample)
        }
    };

    Ok(Json(AnalyzeResponse { result, source }))
}
