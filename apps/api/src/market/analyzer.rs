//! Client for the external job-market analysis backend — a separate
//! non-streaming HTTP JSON service that scrapes and aggregates postings for
//! one job title.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::market::AnalysisResult;

#[derive(Debug, Serialize)]
struct AnalyzeBackendRequest<'a> {
    job_title: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeBackendError {
    error: String,
}

/// POST {base_url}/analyze with `{"job_title": …}`.
pub async fn analyze_job_market(
    client: &reqwest::Client,
    base_url: &str,
    job_title: &str,
) -> Result<AnalysisResult, AppError> {
    let url = format!("{}/analyze", base_url.trim_end_matches('/'));

    let response = client
        .post(&url)
        .json(&AnalyzeBackendRequest { job_title })
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("analysis backend unreachable: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        // The backend reports failures as {"error": "..."}
        let message = serde_json::from_str::<AnalyzeBackendError>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("analysis backend returned {status}"));
        return Err(AppError::Upstream(message));
    }

    response
        .json::<AnalysisResult>()
        .await
        .map_err(|e| AppError::Upstream(format!("undecodable analysis response: {e}")))
}
