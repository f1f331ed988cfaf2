use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::repository::{SessionRepository, UserRepository};
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Outbound HTTP client for the market-analysis backend.
    pub http: reqwest::Client,
    /// User table behind a repository interface. Single process, single
    /// writer; read-modify-write with no concurrent-writer coordination.
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub config: Config,
}
