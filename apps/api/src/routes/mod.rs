pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::guidance::handlers as guidance_handlers;
use crate::market::handlers as market_handlers;
use crate::recommendation::handlers as recommendation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth & profile
        .route("/api/v1/auth/register", post(auth_handlers::handle_register))
        .route("/api/v1/auth/login", post(auth_handlers::handle_login))
        .route("/api/v1/auth/logout", post(auth_handlers::handle_logout))
        .route("/api/v1/auth/me", get(auth_handlers::handle_me))
        .route("/api/v1/profile", put(auth_handlers::handle_update_profile))
        // Market
        .route(
            "/api/v1/market/overview",
            get(market_handlers::handle_market_overview),
        )
        .route(
            "/api/v1/market/analyze",
            post(market_handlers::handle_market_analyze),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(recommendation_handlers::handle_recommendation),
        )
        .route(
            "/api/v1/recommendations/stream",
            post(recommendation_handlers::handle_recommendation_stream),
        )
        // Guidance
        .route("/api/v1/guidance", post(guidance_handlers::handle_guidance))
        .with_state(state)
}
