use crate::aggregator::{Aggregator, TodayFeed};
use crate::config::Config;
use crate::diagnostics::{HealthResponse, KeyCheckResponse};
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<dyn TodayFeed>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let feed = Arc::new(Aggregator::from_config(&config));
        Self::with_feed(config, feed)
    }

    pub fn with_feed(config: Config, feed: Arc<dyn TodayFeed>) -> Self {
        Self {
            feed,
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    const ALLOWED_METHODS: &str = "GET, OPTIONS";

    // OPTIONS on any route is answered here with an empty 200
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/today", get(get_today))
        .route("/api/health", get(get_health))
        .route("/api/test", get(get_key_check))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(cors)
}

/// GET /api/today
async fn get_today(State(state): State<AppState>) -> Response {
    match state.feed.build_today().await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            error!("Failed to build today's feed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/health
async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(&state.config, Utc::now()))
}

/// GET /api/test
async fn get_key_check(State(state): State<AppState>) -> Json<KeyCheckResponse> {
    Json(KeyCheckResponse::new(&state.config, Utc::now()))
}

/// Bind `bind` and serve until Ctrl-C.
pub async fn serve(config: Config, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
