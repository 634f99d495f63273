use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use mockito::Matcher;
use nba_today::config::Config;
use nba_today::dto::TodayResponse;
use nba_today::server::{router, AppState};
use nba_today::TodayFeed;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const UNREACHABLE: &str = "http://127.0.0.1:1";

fn unconfigured() -> Config {
    let mut config = Config::default();
    config.odds.base_url = UNREACHABLE.to_string();
    config.sportradar.base_url = UNREACHABLE.to_string();
    config
}

struct FailingFeed;

#[async_trait::async_trait]
impl TodayFeed for FailingFeed {
    async fn build_today(&self) -> anyhow::Result<TodayResponse> {
        Err(anyhow::anyhow!("feed unavailable"))
    }
}

async fn send(config: Config, method: Method, uri: &str) -> Response {
    send_to(AppState::new(config), method, uri).await
}

async fn send_to(state: AppState, method: Method, uri: &str) -> Response {
    router(state)
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::ORIGIN, "https://app.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_today_without_keys() {
    let response = send(unconfigured(), Method::GET, "/api/today").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body["gamesCount"], json!(0));
    assert_eq!(body["hasOdds"], json!(false));
    assert_eq!(body["games"], json!([]));
    assert_eq!(body["injuries"], json!({}));
    assert_eq!(body["sources"], json!({ "odds": "none", "injuries": "none" }));
    assert_eq!(body["date"].as_str().unwrap().len(), 10);
}

#[tokio::test]
async fn test_today_with_failing_upstreams_is_still_ok() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let mut config = Config::default();
    config.odds.base_url = server.url();
    config.odds.api_key = Some("odds_key".to_string());
    config.sportradar.base_url = server.url();
    config.sportradar.api_key = Some("sr_key".to_string());

    let response = send(config, Method::GET, "/api/today").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["gamesCount"], json!(0));
    assert_eq!(body["injuries"], json!({}));
    assert_eq!(
        body["sources"],
        json!({ "odds": "the-odds-api", "injuries": "sportradar" })
    );
}

#[tokio::test]
async fn test_today_feed_error_is_500() {
    let state = AppState::with_feed(unconfigured(), Arc::new(FailingFeed));
    let response = send_to(state, Method::GET, "/api/today").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "feed unavailable" }));
    assert!(body.get("games").is_none());
    assert!(body.get("injuries").is_none());
}

#[tokio::test]
async fn test_get_responses_carry_cors_headers() {
    for uri in ["/api/today", "/api/health", "/api/test"] {
        let response = send(unconfigured(), Method::GET, uri).await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        assert!(methods.contains("GET"));
        assert!(methods.contains("OPTIONS"));
        assert!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap()
            .eq_ignore_ascii_case("content-type"));
    }
}

#[tokio::test]
async fn test_options_preflight() {
    for uri in ["/api/today", "/api/health", "/api/test"] {
        let response = send(unconfigured(), Method::OPTIONS, uri).await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        assert!(methods.contains("GET"));
        assert!(methods.contains("OPTIONS"));
        assert!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap()
            .eq_ignore_ascii_case("content-type"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let mut config = unconfigured();
    config.odds.api_key = Some("odds_key".to_string());

    let response = send(config, Method::GET, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["hasOddsApiKey"], json!(true));
    assert_eq!(body["hasSportradarKey"], json!(false));
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_key_check_endpoint() {
    let mut config = unconfigured();
    config.sportradar.api_key = Some("sr_key".to_string());

    let response = send(config, Method::GET, "/api/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("API is working!"));
    assert_eq!(body["sportradarKey"], json!("configured"));
    assert_eq!(body["oddsApiKey"], json!("MISSING"));
}

#[tokio::test]
async fn test_unknown_route() {
    let response = send(unconfigured(), Method::GET, "/api/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
