//! HTTP adapters - routes and cross-cutting middleware.

pub mod analysis;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use analysis::{analysis_router, AnalysisAppState};

/// Builds the application router with tracing, timeout and CORS layers.
pub fn app_router(state: AnalysisAppState, server: &ServerConfig) -> Router {
    let mut app = analysis_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    if !origins.is_empty() {
        app = app.layer(CorsLayer::new().allow_origin(origins));
    }

    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::store::InMemorySubmissionStore;

    fn state() -> AnalysisAppState {
        AnalysisAppState::new(Arc::new(InMemorySubmissionStore::new()))
    }

    #[tokio::test]
    async fn app_router_serves_history() {
        let app = app_router(state(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/history").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cors_origin_is_echoed_when_allowed() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let app = app_router(state(), &server);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("Origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = app_router(state(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
