//! Application factory.
//!
//! # Responsibilities
//! - Create the Axum router for the service surface
//! - Wire up middleware (tracing, limits, request ID)
//! - Hand the finished application to the gateway adapter
//!
//! # Design Decisions
//! - Built exactly once per process, during startup
//! - Treated as immutable after construction
//! - The surface stays at liveness level; feature routes mount here later

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::context::AppContext;
use crate::http::request::MakeUuidRequestId;

/// Request-handling application object.
///
/// Wraps the router so callers hold a single opaque handle satisfying
/// the gateway's request/response convention.
pub struct Application {
    router: Router,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application").finish_non_exhaustive()
    }
}

impl Application {
    /// Construct the application from the given context.
    pub fn build(context: AppContext) -> Self {
        let request_timeout = Duration::from_secs(context.settings().timeouts.request_secs);
        let body_limit = context.settings().server.max_body_bytes;

        // Request IDs are set in the outermost layer so the trace span
        // and the propagated response header both see them.
        let router = Router::new()
            .route("/", get(index))
            .route("/health", get(health))
            .fallback(not_found)
            .with_state(context)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeUuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(RequestBodyLimitLayer::new(body_limit))
                    .layer(TimeoutLayer::new(request_timeout)),
            );

        Self { router }
    }

    /// Consume the application, yielding the router for the gateway to serve.
    pub fn into_router(self) -> Router {
        self.router
    }
}

#[derive(Serialize)]
struct ServiceIdentity {
    service: &'static str,
    version: &'static str,
}

/// Service identity, served at the root.
async fn index() -> Json<ServiceIdentity> {
    Json(ServiceIdentity {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthReport {
    status: &'static str,
    uptime_secs: u64,
}

/// Liveness probe for the hosting environment.
async fn health(State(context): State<AppContext>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        uptime_secs: context.uptime().as_secs(),
    })
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::http::request::X_REQUEST_ID;
    use crate::settings::Settings;

    fn test_application() -> Router {
        let context = AppContext::new(Arc::new(Settings::default()));
        Application::build(context).into_router()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_application();

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let report: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(report["status"], "ok");
    }

    #[tokio::test]
    async fn root_reports_service_identity() {
        let app = test_application();

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let identity: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(identity["service"], "webapp-backend");
    }

    #[tokio::test]
    async fn unknown_path_gets_json_404() {
        let app = test_application();

        let response = app
            .oneshot(Request::get("/no/such/route").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"], "not found");
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = test_application();

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key(X_REQUEST_ID));
    }

    #[tokio::test]
    async fn caller_supplied_request_id_is_propagated() {
        let app = test_application();

        let response = app
            .oneshot(
                Request::get("/health")
                    .header(X_REQUEST_ID, "req-12345")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[X_REQUEST_ID], "req-12345");
    }
}
