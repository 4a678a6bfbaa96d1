use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use credit_portal::analytics::analytics_router;
use credit_portal::auth::auth_router;
use credit_portal::site::{site_router, Page};
use credit_portal::workflows::beneficiaries::beneficiary_router;
use credit_portal::workflows::borrower::borrower_router;
use serde_json::json;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::infra::{AppState, PortalServices};

/// Every portal router plus the operational endpoints.
pub(crate) fn with_portal_routes(services: PortalServices) -> Router {
    Router::new()
        .merge(borrower_router(services.borrower))
        .merge(beneficiary_router(services.beneficiaries.clone()))
        .merge(analytics_router(services.beneficiaries))
        .merge(auth_router(services.auth))
        .merge(site_router())
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .fallback(not_found)
}

/// Routes with state and the panic boundary applied.
pub(crate) fn app(services: PortalServices, state: AppState) -> Router {
    with_portal_routes(services)
        .layer(Extension(state))
        .layer(CatchPanicLayer::custom(panic_response))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "page": Page::NotFound.key() })),
    )
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    error!(%detail, "request handler panicked");

    let payload = json!({
        "error": "Something went wrong",
        "status": "internal_error",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use credit_portal::config::SimulationConfig;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    fn router(ready: bool) -> Router {
        app(PortalServices::in_memory(SimulationConfig::instant()), state(ready))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, body) = send(router(false), Request::get("/ready").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (status, _) = send(router(true), Request::get("/ready").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_path_is_json_not_found() {
        let (status, body) = send(
            router(true),
            Request::get("/definitely/not/here").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["page"], "not_found");
    }

    #[tokio::test]
    async fn merged_routers_are_reachable() {
        let router = router(true);

        let (status, body) = send(
            router.clone(),
            Request::get("/api/v1/beneficiaries/metrics").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalBeneficiaries"], 8);

        let (status, body) = send(
            router.clone(),
            Request::get("/api/v1/borrower/steps").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(5));

        let (status, body) = send(
            router.clone(),
            Request::get("/api/v1/analytics/portfolio").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["liveRiskDistribution"].as_array().map(Vec::len), Some(3));

        let (status, body) = send(
            router,
            Request::get("/api/v1/site/resolve?path=/admin-dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], "admin_dashboard");
    }

    #[tokio::test]
    async fn panicking_handler_becomes_json_500() {
        async fn boom() -> &'static str {
            panic!("boom")
        }

        let router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(panic_response));
        let (status, body) = send(router, Request::get("/boom").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "internal_error");
    }
}
