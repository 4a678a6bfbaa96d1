use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::landing::landing_content;
use super::navigation::resolve;

/// Shell endpoints: path resolution and landing-page copy.
pub fn site_router() -> Router {
    Router::new()
        .route("/api/v1/site/resolve", get(resolve_handler))
        .route("/api/v1/site/landing", get(landing_handler))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResolveParams {
    pub path: Option<String>,
}

pub(crate) async fn resolve_handler(Query(params): Query<ResolveParams>) -> Response {
    let path = params.path.unwrap_or_else(|| "/".to_string());
    (StatusCode::OK, Json(resolve(&path))).into_response()
}

pub(crate) async fn landing_handler() -> Response {
    (StatusCode::OK, Json(landing_content())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = site_router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn resolve_reports_detail_page() {
        let (status, body) = get_json("/api/v1/site/resolve?path=/beneficiary-detail-view/7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], "beneficiary_detail");
        assert_eq!(body["id"], "7");
        assert_eq!(body["breadcrumbs"][1]["label"], "Details");
    }

    #[tokio::test]
    async fn resolve_defaults_to_root() {
        let (_, body) = get_json("/api/v1/site/resolve").await;
        assert_eq!(body["page"], "landing");
        assert_eq!(body["path"], "/");
    }

    #[tokio::test]
    async fn landing_lists_features_and_testimonials() {
        let (status, body) = get_json("/api/v1/site/landing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["features"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["testimonials"][1]["loanAmount"], "₹75,000");
        assert_eq!(body["hero"]["actions"][0]["path"], "/borrower-portal");
    }
}
