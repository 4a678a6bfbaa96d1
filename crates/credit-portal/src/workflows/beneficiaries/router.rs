use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::BeneficiaryId;
use super::export::ExportError;
use super::query::{BeneficiaryQuery, QueryParams};
use super::repository::BeneficiaryRepository;
use super::review::{ApprovalRequest, RejectionRequest, ReviewError};
use super::service::{BeneficiaryService, BeneficiaryServiceError};
use crate::workflows::shared::RepositoryError;

/// Router for the admin dashboard table and beneficiary detail actions.
pub fn beneficiary_router<R>(service: Arc<BeneficiaryService<R>>) -> Router
where
    R: BeneficiaryRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/beneficiaries",
            get(list_handler::<R>).post(add_handler::<R>),
        )
        .route("/api/v1/beneficiaries/metrics", get(metrics_handler::<R>))
        .route("/api/v1/beneficiaries/export.csv", get(export_csv_handler::<R>))
        .route("/api/v1/beneficiaries/export.pdf", get(export_pdf_handler::<R>))
        .route("/api/v1/beneficiaries/:beneficiary_id", get(detail_handler::<R>))
        .route(
            "/api/v1/beneficiaries/:beneficiary_id/approve",
            post(approve_handler::<R>),
        )
        .route(
            "/api/v1/beneficiaries/:beneficiary_id/reject",
            post(reject_handler::<R>),
        )
        .route(
            "/api/v1/beneficiaries/:beneficiary_id/notes",
            post(note_handler::<R>),
        )
        .route(
            "/api/v1/beneficiaries/:beneficiary_id/notify",
            post(notify_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoteRequest {
    pub text: String,
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<BeneficiaryService<R>>>,
    Query(params): Query<QueryParams>,
) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    let query = match BeneficiaryQuery::try_from(params) {
        Ok(query) => query,
        Err(error) => return unprocessable(error.to_string()),
    };

    match service.list(&query) {
        Ok(rows) => {
            let payload = json!({
                "total": rows.len(),
                "sort": query.sort,
                "beneficiaries": rows,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn metrics_handler<R>(State(service): State<Arc<BeneficiaryService<R>>>) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    match service.metrics() {
        Ok(metrics) => (StatusCode::OK, Json(metrics)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_csv_handler<R>(
    State(service): State<Arc<BeneficiaryService<R>>>,
    Query(params): Query<QueryParams>,
) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    let query = match BeneficiaryQuery::try_from(params) {
        Ok(query) => query,
        Err(error) => return unprocessable(error.to_string()),
    };

    match service.export_csv(&query) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"beneficiaries.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_pdf_handler<R>(State(service): State<Arc<BeneficiaryService<R>>>) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    match service.export_pdf() {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/pdf")],
            bytes,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_handler<R>(State(service): State<Arc<BeneficiaryService<R>>>) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    (StatusCode::ACCEPTED, Json(service.add_beneficiary())).into_response()
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<BeneficiaryService<R>>>,
    Path(raw_id): Path<String>,
) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    let Some(id) = BeneficiaryId::parse(&raw_id) else {
        return not_found();
    };
    match service.detail(id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn approve_handler<R>(
    State(service): State<Arc<BeneficiaryService<R>>>,
    Path(raw_id): Path<String>,
    request: Option<Json<ApprovalRequest>>,
) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    let Some(id) = BeneficiaryId::parse(&raw_id) else {
        return not_found();
    };
    let request = request.map(|Json(request)| request).unwrap_or_default();
    match service.approve(id, request).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reject_handler<R>(
    State(service): State<Arc<BeneficiaryService<R>>>,
    Path(raw_id): Path<String>,
    Json(request): Json<RejectionRequest>,
) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    let Some(id) = BeneficiaryId::parse(&raw_id) else {
        return not_found();
    };
    match service.reject(id, request).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn note_handler<R>(
    State(service): State<Arc<BeneficiaryService<R>>>,
    Path(raw_id): Path<String>,
    Json(request): Json<NoteRequest>,
) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    let Some(id) = BeneficiaryId::parse(&raw_id) else {
        return not_found();
    };
    match service.add_note(id, &request.text) {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn notify_handler<R>(
    State(service): State<Arc<BeneficiaryService<R>>>,
    Path(raw_id): Path<String>,
) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    let Some(id) = BeneficiaryId::parse(&raw_id) else {
        return not_found();
    };
    match service.notify(id) {
        Ok(ack) => (StatusCode::ACCEPTED, Json(ack)).into_response(),
        Err(error) => error_response(error),
    }
}

fn not_found() -> Response {
    let payload = json!({ "error": "Beneficiary not found" });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn unprocessable(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

fn error_response(error: BeneficiaryServiceError) -> Response {
    match error {
        BeneficiaryServiceError::NotFound(_) => not_found(),
        BeneficiaryServiceError::Review(ReviewError::NotPending { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        BeneficiaryServiceError::Review(ReviewError::EmptyNote) => unprocessable(error.to_string()),
        BeneficiaryServiceError::Export(ExportError::Unsupported(format)) => {
            let payload = json!({
                "error": error.to_string(),
                "format": format,
                "status": "not_implemented",
            });
            (StatusCode::NOT_IMPLEMENTED, Json(payload)).into_response()
        }
        BeneficiaryServiceError::Repository(RepositoryError::NotFound) => not_found(),
        BeneficiaryServiceError::Export(_) | BeneficiaryServiceError::Repository(_) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
