use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;

use super::catalog::step_outline;
use super::domain::{ApplicationId, PersonalInfoUpdate};
use super::repository::WizardRepository;
use super::service::{BorrowerPortalService, BorrowerServiceError};
use super::upload::FileCandidate;
use super::wizard::WizardError;

/// Router exposing the borrower application wizard.
pub fn borrower_router<R>(service: Arc<BorrowerPortalService<R>>) -> Router
where
    R: WizardRepository + 'static,
{
    Router::new()
        .route("/api/v1/borrower/steps", get(steps_handler))
        .route(
            "/api/v1/borrower/applications",
            post(start_handler::<R>),
        )
        .route(
            "/api/v1/borrower/applications/:application_id",
            get(get_handler::<R>).delete(discard_handler::<R>),
        )
        .route(
            "/api/v1/borrower/applications/:application_id/personal-info",
            put(personal_info_handler::<R>),
        )
        .route(
            "/api/v1/borrower/applications/:application_id/documents/:document_id",
            put(upload_handler::<R>).delete(remove_document_handler::<R>),
        )
        .route(
            "/api/v1/borrower/applications/:application_id/next",
            post(next_handler::<R>),
        )
        .route(
            "/api/v1/borrower/applications/:application_id/previous",
            post(previous_handler::<R>),
        )
        .route(
            "/api/v1/borrower/applications/:application_id/submit",
            post(submit_handler::<R>),
        )
        .with_state(service)
}

async fn steps_handler() -> Response {
    (StatusCode::OK, Json(step_outline())).into_response()
}

pub(crate) async fn start_handler<R>(State(service): State<Arc<BorrowerPortalService<R>>>) -> Response
where
    R: WizardRepository + 'static,
{
    match service.start() {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(&service, None, error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<BorrowerPortalService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: WizardRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(&service, Some(&id), error),
    }
}

pub(crate) async fn discard_handler<R>(
    State(service): State<Arc<BorrowerPortalService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: WizardRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.discard(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(&service, Some(&id), error),
    }
}

pub(crate) async fn personal_info_handler<R>(
    State(service): State<Arc<BorrowerPortalService<R>>>,
    Path(application_id): Path<String>,
    Json(update): Json<PersonalInfoUpdate>,
) -> Response
where
    R: WizardRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.update_personal_info(&id, update) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(&service, Some(&id), error),
    }
}

pub(crate) async fn upload_handler<R>(
    State(service): State<Arc<BorrowerPortalService<R>>>,
    Path((application_id, document_id)): Path<(String, String)>,
    Json(candidate): Json<FileCandidate>,
) -> Response
where
    R: WizardRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.upload_document(&id, &document_id, candidate).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(&service, Some(&id), error),
    }
}

pub(crate) async fn remove_document_handler<R>(
    State(service): State<Arc<BorrowerPortalService<R>>>,
    Path((application_id, document_id)): Path<(String, String)>,
) -> Response
where
    R: WizardRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.remove_document(&id, &document_id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(&service, Some(&id), error),
    }
}

pub(crate) async fn next_handler<R>(
    State(service): State<Arc<BorrowerPortalService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: WizardRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.next(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(&service, Some(&id), error),
    }
}

pub(crate) async fn previous_handler<R>(
    State(service): State<Arc<BorrowerPortalService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: WizardRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.previous(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(&service, Some(&id), error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<BorrowerPortalService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: WizardRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.submit(&id).await {
        Ok(view) => (StatusCode::ACCEPTED, Json(view)).into_response(),
        Err(error) => error_response(&service, Some(&id), error),
    }
}

fn error_response<R>(
    service: &BorrowerPortalService<R>,
    id: Option<&ApplicationId>,
    error: BorrowerServiceError,
) -> Response
where
    R: WizardRepository + 'static,
{
    match error {
        BorrowerServiceError::Wizard(WizardError::Incomplete { .. }) => {
            // the stored view carries the field errors the form renders inline
            let application = id.and_then(|id| service.get(id).ok());
            let payload = json!({
                "error": error.to_string(),
                "application": application,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        BorrowerServiceError::Wizard(_) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        BorrowerServiceError::Upload(_) | BorrowerServiceError::UnknownDocument(_) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        BorrowerServiceError::NotFound(ref missing) => {
            let payload = json!({
                "error": "Application not found",
                "applicationId": missing.0,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        BorrowerServiceError::Repository(_) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
