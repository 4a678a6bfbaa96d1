use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::beneficiaries::{BeneficiaryServiceError, ExportError, QueryError};
use crate::workflows::borrower::BorrowerServiceError;

/// Process-level failure surfaced by the binary and the CLI.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Export(ExportError),
    Query(QueryError),
    Directory(BeneficiaryServiceError),
    Borrower(BorrowerServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {err}"),
            AppError::Telemetry(err) => write!(f, "telemetry error: {err}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
            AppError::Server(err) => write!(f, "server error: {err}"),
            AppError::Export(err) => write!(f, "export error: {err}"),
            AppError::Query(err) => write!(f, "invalid query: {err}"),
            AppError::Directory(err) => write!(f, "beneficiary directory error: {err}"),
            AppError::Borrower(err) => write!(f, "borrower application error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::Query(err) => Some(err),
            AppError::Directory(err) => Some(err),
            AppError::Borrower(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Query(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Export(ExportError::Unsupported(_)) => StatusCode::NOT_IMPLEMENTED,
            AppError::Directory(BeneficiaryServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Export(_)
            | AppError::Directory(_)
            | AppError::Borrower(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<QueryError> for AppError {
    fn from(value: QueryError) -> Self {
        Self::Query(value)
    }
}

impl From<BeneficiaryServiceError> for AppError {
    fn from(value: BeneficiaryServiceError) -> Self {
        Self::Directory(value)
    }
}

impl From<BorrowerServiceError> for AppError {
    fn from(value: BorrowerServiceError) -> Self {
        Self::Borrower(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::beneficiaries::BeneficiaryId;

    #[test]
    fn status_follows_variant() {
        let unsupported = AppError::from(ExportError::Unsupported("pdf")).into_response();
        assert_eq!(unsupported.status(), StatusCode::NOT_IMPLEMENTED);

        let missing =
            AppError::from(BeneficiaryServiceError::NotFound(BeneficiaryId(42))).into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let io = AppError::from(std::io::Error::other("disk full")).into_response();
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_prefixes_the_source() {
        let error = AppError::from(std::io::Error::other("disk full"));
        assert_eq!(error.to_string(), "io error: disk full");
        assert!(std::error::Error::source(&error).is_some());
    }
}
