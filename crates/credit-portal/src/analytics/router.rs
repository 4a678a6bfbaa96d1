use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::payments::{payment_behaviour, RawPaymentRecord, TimeRange};
use super::portfolio::portfolio_charts;
use crate::workflows::beneficiaries::{BeneficiaryRepository, BeneficiaryService};

/// Chart endpoints. Live figures come from the beneficiary directory.
pub fn analytics_router<R>(beneficiaries: Arc<BeneficiaryService<R>>) -> Router
where
    R: BeneficiaryRepository + 'static,
{
    Router::new()
        .route("/api/v1/analytics/portfolio", get(portfolio_handler::<R>))
        .route("/api/v1/analytics/payments", post(payments_handler))
        .with_state(beneficiaries)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RangeParams {
    pub range: Option<String>,
}

pub(crate) async fn portfolio_handler<R>(
    State(beneficiaries): State<Arc<BeneficiaryService<R>>>,
) -> Response
where
    R: BeneficiaryRepository + 'static,
{
    match beneficiaries.rows() {
        Ok(rows) => (StatusCode::OK, Json(portfolio_charts(&rows))).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn payments_handler(
    Query(params): Query<RangeParams>,
    Json(records): Json<Vec<RawPaymentRecord>>,
) -> Response {
    let range = match params.range.as_deref() {
        None | Some("") => TimeRange::default(),
        Some(raw) => match raw.parse::<TimeRange>() {
            Ok(range) => range,
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
            }
        },
    };

    (StatusCode::OK, Json(payment_behaviour(&records, range))).into_response()
}
