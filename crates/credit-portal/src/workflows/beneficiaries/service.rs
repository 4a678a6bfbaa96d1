use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{Beneficiary, BeneficiaryId, ReviewNote};
use super::export::{self, ExportError};
use super::metrics::DashboardMetrics;
use super::query::BeneficiaryQuery;
use super::repository::{BeneficiaryDetailView, BeneficiaryRecord, BeneficiaryRepository};
use super::review::{ApprovalRequest, RejectionRequest, ReviewDecision, ReviewError};
use crate::config::SimulationConfig;
use crate::workflows::shared::RepositoryError;

/// Service behind the admin dashboard and the beneficiary detail page.
pub struct BeneficiaryService<R> {
    repository: Arc<R>,
    simulation: SimulationConfig,
    write_lock: Mutex<()>,
}

/// Answer for actions the portal accepts but does not carry out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StubAcknowledgement {
    pub action: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<BeneficiaryId>,
}

impl StubAcknowledgement {
    fn new(action: &'static str, beneficiary_id: Option<BeneficiaryId>) -> Self {
        Self {
            action,
            status: "not_implemented",
            beneficiary_id,
        }
    }
}

impl<R> BeneficiaryService<R>
where
    R: BeneficiaryRepository + 'static,
{
    pub fn new(repository: Arc<R>, simulation: SimulationConfig) -> Self {
        Self {
            repository,
            simulation,
            write_lock: Mutex::new(()),
        }
    }

    /// All rows in storage order.
    pub fn rows(&self) -> Result<Vec<Beneficiary>, BeneficiaryServiceError> {
        Ok(self
            .repository
            .list()?
            .into_iter()
            .map(|record| record.summary)
            .collect())
    }

    pub fn list(&self, query: &BeneficiaryQuery) -> Result<Vec<Beneficiary>, BeneficiaryServiceError> {
        Ok(query.apply(&self.rows()?))
    }

    /// Metrics always cover the full row set, not the filtered view.
    pub fn metrics(&self) -> Result<DashboardMetrics, BeneficiaryServiceError> {
        Ok(DashboardMetrics::from_rows(&self.rows()?))
    }

    pub fn export_csv(&self, query: &BeneficiaryQuery) -> Result<String, BeneficiaryServiceError> {
        let rows = self.list(query)?;
        let csv = export::csv_string(&rows)?;
        info!(rows = rows.len(), "beneficiary csv exported");
        Ok(csv)
    }

    pub fn export_pdf(&self) -> Result<Vec<u8>, BeneficiaryServiceError> {
        warn!("pdf export requested but not implemented");
        Err(ExportError::Unsupported("pdf").into())
    }

    pub fn detail(&self, id: BeneficiaryId) -> Result<BeneficiaryDetailView, BeneficiaryServiceError> {
        Ok(self.load(id)?.detail_view())
    }

    pub async fn approve(
        &self,
        id: BeneficiaryId,
        request: ApprovalRequest,
    ) -> Result<BeneficiaryDetailView, BeneficiaryServiceError> {
        self.load(id)?.ensure_pending()?;
        self.decision_delay().await;

        let _guard = self.lock();
        let mut record = self.load(id)?;
        let decision = record.approve(request, Utc::now())?;
        self.repository.update(record.clone())?;
        log_decision(id, &decision);
        Ok(record.detail_view())
    }

    pub async fn reject(
        &self,
        id: BeneficiaryId,
        request: RejectionRequest,
    ) -> Result<BeneficiaryDetailView, BeneficiaryServiceError> {
        self.load(id)?.ensure_pending()?;
        self.decision_delay().await;

        let _guard = self.lock();
        let mut record = self.load(id)?;
        let decision = record.reject(request, Utc::now())?;
        self.repository.update(record.clone())?;
        log_decision(id, &decision);
        Ok(record.detail_view())
    }

    pub fn add_note(&self, id: BeneficiaryId, text: &str) -> Result<ReviewNote, BeneficiaryServiceError> {
        let _guard = self.lock();
        let mut record = self.load(id)?;
        let note = record.add_note(text, Utc::now())?.clone();
        self.repository.update(record)?;
        info!(beneficiary_id = %id, "review note added");
        Ok(note)
    }

    pub fn add_beneficiary(&self) -> StubAcknowledgement {
        info!("add beneficiary requested; not implemented");
        StubAcknowledgement::new("add_beneficiary", None)
    }

    pub fn notify(&self, id: BeneficiaryId) -> Result<StubAcknowledgement, BeneficiaryServiceError> {
        self.load(id)?;
        info!(beneficiary_id = %id, "notification requested; not implemented");
        Ok(StubAcknowledgement::new("send_notification", Some(id)))
    }

    async fn decision_delay(&self) {
        if !self.simulation.decision_delay.is_zero() {
            tokio::time::sleep(self.simulation.decision_delay).await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self, id: BeneficiaryId) -> Result<BeneficiaryRecord, BeneficiaryServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(BeneficiaryServiceError::NotFound(id))
    }
}

fn log_decision(id: BeneficiaryId, decision: &ReviewDecision) {
    match decision {
        ReviewDecision::Approved { amount, .. } => {
            info!(beneficiary_id = %id, amount, "beneficiary approved");
        }
        ReviewDecision::Rejected { reason, .. } => {
            info!(beneficiary_id = %id, reason = reason.label(), "beneficiary rejected");
        }
    }
}

/// Error raised by the beneficiary service.
#[derive(Debug, thiserror::Error)]
pub enum BeneficiaryServiceError {
    #[error("Beneficiary not found")]
    NotFound(BeneficiaryId),
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
