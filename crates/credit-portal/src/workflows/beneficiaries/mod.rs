//! Admin beneficiary directory: the filterable dashboard table, headline metrics,
//! CSV export and the review actions on the detail page.

pub mod domain;
pub mod export;
pub mod metrics;
pub mod query;
pub mod repository;
pub mod review;
pub mod router;
pub mod sample;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Beneficiary, BeneficiaryId, BeneficiaryProfile, BeneficiaryStatus, DocumentVerification,
    ReviewNote, RiskAssessment, RiskBand, SubmittedDocument, SubmittedDocumentType,
};
pub use export::{csv_string, write_csv, ExportError};
pub use metrics::DashboardMetrics;
pub use query::{BeneficiaryQuery, QueryError, QueryParams, SortConfig, SortDirection, SortKey};
pub use repository::{BeneficiaryDetailView, BeneficiaryRecord, BeneficiaryRepository};
pub use review::{ApprovalRequest, RejectionReason, RejectionRequest, ReviewDecision, ReviewError};
pub use router::beneficiary_router;
pub use sample::{sample_beneficiaries, sample_records};
pub use service::{BeneficiaryService, BeneficiaryServiceError, StubAcknowledgement};
