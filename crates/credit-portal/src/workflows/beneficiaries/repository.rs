use serde::{Deserialize, Serialize};

use super::domain::{
    Beneficiary, BeneficiaryId, BeneficiaryProfile, ReviewNote, RiskAssessment,
    SubmittedDocument,
};
use super::review::{RejectionReason, ReviewDecision};
use crate::analytics::{
    breakdown, payments, MonthlyPayment, PaymentStats, ScoreBreakdown, ScoreFactors, TimeRange,
};
use crate::workflows::shared::RepositoryError;

/// Everything the portal holds for one beneficiary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryRecord {
    pub summary: Beneficiary,
    pub profile: BeneficiaryProfile,
    pub documents: Vec<SubmittedDocument>,
    pub score: ScoreFactors,
    pub risk: RiskAssessment,
    pub payments: Vec<MonthlyPayment>,
    pub notes: Vec<ReviewNote>,
    pub decision: Option<ReviewDecision>,
}

impl BeneficiaryRecord {
    pub fn detail_view(&self) -> BeneficiaryDetailView {
        let can_review = self.ensure_pending().is_ok();
        let window = TimeRange::default().window(&self.payments);
        BeneficiaryDetailView {
            beneficiary: self.summary.clone(),
            profile: self.profile.clone(),
            documents: self
                .documents
                .iter()
                .map(|document| DocumentView {
                    label: document.document_type.label(),
                    document: document.clone(),
                })
                .collect(),
            score: breakdown(&self.score),
            risk: RiskView {
                mitigations: self.risk.mitigations(),
                assessment: self.risk.clone(),
            },
            payments: self.payments.clone(),
            payment_stats: payments::stats(window),
            notes: self.notes.clone(),
            decision: self.decision.clone(),
            can_review,
            rejection_reasons: if can_review {
                RejectionReason::ordered()
                    .into_iter()
                    .map(|reason| ReasonOption {
                        value: reason,
                        label: reason.label(),
                    })
                    .collect()
            } else {
                Vec::new()
            },
        }
    }
}

/// Storage abstraction for the admin beneficiary directory.
pub trait BeneficiaryRepository: Send + Sync {
    fn list(&self) -> Result<Vec<BeneficiaryRecord>, RepositoryError>;
    fn fetch(&self, id: BeneficiaryId) -> Result<Option<BeneficiaryRecord>, RepositoryError>;
    fn update(&self, record: BeneficiaryRecord) -> Result<(), RepositoryError>;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    #[serde(flatten)]
    pub document: SubmittedDocument,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskView {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub mitigations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReasonOption {
    pub value: RejectionReason,
    pub label: &'static str,
}

/// Payload behind the beneficiary detail page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryDetailView {
    pub beneficiary: Beneficiary,
    pub profile: BeneficiaryProfile,
    pub documents: Vec<DocumentView>,
    pub score: ScoreBreakdown,
    pub risk: RiskView,
    pub payments: Vec<MonthlyPayment>,
    pub payment_stats: PaymentStats,
    pub notes: Vec<ReviewNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<ReviewDecision>,
    pub can_review: bool,
    pub rejection_reasons: Vec<ReasonOption>,
}
