use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{BeneficiaryStatus, ReviewNote};
use super::repository::BeneficiaryRecord;

/// Reasons an officer can pick when rejecting an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    InsufficientIncomeVerification,
    HighRiskAssessment,
    IncompleteDocumentation,
    CreditHistoryConcerns,
    PolicyViolation,
    Other,
}

impl RejectionReason {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::InsufficientIncomeVerification,
            Self::HighRiskAssessment,
            Self::IncompleteDocumentation,
            Self::CreditHistoryConcerns,
            Self::PolicyViolation,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InsufficientIncomeVerification => "Insufficient income verification",
            Self::HighRiskAssessment => "High risk assessment",
            Self::IncompleteDocumentation => "Incomplete documentation",
            Self::CreditHistoryConcerns => "Credit history concerns",
            Self::PolicyViolation => "Policy violation",
            Self::Other => "Other (specify in notes)",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    /// Approved amount in rupees; defaults to the requested loan amount.
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionRequest {
    pub reason: RejectionReason,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", rename_all_fields = "camelCase", tag = "outcome")]
pub enum ReviewDecision {
    Approved {
        amount: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        decided_at: DateTime<Utc>,
    },
    Rejected {
        reason: RejectionReason,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        decided_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("beneficiary is already {}; only pending applications can be reviewed", .status.label())]
    NotPending { status: BeneficiaryStatus },
    #[error("note text must not be empty")]
    EmptyNote,
}

fn non_blank(notes: Option<String>) -> Option<String> {
    notes
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

impl BeneficiaryRecord {
    pub fn ensure_pending(&self) -> Result<(), ReviewError> {
        match self.summary.status {
            BeneficiaryStatus::Pending => Ok(()),
            status => Err(ReviewError::NotPending { status }),
        }
    }

    pub fn approve(
        &mut self,
        request: ApprovalRequest,
        now: DateTime<Utc>,
    ) -> Result<ReviewDecision, ReviewError> {
        self.ensure_pending()?;
        let decision = ReviewDecision::Approved {
            amount: request.amount.unwrap_or(self.profile.loan_amount),
            notes: non_blank(request.notes),
            decided_at: now,
        };
        self.record_decision(BeneficiaryStatus::Approved, decision.clone(), now);
        Ok(decision)
    }

    pub fn reject(
        &mut self,
        request: RejectionRequest,
        now: DateTime<Utc>,
    ) -> Result<ReviewDecision, ReviewError> {
        self.ensure_pending()?;
        let decision = ReviewDecision::Rejected {
            reason: request.reason,
            notes: non_blank(request.notes),
            decided_at: now,
        };
        self.record_decision(BeneficiaryStatus::Rejected, decision.clone(), now);
        Ok(decision)
    }

    pub fn add_note(&mut self, text: &str, now: DateTime<Utc>) -> Result<&ReviewNote, ReviewError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ReviewError::EmptyNote);
        }
        self.notes.push(ReviewNote {
            text: text.to_string(),
            added_at: now,
        });
        self.profile.last_updated = now.date_naive();
        self.notes.last().ok_or(ReviewError::EmptyNote)
    }

    fn record_decision(
        &mut self,
        status: BeneficiaryStatus,
        decision: ReviewDecision,
        now: DateTime<Utc>,
    ) {
        self.summary.status = status;
        self.profile.last_updated = now.date_naive();
        self.decision = Some(decision);
    }
}
