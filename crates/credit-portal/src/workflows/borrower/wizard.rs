use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog;
use super::domain::{
    ApplicationId, DocumentKind, PersonalInfo, PersonalInfoUpdate, VerificationOutcome,
    VerificationStatus, WizardStep,
};
use super::upload::UploadedDocument;
use super::validation::{validate_step, DocumentSlots, StepErrors};
use crate::workflows::shared::IncomeBand;

/// Verification status plus the results that only exist once it completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationState {
    pub status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_income: Option<IncomeBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_score: Option<u16>,
}

impl Default for VerificationState {
    fn default() -> Self {
        Self {
            status: VerificationStatus::Pending,
            estimated_income: None,
            composite_score: None,
        }
    }
}

/// One borrower's pass through the five-step onboarding wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationWizard {
    pub id: ApplicationId,
    pub step: WizardStep,
    pub personal_info: PersonalInfo,
    pub documents: DocumentSlots,
    pub errors: StepErrors,
    pub verification: VerificationState,
    pub created_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("step {} has {} unresolved field(s)", .step.number(), .errors.len())]
    Incomplete {
        step: WizardStep,
        errors: StepErrors,
    },
    #[error("applications can only be submitted from the review step (currently on step {})", .step.number())]
    NotOnReviewStep { step: WizardStep },
    #[error("verification is already {}", .status.label())]
    AlreadySubmitted { status: VerificationStatus },
}

impl ApplicationWizard {
    pub fn new(id: ApplicationId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            step: WizardStep::PersonalInfo,
            personal_info: PersonalInfo::default(),
            documents: DocumentSlots::new(),
            errors: StepErrors::default(),
            verification: VerificationState::default(),
            created_at,
            submitted_at: None,
        }
    }

    /// Applies the provided fields; editing a field clears its error.
    pub fn update_personal_info(&mut self, update: PersonalInfoUpdate) {
        for (field, value) in update.into_changes() {
            self.personal_info.set(field, value);
            self.errors.clear(field);
        }
    }

    pub fn attach_document(&mut self, kind: DocumentKind, document: UploadedDocument) {
        self.documents.insert(kind, document);
        self.errors.clear(kind);
    }

    pub fn remove_document(&mut self, kind: DocumentKind) -> Option<UploadedDocument> {
        let removed = self.documents.remove(&kind);
        self.errors.clear(kind);
        removed
    }

    pub fn validate_current_step(&self) -> StepErrors {
        validate_step(self.step, &self.personal_info, &self.documents)
    }

    /// Validates the current step and moves forward when it is clean.
    /// On the review step a clean validation keeps the wizard where it is.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let errors = self.validate_current_step();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(WizardError::Incomplete {
                step: self.step,
                errors,
            });
        }

        self.errors = StepErrors::default();
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Moves back one step without validating. Errors are kept.
    pub fn previous(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn can_submit(&self) -> bool {
        self.step.is_review()
            && self.verification.status.accepts_submission()
            && self.validate_current_step().is_empty()
    }

    /// Moves verification to in-progress. Results from an earlier attempt are dropped.
    pub fn begin_verification(&mut self, now: DateTime<Utc>) -> Result<(), WizardError> {
        if !self.step.is_review() {
            return Err(WizardError::NotOnReviewStep { step: self.step });
        }
        if !self.verification.status.accepts_submission() {
            return Err(WizardError::AlreadySubmitted {
                status: self.verification.status,
            });
        }

        let errors = self.validate_current_step();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(WizardError::Incomplete {
                step: self.step,
                errors,
            });
        }

        self.errors = StepErrors::default();
        self.verification = VerificationState {
            status: VerificationStatus::InProgress,
            estimated_income: None,
            composite_score: None,
        };
        self.submitted_at = Some(now);
        Ok(())
    }

    /// Records the verifier's result. Ignored unless verification is in progress.
    pub fn complete_verification(&mut self, outcome: VerificationOutcome) -> bool {
        if self.verification.status != VerificationStatus::InProgress {
            return false;
        }
        self.verification = VerificationState {
            status: VerificationStatus::Completed,
            estimated_income: Some(outcome.estimated_income),
            composite_score: Some(outcome.composite_score),
        };
        true
    }

    /// Marks an in-progress verification as failed. The simulated verifier in
    /// this crate always succeeds; this is the entry point for a real verifier
    /// reporting back, after which the borrower may submit again.
    pub fn fail_verification(&mut self) -> bool {
        if self.verification.status != VerificationStatus::InProgress {
            return false;
        }
        self.verification = VerificationState {
            status: VerificationStatus::Failed,
            estimated_income: None,
            composite_score: None,
        };
        true
    }

    pub fn view(&self) -> WizardView {
        let documents = DocumentKind::ordered()
            .into_iter()
            .filter_map(|kind| {
                self.documents.get(&kind).map(|document| DocumentSlotView {
                    id: kind,
                    title: catalog::requirement(kind).title,
                    file_name: document.file_name.clone(),
                    size_bytes: document.size_bytes,
                    display_size: document.display_size(),
                    content_type: document.content_type.clone(),
                    uploaded_at: document.uploaded_at,
                })
            })
            .collect();

        WizardView {
            application_id: self.id.clone(),
            step: self.step.number(),
            step_key: self.step,
            step_title: self.step.title(),
            total_steps: WizardStep::COUNT,
            personal_info: self.personal_info.clone(),
            documents,
            errors: self.errors.clone(),
            verification: VerificationView {
                status: self.verification.status,
                title: self.verification.status.title(),
                description: self.verification.status.description(),
                estimated_income: self.verification.estimated_income.map(|band| band.label()),
                composite_score: self.verification.composite_score,
            },
            can_submit: self.can_submit(),
            created_at: self.created_at,
            submitted_at: self.submitted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSlotView {
    pub id: DocumentKind,
    pub title: &'static str,
    pub file_name: String,
    pub size_bytes: u64,
    pub display_size: String,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationView {
    pub status: VerificationStatus,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_income: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_score: Option<u16>,
}

/// Snapshot of a wizard rendered for API clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub application_id: ApplicationId,
    pub step: u8,
    pub step_key: WizardStep,
    pub step_title: &'static str,
    pub total_steps: u8,
    pub personal_info: PersonalInfo,
    pub documents: Vec<DocumentSlotView>,
    pub errors: StepErrors,
    pub verification: VerificationView,
    pub can_submit: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}
