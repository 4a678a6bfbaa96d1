//! Borrower onboarding: the five-step application wizard, document screening and
//! the simulated verification that scores a completed application.

pub mod catalog;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod upload;
pub mod validation;
pub(crate) mod verification;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use catalog::{category_for, requirement, step_outline, DocumentCategory, DocumentRequirement};
pub use domain::{
    ApplicationId, DocumentKind, PersonalField, PersonalInfo, PersonalInfoUpdate,
    VerificationOutcome, VerificationStatus, WizardStep,
};
pub use repository::WizardRepository;
pub use router::borrower_router;
pub use service::{BorrowerPortalService, BorrowerServiceError};
pub use upload::{format_file_size, FileCandidate, UploadRejection, UploadedDocument};
pub use validation::{FieldKey, StepErrors};
pub use wizard::{ApplicationWizard, VerificationState, WizardError, WizardView};
