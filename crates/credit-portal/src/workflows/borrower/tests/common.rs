use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::config::SimulationConfig;
use crate::workflows::borrower::domain::{ApplicationId, DocumentKind, PersonalInfoUpdate};
use crate::workflows::borrower::repository::WizardRepository;
use crate::workflows::borrower::upload::{FileCandidate, UploadedDocument};
use crate::workflows::borrower::wizard::ApplicationWizard;
use crate::workflows::borrower::BorrowerPortalService;
use crate::workflows::shared::RepositoryError;

pub(super) fn personal_details() -> PersonalInfoUpdate {
    PersonalInfoUpdate {
        full_name: Some("Lakshmi Narayanan".to_string()),
        phone_number: Some("+91 94440 12345".to_string()),
        email: Some("lakshmi.n@example.in".to_string()),
        aadhaar_number: Some("4321 8765 2109".to_string()),
        pan_number: None,
        address: Some("22 Anna Salai, Chennai".to_string()),
    }
}

pub(super) fn candidate_for(kind: DocumentKind) -> FileCandidate {
    match kind {
        DocumentKind::BankStatement => FileCandidate::new("statement-q3.pdf", 2_457_600),
        DocumentKind::MobileRecharge => FileCandidate::new("recharges.png", 340_000),
        other => FileCandidate::new(format!("{other}.jpg"), 820_000),
    }
}

pub(super) fn uploaded(kind: DocumentKind) -> UploadedDocument {
    UploadedDocument::accept(candidate_for(kind), Utc::now())
}

pub(super) const REQUIRED_DOCUMENTS: [DocumentKind; 5] = [
    DocumentKind::Aadhaar,
    DocumentKind::Pan,
    DocumentKind::Electricity,
    DocumentKind::BankStatement,
    DocumentKind::MobileRecharge,
];

/// Wizard with every required item filled, still on step 1.
pub(super) fn filled_wizard() -> ApplicationWizard {
    let mut wizard = ApplicationWizard::new(ApplicationId("loan-test".to_string()), Utc::now());
    wizard.update_personal_info(personal_details());
    for kind in REQUIRED_DOCUMENTS {
        wizard.attach_document(kind, uploaded(kind));
    }
    wizard
}

pub(super) fn build_service(
    simulation: SimulationConfig,
) -> (BorrowerPortalService<MemoryWizards>, Arc<MemoryWizards>) {
    let repository = Arc::new(MemoryWizards::default());
    let service = BorrowerPortalService::new(repository.clone(), simulation);
    (service, repository)
}

/// Start an application and walk it to the review step.
pub(super) async fn application_on_review(
    service: &BorrowerPortalService<MemoryWizards>,
) -> ApplicationId {
    let id = service.start().expect("application starts").application_id;
    service
        .update_personal_info(&id, personal_details())
        .expect("personal info stored");
    for kind in REQUIRED_DOCUMENTS {
        service
            .upload_document(&id, kind.id(), candidate_for(kind))
            .await
            .expect("document accepted");
    }
    for _ in 0..4 {
        service.next(&id).expect("step validates");
    }
    id
}

#[derive(Default, Clone)]
pub(super) struct MemoryWizards {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationWizard>>>,
}

impl MemoryWizards {
    pub(super) fn stored(&self, id: &ApplicationId) -> Option<ApplicationWizard> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .get(id)
            .cloned()
    }
}

impl WizardRepository for MemoryWizards {
    fn insert(&self, wizard: ApplicationWizard) -> Result<ApplicationWizard, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&wizard.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(wizard.id.clone(), wizard.clone());
        Ok(wizard)
    }

    fn update(&self, wizard: ApplicationWizard) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(wizard.id.clone(), wizard);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.remove(id))
    }
}

pub(super) struct UnavailableRepository;

impl WizardRepository for UnavailableRepository {
    fn insert(&self, _wizard: ApplicationWizard) -> Result<ApplicationWizard, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _wizard: ApplicationWizard) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
