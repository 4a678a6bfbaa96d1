use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::catalog;
use super::domain::{ApplicationId, DocumentKind, PersonalInfoUpdate, VerificationOutcome};
use super::repository::WizardRepository;
use super::upload::{screen, FileCandidate, UploadRejection, UploadedDocument};
use super::verification::VerificationHandle;
use super::wizard::{ApplicationWizard, WizardError, WizardView};
use crate::config::SimulationConfig;
use crate::workflows::shared::RepositoryError;

/// Service driving borrower applications through the wizard and the simulated verifier.
pub struct BorrowerPortalService<R> {
    repository: Arc<R>,
    simulation: SimulationConfig,
    outcome: VerificationOutcome,
    write_lock: Arc<Mutex<()>>,
    verifications: Mutex<HashMap<ApplicationId, VerificationHandle>>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("loan-{id:06}"))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<R> BorrowerPortalService<R>
where
    R: WizardRepository + 'static,
{
    pub fn new(repository: Arc<R>, simulation: SimulationConfig) -> Self {
        Self {
            repository,
            simulation,
            outcome: VerificationOutcome::default(),
            write_lock: Arc::new(Mutex::new(())),
            verifications: Mutex::new(HashMap::new()),
        }
    }

    /// Replace the result reported by the simulated verifier.
    pub fn with_outcome(mut self, outcome: VerificationOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn simulation(&self) -> SimulationConfig {
        self.simulation
    }

    /// Open a fresh application on step 1.
    pub fn start(&self) -> Result<WizardView, BorrowerServiceError> {
        let wizard = ApplicationWizard::new(next_application_id(), Utc::now());
        let stored = self.repository.insert(wizard)?;
        info!(application_id = %stored.id, "borrower application started");
        Ok(stored.view())
    }

    pub fn get(&self, id: &ApplicationId) -> Result<WizardView, BorrowerServiceError> {
        Ok(self.load(id)?.view())
    }

    pub fn update_personal_info(
        &self,
        id: &ApplicationId,
        update: PersonalInfoUpdate,
    ) -> Result<WizardView, BorrowerServiceError> {
        self.mutate(id, |wizard| {
            wizard.update_personal_info(update);
            Ok(())
        })
    }

    /// Screen the file, wait out the simulated upload, then fill the slot.
    pub async fn upload_document(
        &self,
        id: &ApplicationId,
        document_id: &str,
        candidate: FileCandidate,
    ) -> Result<WizardView, BorrowerServiceError> {
        let kind = parse_document(document_id)?;
        self.load(id)?;

        if let Err(rejection) = screen(catalog::requirement(kind), &candidate) {
            warn!(application_id = %id, document = %kind, %rejection, "upload rejected");
            return Err(rejection.into());
        }

        if !self.simulation.upload_delay.is_zero() {
            tokio::time::sleep(self.simulation.upload_delay).await;
        }

        let document = UploadedDocument::accept(candidate, Utc::now());
        debug!(
            application_id = %id,
            document = %kind,
            file_name = %document.file_name,
            size_bytes = document.size_bytes,
            "document uploaded"
        );
        self.mutate(id, |wizard| {
            wizard.attach_document(kind, document);
            Ok(())
        })
    }

    pub fn remove_document(
        &self,
        id: &ApplicationId,
        document_id: &str,
    ) -> Result<WizardView, BorrowerServiceError> {
        let kind = parse_document(document_id)?;
        self.mutate(id, |wizard| {
            wizard.remove_document(kind);
            Ok(())
        })
    }

    /// Validate the current step and advance. Validation errors are stored on the
    /// wizard before the error is returned.
    pub fn next(&self, id: &ApplicationId) -> Result<WizardView, BorrowerServiceError> {
        let _guard = lock(&self.write_lock);
        let mut wizard = self.load(id)?;
        let from = wizard.step;
        let outcome = wizard.next();
        self.repository.update(wizard.clone())?;

        match outcome {
            Ok(step) => {
                info!(application_id = %id, from = from.number(), to = step.number(), "wizard advanced");
                Ok(wizard.view())
            }
            Err(error) => {
                debug!(application_id = %id, step = from.number(), %error, "wizard step incomplete");
                Err(error.into())
            }
        }
    }

    pub fn previous(&self, id: &ApplicationId) -> Result<WizardView, BorrowerServiceError> {
        self.mutate(id, |wizard| {
            wizard.previous();
            Ok(())
        })
    }

    /// Start verification and schedule its completion on a background task.
    /// The handle is registered before the write lock is released so a
    /// concurrent discard always finds it.
    pub async fn submit(&self, id: &ApplicationId) -> Result<WizardView, BorrowerServiceError> {
        let _guard = lock(&self.write_lock);
        let mut wizard = self.load(id)?;
        let started = wizard.begin_verification(Utc::now());
        self.repository.update(wizard.clone())?;
        started?;

        let task = tokio::spawn(complete_after(
            self.repository.clone(),
            self.write_lock.clone(),
            id.clone(),
            self.simulation.verification_delay,
            self.outcome,
        ));
        let tracked = {
            let mut verifications = lock(&self.verifications);
            verifications.retain(|_, handle| !handle.is_finished());
            verifications.insert(id.clone(), VerificationHandle::new(task));
            verifications.len()
        };

        info!(
            application_id = %id,
            delay_ms = self.simulation.verification_delay.as_millis() as u64,
            tracked,
            "verification scheduled"
        );
        Ok(wizard.view())
    }

    /// Drop the application and abort any verification still waiting to land.
    pub fn discard(&self, id: &ApplicationId) -> Result<(), BorrowerServiceError> {
        let _guard = lock(&self.write_lock);
        if let Some(handle) = lock(&self.verifications).remove(id) {
            if !handle.is_finished() {
                info!(application_id = %id, "pending verification cancelled");
            }
            handle.cancel();
        }

        match self.repository.remove(id)? {
            Some(_) => {
                info!(application_id = %id, "borrower application discarded");
                Ok(())
            }
            None => Err(BorrowerServiceError::NotFound(id.clone())),
        }
    }

    /// Verification handles still held, finished ones included until the next submission.
    pub fn tracked_verifications(&self) -> usize {
        lock(&self.verifications).len()
    }

    pub fn verification_pending(&self, id: &ApplicationId) -> bool {
        lock(&self.verifications)
            .get(id)
            .is_some_and(|handle| !handle.is_finished())
    }

    fn load(&self, id: &ApplicationId) -> Result<ApplicationWizard, BorrowerServiceError> {
        self.repository
            .fetch(id)?
            .ok_or_else(|| BorrowerServiceError::NotFound(id.clone()))
    }

    fn mutate<F>(&self, id: &ApplicationId, change: F) -> Result<WizardView, BorrowerServiceError>
    where
        F: FnOnce(&mut ApplicationWizard) -> Result<(), BorrowerServiceError>,
    {
        let _guard = lock(&self.write_lock);
        let mut wizard = self.load(id)?;
        change(&mut wizard)?;
        self.repository.update(wizard.clone())?;
        Ok(wizard.view())
    }
}

async fn complete_after<R>(
    repository: Arc<R>,
    write_lock: Arc<Mutex<()>>,
    id: ApplicationId,
    delay: Duration,
    outcome: VerificationOutcome,
) where
    R: WizardRepository + 'static,
{
    tokio::time::sleep(delay).await;

    let _guard = lock(&write_lock);
    let mut wizard = match repository.fetch(&id) {
        Ok(Some(wizard)) => wizard,
        Ok(None) => {
            debug!(application_id = %id, "application gone before verification completed");
            return;
        }
        Err(error) => {
            warn!(application_id = %id, %error, "verification could not load application");
            return;
        }
    };

    if !wizard.complete_verification(outcome) {
        return;
    }

    match repository.update(wizard) {
        Ok(()) => info!(
            application_id = %id,
            composite_score = outcome.composite_score,
            estimated_income = %outcome.estimated_income,
            "verification completed"
        ),
        Err(error) => warn!(application_id = %id, %error, "verification result not stored"),
    }
}

fn parse_document(document_id: &str) -> Result<DocumentKind, BorrowerServiceError> {
    DocumentKind::from_id(document_id)
        .ok_or_else(|| BorrowerServiceError::UnknownDocument(document_id.to_string()))
}

/// Error raised by the borrower portal service.
#[derive(Debug, thiserror::Error)]
pub enum BorrowerServiceError {
    #[error("application {0} not found")]
    NotFound(ApplicationId),
    #[error("unknown document id '{0}'")]
    UnknownDocument(String),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Upload(#[from] UploadRejection),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
