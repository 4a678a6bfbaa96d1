use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use credit_portal::auth::{AuthService, SessionStore};
use credit_portal::config::SimulationConfig;
use credit_portal::workflows::beneficiaries::{
    sample_records, BeneficiaryId, BeneficiaryRecord, BeneficiaryRepository, BeneficiaryService,
};
use credit_portal::workflows::borrower::{
    ApplicationId, ApplicationWizard, BorrowerPortalService, WizardRepository,
};
use credit_portal::workflows::shared::RepositoryError;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryWizardRepository {
    wizards: Arc<Mutex<HashMap<ApplicationId, ApplicationWizard>>>,
}

impl WizardRepository for InMemoryWizardRepository {
    fn insert(&self, wizard: ApplicationWizard) -> Result<ApplicationWizard, RepositoryError> {
        let mut wizards = guard(&self.wizards);
        if wizards.contains_key(&wizard.id) {
            return Err(RepositoryError::Conflict);
        }
        wizards.insert(wizard.id.clone(), wizard.clone());
        Ok(wizard)
    }

    fn update(&self, wizard: ApplicationWizard) -> Result<(), RepositoryError> {
        let mut wizards = guard(&self.wizards);
        match wizards.get_mut(&wizard.id) {
            Some(slot) => {
                *slot = wizard;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError> {
        Ok(guard(&self.wizards).get(id).cloned())
    }

    fn remove(&self, id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError> {
        Ok(guard(&self.wizards).remove(id))
    }
}

/// Beneficiary rows in dashboard order, seeded with the sample directory.
#[derive(Clone)]
pub(crate) struct InMemoryBeneficiaryRepository {
    records: Arc<Mutex<Vec<BeneficiaryRecord>>>,
}

impl InMemoryBeneficiaryRepository {
    pub(crate) fn seeded() -> Self {
        Self {
            records: Arc::new(Mutex::new(sample_records())),
        }
    }
}

impl BeneficiaryRepository for InMemoryBeneficiaryRepository {
    fn list(&self) -> Result<Vec<BeneficiaryRecord>, RepositoryError> {
        Ok(guard(&self.records).clone())
    }

    fn fetch(&self, id: BeneficiaryId) -> Result<Option<BeneficiaryRecord>, RepositoryError> {
        Ok(guard(&self.records)
            .iter()
            .find(|record| record.summary.id == id)
            .cloned())
    }

    fn update(&self, record: BeneficiaryRecord) -> Result<(), RepositoryError> {
        let mut records = guard(&self.records);
        match records
            .iter_mut()
            .find(|stored| stored.summary.id == record.summary.id)
        {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

/// Services shared by the HTTP routes and the CLI.
#[derive(Clone)]
pub(crate) struct PortalServices {
    pub(crate) borrower: Arc<BorrowerPortalService<InMemoryWizardRepository>>,
    pub(crate) beneficiaries: Arc<BeneficiaryService<InMemoryBeneficiaryRepository>>,
    pub(crate) auth: Arc<AuthService>,
}

impl PortalServices {
    pub(crate) fn in_memory(simulation: SimulationConfig) -> Self {
        Self {
            borrower: Arc::new(BorrowerPortalService::new(
                Arc::new(InMemoryWizardRepository::default()),
                simulation,
            )),
            beneficiaries: Arc::new(BeneficiaryService::new(
                Arc::new(InMemoryBeneficiaryRepository::seeded()),
                simulation,
            )),
            auth: Arc::new(AuthService::new(Arc::new(SessionStore::new()), simulation)),
        }
    }
}
