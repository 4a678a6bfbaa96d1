use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::config::SimulationConfig;
use crate::workflows::beneficiaries::domain::BeneficiaryId;
use crate::workflows::beneficiaries::repository::{BeneficiaryRecord, BeneficiaryRepository};
use crate::workflows::beneficiaries::sample::sample_records;
use crate::workflows::beneficiaries::BeneficiaryService;
use crate::workflows::shared::RepositoryError;

pub(super) fn build_service(
    simulation: SimulationConfig,
) -> (BeneficiaryService<SeededRepository>, Arc<SeededRepository>) {
    let repository = Arc::new(SeededRepository::seeded());
    let service = BeneficiaryService::new(repository.clone(), simulation);
    (service, repository)
}

pub(super) fn ids(rows: &[crate::workflows::beneficiaries::Beneficiary]) -> Vec<u32> {
    rows.iter().map(|row| row.id.0).collect()
}

#[derive(Default, Clone)]
pub(super) struct SeededRepository {
    pub(super) records: Arc<Mutex<BTreeMap<BeneficiaryId, BeneficiaryRecord>>>,
}

impl SeededRepository {
    pub(super) fn seeded() -> Self {
        let records = sample_records()
            .into_iter()
            .map(|record| (record.summary.id, record))
            .collect();
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub(super) fn stored(&self, id: u32) -> Option<BeneficiaryRecord> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .get(&BeneficiaryId(id))
            .cloned()
    }
}

impl BeneficiaryRepository for SeededRepository {
    fn list(&self) -> Result<Vec<BeneficiaryRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn fetch(&self, id: BeneficiaryId) -> Result<Option<BeneficiaryRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn update(&self, record: BeneficiaryRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.summary.id, record);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl BeneficiaryRepository for UnavailableRepository {
    fn list(&self) -> Result<Vec<BeneficiaryRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn fetch(&self, _id: BeneficiaryId) -> Result<Option<BeneficiaryRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn update(&self, _record: BeneficiaryRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }
}
