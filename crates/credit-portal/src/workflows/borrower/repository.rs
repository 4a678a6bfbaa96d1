use super::domain::ApplicationId;
use super::wizard::ApplicationWizard;
use crate::workflows::shared::RepositoryError;

/// Storage abstraction for in-flight borrower applications.
pub trait WizardRepository: Send + Sync {
    fn insert(&self, wizard: ApplicationWizard) -> Result<ApplicationWizard, RepositoryError>;
    fn update(&self, wizard: ApplicationWizard) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError>;
    fn remove(&self, id: &ApplicationId) -> Result<Option<ApplicationWizard>, RepositoryError>;
}
