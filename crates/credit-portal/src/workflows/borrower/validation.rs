use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::catalog::{self, DocumentCategory};
use super::domain::{DocumentKind, PersonalField, PersonalInfo, WizardStep};
use super::upload::UploadedDocument;

/// Key of an inline error: a personal-info field or a document slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Personal(PersonalField),
    Document(DocumentKind),
}

impl FieldKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKey::Personal(field) => field.key(),
            FieldKey::Document(kind) => kind.id(),
        }
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<PersonalField> for FieldKey {
    fn from(field: PersonalField) -> Self {
        FieldKey::Personal(field)
    }
}

impl From<DocumentKind> for FieldKey {
    fn from(kind: DocumentKind) -> Self {
        FieldKey::Document(kind)
    }
}

/// Field-keyed error messages rendered next to the offending input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepErrors(BTreeMap<FieldKey, String>);

impl StepErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: impl Into<FieldKey>) -> Option<&str> {
        self.0.get(&key.into()).map(String::as_str)
    }

    pub fn contains(&self, key: impl Into<FieldKey>) -> bool {
        self.0.contains_key(&key.into())
    }

    pub fn insert(&mut self, key: impl Into<FieldKey>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    pub fn clear(&mut self, key: impl Into<FieldKey>) -> Option<String> {
        self.0.remove(&key.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.0.keys().copied()
    }

    pub fn extend(&mut self, other: StepErrors) {
        self.0.extend(other.0);
    }
}

pub type DocumentSlots = BTreeMap<DocumentKind, UploadedDocument>;

/// Step 1: required fields must be non-blank. Formats are not checked.
pub fn validate_personal_info(info: &PersonalInfo) -> StepErrors {
    let mut errors = StepErrors::default();
    for field in PersonalField::ordered() {
        if let Some(message) = field.required_message() {
            if info.value(field).trim().is_empty() {
                errors.insert(field, message);
            }
        }
    }
    errors
}

/// Steps 2-4: every required document of the category must be present.
pub fn validate_documents(category: &DocumentCategory, documents: &DocumentSlots) -> StepErrors {
    let mut errors = StepErrors::default();
    for requirement in category.required() {
        if !documents.contains_key(&requirement.kind) {
            errors.insert(requirement.kind, format!("{} is required", requirement.title));
        }
    }
    errors
}

/// Validator for the given step. The review step re-checks everything before it.
pub fn validate_step(step: WizardStep, info: &PersonalInfo, documents: &DocumentSlots) -> StepErrors {
    match step {
        WizardStep::PersonalInfo => validate_personal_info(info),
        WizardStep::IdentityDocuments => validate_documents(&catalog::IDENTITY, documents),
        WizardStep::UtilityBills => validate_documents(&catalog::UTILITY, documents),
        WizardStep::FinancialRecords => validate_documents(&catalog::FINANCIAL, documents),
        WizardStep::ReviewSubmit => {
            let mut errors = validate_personal_info(info);
            for category in [&catalog::IDENTITY, &catalog::UTILITY, &catalog::FINANCIAL] {
                errors.extend(validate_documents(category, documents));
            }
            errors
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::borrower::upload::FileCandidate;
    use chrono::Utc;

    fn complete_info() -> PersonalInfo {
        PersonalInfo {
            full_name: "Anita Verma".to_string(),
            phone_number: "+91 98100 00000".to_string(),
            email: "anita@example.in".to_string(),
            aadhaar_number: "1234 5678 9012".to_string(),
            pan_number: String::new(),
            address: "14 MG Road, Pune".to_string(),
        }
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut info = complete_info();
        info.full_name = "   ".to_string();
        let errors = validate_personal_info(&info);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(PersonalField::FullName),
            Some("Full name is required")
        );
    }

    #[test]
    fn pan_and_email_format_are_not_checked() {
        let mut info = complete_info();
        info.email = "not-an-email".to_string();
        assert!(validate_personal_info(&info).is_empty());
    }

    #[test]
    fn optional_utility_bills_are_not_required() {
        let mut documents = DocumentSlots::new();
        documents.insert(
            DocumentKind::Electricity,
            UploadedDocument::accept(FileCandidate::new("bill.pdf", 100), Utc::now()),
        );
        assert!(validate_step(WizardStep::UtilityBills, &complete_info(), &documents).is_empty());
    }

    #[test]
    fn review_step_aggregates_all_missing_items() {
        let errors = validate_step(
            WizardStep::ReviewSubmit,
            &PersonalInfo::default(),
            &DocumentSlots::new(),
        );
        // five personal fields plus five required documents
        assert_eq!(errors.len(), 10);
        assert_eq!(
            errors.get(DocumentKind::BankStatement),
            Some("Bank Statement is required")
        );
    }

    #[test]
    fn errors_serialize_with_portal_keys() {
        let mut errors = StepErrors::default();
        errors.insert(PersonalField::AadhaarNumber, "Aadhaar number is required");
        errors.insert(DocumentKind::MobileRecharge, "Mobile Recharge History is required");
        let json = serde_json::to_value(&errors).expect("serializes");
        assert_eq!(json["aadhaarNumber"], "Aadhaar number is required");
        assert_eq!(json["mobile-recharge"], "Mobile Recharge History is required");
    }
}
