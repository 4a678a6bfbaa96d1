use serde::Serialize;

use super::domain::{DocumentKind, WizardStep};

const IMAGE_OR_PDF: &[&str] = &["jpg", "jpeg", "png", "pdf"];
const PDF_ONLY: &[&str] = &["pdf"];
const IMAGE_ONLY: &[&str] = &["jpg", "jpeg", "png"];

const MEGABYTE: u64 = 1024 * 1024;

/// Upload rules for one document slot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequirement {
    pub kind: DocumentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub accepted_formats: &'static [&'static str],
    pub max_size_mb: u64,
    pub required: bool,
}

impl DocumentRequirement {
    pub const fn max_size_bytes(&self) -> u64 {
        self.max_size_mb * MEGABYTE
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.accepted_formats
            .iter()
            .any(|format| format.eq_ignore_ascii_case(extension))
    }
}

/// Documents collected on one of the upload steps.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCategory {
    pub step: WizardStep,
    pub title: &'static str,
    pub description: &'static str,
    pub documents: &'static [DocumentRequirement],
}

impl DocumentCategory {
    pub fn required(&self) -> impl Iterator<Item = &'static DocumentRequirement> {
        self.documents.iter().filter(|document| document.required)
    }
}

static IDENTITY_DOCUMENTS: [DocumentRequirement; 2] = [
    DocumentRequirement {
        kind: DocumentKind::Aadhaar,
        title: "Aadhaar Card",
        description: "Clear photo of both front and back sides",
        accepted_formats: IMAGE_OR_PDF,
        max_size_mb: 5,
        required: true,
    },
    DocumentRequirement {
        kind: DocumentKind::Pan,
        title: "PAN Card",
        description: "Clear photo of PAN card",
        accepted_formats: IMAGE_OR_PDF,
        max_size_mb: 5,
        required: true,
    },
];

static UTILITY_DOCUMENTS: [DocumentRequirement; 3] = [
    DocumentRequirement {
        kind: DocumentKind::Electricity,
        title: "Electricity Bill",
        description: "Latest electricity bill (within 3 months)",
        accepted_formats: IMAGE_OR_PDF,
        max_size_mb: 5,
        required: true,
    },
    DocumentRequirement {
        kind: DocumentKind::Water,
        title: "Water Bill",
        description: "Recent water bill (optional)",
        accepted_formats: IMAGE_OR_PDF,
        max_size_mb: 5,
        required: false,
    },
    DocumentRequirement {
        kind: DocumentKind::Gas,
        title: "Gas Bill",
        description: "Recent gas connection bill (optional)",
        accepted_formats: IMAGE_OR_PDF,
        max_size_mb: 5,
        required: false,
    },
];

static FINANCIAL_DOCUMENTS: [DocumentRequirement; 2] = [
    DocumentRequirement {
        kind: DocumentKind::BankStatement,
        title: "Bank Statement",
        description: "Last 3 months bank statement",
        accepted_formats: PDF_ONLY,
        max_size_mb: 10,
        required: true,
    },
    DocumentRequirement {
        kind: DocumentKind::MobileRecharge,
        title: "Mobile Recharge History",
        description: "Screenshots of recent mobile recharges",
        accepted_formats: IMAGE_ONLY,
        max_size_mb: 5,
        required: true,
    },
];

pub static IDENTITY: DocumentCategory = DocumentCategory {
    step: WizardStep::IdentityDocuments,
    title: "Identity Documents",
    description: "Upload your government-issued identity documents for verification",
    documents: &IDENTITY_DOCUMENTS,
};

pub static UTILITY: DocumentCategory = DocumentCategory {
    step: WizardStep::UtilityBills,
    title: "Utility Bills",
    description: "Upload recent utility bills to verify your address and payment history",
    documents: &UTILITY_DOCUMENTS,
};

pub static FINANCIAL: DocumentCategory = DocumentCategory {
    step: WizardStep::FinancialRecords,
    title: "Financial Records",
    description: "Upload financial documents to assess your creditworthiness",
    documents: &FINANCIAL_DOCUMENTS,
};

pub fn category_for(step: WizardStep) -> Option<&'static DocumentCategory> {
    match step {
        WizardStep::IdentityDocuments => Some(&IDENTITY),
        WizardStep::UtilityBills => Some(&UTILITY),
        WizardStep::FinancialRecords => Some(&FINANCIAL),
        WizardStep::PersonalInfo | WizardStep::ReviewSubmit => None,
    }
}

pub fn requirement(kind: DocumentKind) -> &'static DocumentRequirement {
    match kind {
        DocumentKind::Aadhaar => &IDENTITY_DOCUMENTS[0],
        DocumentKind::Pan => &IDENTITY_DOCUMENTS[1],
        DocumentKind::Electricity => &UTILITY_DOCUMENTS[0],
        DocumentKind::Water => &UTILITY_DOCUMENTS[1],
        DocumentKind::Gas => &UTILITY_DOCUMENTS[2],
        DocumentKind::BankStatement => &FINANCIAL_DOCUMENTS[0],
        DocumentKind::MobileRecharge => &FINANCIAL_DOCUMENTS[1],
    }
}

/// Step outline served to the portal's progress stepper.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutline {
    pub number: u8,
    pub step: WizardStep,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static DocumentCategory>,
}

pub fn step_outline() -> Vec<StepOutline> {
    WizardStep::ordered()
        .into_iter()
        .map(|step| StepOutline {
            number: step.number(),
            step,
            title: step.title(),
            description: step.description(),
            category: category_for(step),
        })
        .collect()
}
