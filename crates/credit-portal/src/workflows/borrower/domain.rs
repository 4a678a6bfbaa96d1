use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workflows::shared::IncomeBand;

/// Identifier wrapper for borrower applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact and identity details captured on the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub aadhaar_number: String,
    pub pan_number: String,
    pub address: String,
}

impl PersonalInfo {
    pub fn value(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FullName => &self.full_name,
            PersonalField::PhoneNumber => &self.phone_number,
            PersonalField::Email => &self.email,
            PersonalField::AadhaarNumber => &self.aadhaar_number,
            PersonalField::PanNumber => &self.pan_number,
            PersonalField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: PersonalField, value: String) {
        let slot = match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::PhoneNumber => &mut self.phone_number,
            PersonalField::Email => &mut self.email,
            PersonalField::AadhaarNumber => &mut self.aadhaar_number,
            PersonalField::PanNumber => &mut self.pan_number,
            PersonalField::Address => &mut self.address,
        };
        *slot = value;
    }
}

/// Partial update of [`PersonalInfo`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoUpdate {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub aadhaar_number: Option<String>,
    #[serde(default)]
    pub pan_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl PersonalInfoUpdate {
    pub fn into_changes(self) -> Vec<(PersonalField, String)> {
        [
            (PersonalField::FullName, self.full_name),
            (PersonalField::PhoneNumber, self.phone_number),
            (PersonalField::Email, self.email),
            (PersonalField::AadhaarNumber, self.aadhaar_number),
            (PersonalField::PanNumber, self.pan_number),
            (PersonalField::Address, self.address),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    PhoneNumber,
    Email,
    AadhaarNumber,
    PanNumber,
    Address,
}

impl PersonalField {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::FullName,
            Self::PhoneNumber,
            Self::Email,
            Self::AadhaarNumber,
            Self::PanNumber,
            Self::Address,
        ]
    }

    /// Key used for the field in JSON payloads and error maps.
    pub const fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
            Self::AadhaarNumber => "aadhaarNumber",
            Self::PanNumber => "panNumber",
            Self::Address => "address",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::PhoneNumber => "Phone Number",
            Self::Email => "Email Address",
            Self::AadhaarNumber => "Aadhaar Number",
            Self::PanNumber => "PAN Number",
            Self::Address => "Address",
        }
    }

    /// Message shown when a required field is left blank. `None` for optional fields.
    pub const fn required_message(self) -> Option<&'static str> {
        match self {
            Self::FullName => Some("Full name is required"),
            Self::PhoneNumber => Some("Phone number is required"),
            Self::Email => Some("Email is required"),
            Self::AadhaarNumber => Some("Aadhaar number is required"),
            Self::PanNumber => None,
            Self::Address => Some("Address is required"),
        }
    }
}

/// The five wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    IdentityDocuments,
    UtilityBills,
    FinancialRecords,
    ReviewSubmit,
}

impl WizardStep {
    pub const COUNT: u8 = 5;

    pub const fn ordered() -> [Self; 5] {
        [
            Self::PersonalInfo,
            Self::IdentityDocuments,
            Self::UtilityBills,
            Self::FinancialRecords,
            Self::ReviewSubmit,
        ]
    }

    /// One-based position shown in the progress stepper.
    pub const fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::IdentityDocuments => 2,
            Self::UtilityBills => 3,
            Self::FinancialRecords => 4,
            Self::ReviewSubmit => 5,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::PersonalInfo),
            2 => Some(Self::IdentityDocuments),
            3 => Some(Self::UtilityBills),
            4 => Some(Self::FinancialRecords),
            5 => Some(Self::ReviewSubmit),
            _ => None,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::IdentityDocuments => "Identity Documents",
            Self::UtilityBills => "Utility Bills",
            Self::FinancialRecords => "Financial Records",
            Self::ReviewSubmit => "Review & Submit",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Basic details and contact information",
            Self::IdentityDocuments => "Aadhaar and PAN verification",
            Self::UtilityBills => "Electricity, water, and gas bills",
            Self::FinancialRecords => "Bank statements and recharge history",
            Self::ReviewSubmit => "Verify information and submit",
        }
    }

    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub const fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub const fn is_review(self) -> bool {
        matches!(self, Self::ReviewSubmit)
    }
}

/// Document slots the borrower can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Aadhaar,
    Pan,
    Electricity,
    Water,
    Gas,
    BankStatement,
    MobileRecharge,
}

impl DocumentKind {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Aadhaar,
            Self::Pan,
            Self::Electricity,
            Self::Water,
            Self::Gas,
            Self::BankStatement,
            Self::MobileRecharge,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::Electricity => "electricity",
            Self::Water => "water",
            Self::Gas => "gas",
            Self::BankStatement => "bank-statement",
            Self::MobileRecharge => "mobile-recharge",
        }
    }

    pub fn from_id(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl VerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Pending => "Verification Pending",
            Self::InProgress => "Verification in Progress",
            Self::Completed => "Verification Complete",
            Self::Failed => "Verification Failed",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Pending => "Please upload all required documents to begin verification",
            Self::InProgress => "Our AI system is analyzing your documents and financial data",
            Self::Completed => "Your documents have been successfully verified and scored",
            Self::Failed => "Some documents need to be re-uploaded or corrected",
        }
    }

    /// Whether a (re)submission may start from this status.
    pub const fn accepts_submission(self) -> bool {
        matches!(self, Self::Pending | Self::Failed)
    }
}

/// Result the simulated verifier reports once the delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    pub estimated_income: IncomeBand,
    pub composite_score: u16,
}

impl Default for VerificationOutcome {
    fn default() -> Self {
        Self {
            estimated_income: IncomeBand::new(25_000, 35_000),
            composite_score: 78,
        }
    }
}
