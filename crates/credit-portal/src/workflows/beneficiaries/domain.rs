use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::shared::IncomeBand;

/// Numeric identifier used in `/beneficiary-detail-view/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeneficiaryId(pub u32);

impl BeneficiaryId {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }
}

impl fmt::Display for BeneficiaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|band| band.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeneficiaryStatus {
    Approved,
    Pending,
    Rejected,
}

impl BeneficiaryStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Approved, Self::Pending, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for BeneficiaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the admin dashboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: BeneficiaryId,
    pub name: String,
    pub email: String,
    pub income_band: IncomeBand,
    pub credit_score: u16,
    pub risk_band: RiskBand,
    pub application_date: NaiveDate,
    pub status: BeneficiaryStatus,
}

/// Contact and loan details shown on the profile card of the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryProfile {
    pub phone: String,
    pub address: String,
    pub estimated_income: u32,
    pub loan_amount: u64,
    pub loan_tenure_months: u16,
    pub assigned_officer: String,
    pub processing_days: u16,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmittedDocumentType {
    Aadhaar,
    ElectricityBill,
    WaterBill,
    GasBill,
    BankStatement,
    MobileRecharge,
}

impl SubmittedDocumentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar Card",
            Self::ElectricityBill => "Electricity Bill",
            Self::WaterBill => "Water Bill",
            Self::GasBill => "Gas Bill",
            Self::BankStatement => "Bank Statement",
            Self::MobileRecharge => "Mobile Recharge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentVerification {
    Verified,
    Pending,
    Rejected,
}

/// Document a beneficiary supplied, as reviewed by the verification team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub document_type: SubmittedDocumentType,
    pub upload_date: NaiveDate,
    pub verification_status: DocumentVerification,
    pub file_size: String,
    pub format: String,
    pub extracted_data: String,
}

/// Per-factor risk bands feeding the overall assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_risk: RiskBand,
    pub risk_score: u8,
    pub payment_history_risk: RiskBand,
    pub income_stability_risk: RiskBand,
    pub debt_to_income_risk: RiskBand,
    pub geographic_risk: RiskBand,
    pub behavioral_risk: RiskBand,
    pub default_probability: f64,
    pub expected_loss: u64,
    pub recovery_rate: u8,
}

impl RiskAssessment {
    /// Mitigations that apply to the overall band.
    pub fn mitigations(&self) -> Vec<&'static str> {
        let high = self.overall_risk == RiskBand::High;
        let medium = self.overall_risk == RiskBand::Medium;
        [
            ("Collateral Requirement", high),
            ("Co-signer Requirement", high || medium),
            ("Reduced Loan Amount", medium),
            ("Shorter Tenure", high),
            ("Higher Interest Rate", high || medium),
        ]
        .into_iter()
        .filter_map(|(strategy, applies)| applies.then_some(strategy))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewNote {
    pub text: String,
    pub added_at: DateTime<Utc>,
}
