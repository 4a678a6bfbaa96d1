use serde::Serialize;

use super::domain::{Beneficiary, BeneficiaryStatus, RiskBand};

/// Headline cards above the beneficiary table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_beneficiaries: usize,
    pub approval_rate: u8,
    pub average_credit_score: u16,
    pub low_risk_percentage: u8,
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u8
}

impl DashboardMetrics {
    pub fn from_rows(rows: &[Beneficiary]) -> Self {
        let total = rows.len();
        if total == 0 {
            return Self::default();
        }

        let approved = rows
            .iter()
            .filter(|row| row.status == BeneficiaryStatus::Approved)
            .count();
        let low_risk = rows
            .iter()
            .filter(|row| row.risk_band == RiskBand::Low)
            .count();
        let score_sum: u64 = rows.iter().map(|row| u64::from(row.credit_score)).sum();

        Self {
            total_beneficiaries: total,
            approval_rate: percent(approved, total),
            average_credit_score: (score_sum as f64 / total as f64).round() as u16,
            low_risk_percentage: percent(low_risk, total),
        }
    }
}
