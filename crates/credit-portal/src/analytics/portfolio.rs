use serde::Serialize;

use crate::workflows::beneficiaries::{Beneficiary, RiskBand};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSlice {
    pub band: RiskBand,
    pub name: String,
    pub percentage: u8,
    pub count: u32,
}

impl RiskSlice {
    fn new(band: RiskBand, percentage: u8, count: u32) -> Self {
        Self {
            band,
            name: format!("{band} Risk"),
            percentage,
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalMonth {
    pub month: &'static str,
    pub approved: u8,
    pub pending: u8,
    pub rejected: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanVolumeMonth {
    pub month: &'static str,
    /// Disbursed volume in crore rupees.
    pub volume: f64,
}

const APPROVAL_METRICS: [ApprovalMonth; 6] = [
    ApprovalMonth { month: "Jan", approved: 85, pending: 12, rejected: 8 },
    ApprovalMonth { month: "Feb", approved: 88, pending: 10, rejected: 7 },
    ApprovalMonth { month: "Mar", approved: 92, pending: 8, rejected: 5 },
    ApprovalMonth { month: "Apr", approved: 89, pending: 11, rejected: 6 },
    ApprovalMonth { month: "May", approved: 94, pending: 6, rejected: 4 },
    ApprovalMonth { month: "Jun", approved: 91, pending: 9, rejected: 5 },
];

const LOAN_VOLUME: [LoanVolumeMonth; 6] = [
    LoanVolumeMonth { month: "Jan", volume: 2.5 },
    LoanVolumeMonth { month: "Feb", volume: 3.2 },
    LoanVolumeMonth { month: "Mar", volume: 4.1 },
    LoanVolumeMonth { month: "Apr", volume: 3.8 },
    LoanVolumeMonth { month: "May", volume: 4.5 },
    LoanVolumeMonth { month: "Jun", volume: 5.2 },
];

/// National portfolio split shown on the dashboard pie chart.
pub fn portfolio_risk_distribution() -> Vec<RiskSlice> {
    vec![
        RiskSlice::new(RiskBand::Low, 45, 1250),
        RiskSlice::new(RiskBand::Medium, 35, 975),
        RiskSlice::new(RiskBand::High, 20, 556),
    ]
}

/// Risk split of the rows currently held by the portal.
pub fn risk_distribution(rows: &[Beneficiary]) -> Vec<RiskSlice> {
    let total = rows.len();
    RiskBand::ordered()
        .into_iter()
        .map(|band| {
            let count = rows.iter().filter(|row| row.risk_band == band).count();
            let percentage = if total == 0 {
                0
            } else {
                (count as f64 / total as f64 * 100.0).round() as u8
            };
            RiskSlice::new(band, percentage, count as u32)
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCharts {
    pub risk_distribution: Vec<RiskSlice>,
    pub approval_metrics: Vec<ApprovalMonth>,
    pub loan_volume: Vec<LoanVolumeMonth>,
    pub live_risk_distribution: Vec<RiskSlice>,
}

pub fn portfolio_charts(rows: &[Beneficiary]) -> PortfolioCharts {
    PortfolioCharts {
        risk_distribution: portfolio_risk_distribution(),
        approval_metrics: APPROVAL_METRICS.to_vec(),
        loan_volume: LOAN_VOLUME.to_vec(),
        live_risk_distribution: risk_distribution(rows),
    }
}
