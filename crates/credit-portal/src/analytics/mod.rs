//! Chart data for the admin dashboard and the beneficiary detail page.

pub mod payments;
pub mod portfolio;
pub mod router;
pub mod scoring;

pub use payments::{
    payment_behaviour, sanitize, MonthlyPayment, PaymentBehaviour, PaymentStats,
    RawPaymentRecord, TimeRange,
};
pub use portfolio::{portfolio_charts, risk_distribution, PortfolioCharts, RiskSlice};
pub use router::analytics_router;
pub use scoring::{breakdown, score_percentage, score_tier, ScoreBreakdown, ScoreFactors, ScoreTier};
