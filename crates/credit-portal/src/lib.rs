//! Core of the CreditLend portal: the borrower application wizard, the admin
//! beneficiary directory, partner login sessions and the site routing shell.
//!
//! Every entity lives in memory. Scores and decisions are sample values and
//! "network" latency is simulated with timers.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod error;
pub mod site;
pub mod telemetry;
pub mod workflows;
