pub mod beneficiaries;
pub mod borrower;
pub mod shared;
