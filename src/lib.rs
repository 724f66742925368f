//! Life Quote - term life rate estimator for a questionnaire funnel
//!
//! This library provides:
//! - Quiz answer model and per-step validation
//! - Age-bucketed carrier base rates and the risk multiplier
//! - Ranked carrier quotes and DIME coverage recommendation
//! - Lead relay to a spreadsheet webhook and SMS alerts
//! - Text rendering of results

pub mod quiz;
pub mod rates;
pub mod estimate;
pub mod relay;
pub mod report;

// Re-export commonly used types
pub use quiz::{AnswerSet, Gender, MaritalStatus, TermLength};
pub use rates::{Carrier, CarrierRates, RateTable};
pub use estimate::{EstimationEngine, Estimate, Quote};
pub use relay::{RelayConfig, SubmissionRelay};
