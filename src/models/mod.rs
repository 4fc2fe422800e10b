//! Core data models for the salary engine.
//!
//! This module contains all the value types passed into and returned from
//! the calculation functions.

mod calculation_result;
mod deduction;
mod hours;
mod pay;
mod severance;
mod wage_constants;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, PayrollResult};
pub use deduction::{DeductionModel, Deductions};
pub use hours::HoursInput;
pub use pay::{ExchangeResult, NetResult, PayBreakdown};
pub use severance::{
    SEVERANCE_SAMPLE_MONTHS, SeveranceEstimate, SeveranceInput, SeveranceResult,
};
pub use wage_constants::WageConstants;
