//! Calculation logic for the salary engine.
//!
//! This module contains the pure calculation functions: gross pay breakdown,
//! statutory deductions under either deduction model, net pay, currency
//! conversion, severance pay, and the orchestrated payroll calculation that
//! ties the salary stages together with an audit trace.
//!
//! None of these functions hold state or perform I/O. Wage constants are
//! always passed in explicitly.

mod deductions;
mod exchange;
mod gross_pay;
mod net_pay;
mod payroll;
mod severance;

pub use deductions::{
    EMPLOYMENT_INSURANCE_RATE, HEALTH_RATE, LONG_TERM_CARE_RATE, PENSION_RATE, compute_deductions,
};
pub use exchange::compute_exchange;
pub use gross_pay::{
    HOLIDAY_HOURS_PER_DAY, HOLIDAY_MULTIPLIER, NIGHT_SURCHARGE, OVERTIME_MULTIPLIER,
    compute_gross_breakdown,
};
pub use net_pay::compute_net;
pub use payroll::{NIGHT_HOURS_WARNING, calculate_payroll};
pub use severance::{
    MIN_ESTIMATE_YEARS, SEVERANCE_DAYS_PER_YEAR, compute_severance, estimate_severance_by_tenure,
};
