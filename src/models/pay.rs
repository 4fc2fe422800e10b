//! Pay breakdown, net result and currency conversion records.
//!
//! These are the outputs of the calculation functions. Amounts keep full
//! `Decimal` precision; rounding happens only in the display module.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gross pay split into its four components.
///
/// `gross_income` is always the exact sum of the other four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Standard hours at the minimum wage.
    pub base_pay: Decimal,
    /// Overtime hours at 150%.
    pub overtime_pay: Decimal,
    /// The 50% surcharge on night hours.
    pub night_allowance: Decimal,
    /// Eight hours per holiday day at 150%.
    pub holiday_pay: Decimal,
    /// Sum of the four components.
    pub gross_income: Decimal,
}

/// Net pay after deductions, in KRW and USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetResult {
    /// Gross income minus total deductions, in KRW.
    pub net_income: Decimal,
    /// `net_income` converted at the configured USD rate.
    pub net_income_usd: Decimal,
}

/// A KRW amount converted to USD and KHR.
///
/// # Example
///
/// ```
/// use eps_salary_engine::models::ExchangeResult;
/// use rust_decimal::Decimal;
///
/// let result = ExchangeResult {
///     amount_krw: Decimal::from(1_000_000),
///     usd: Decimal::new(74074, 2),
///     khr: Decimal::from(3_050_000),
/// };
/// assert_eq!(result.khr, Decimal::from(3_050_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeResult {
    /// The source amount in KRW.
    pub amount_krw: Decimal,
    /// The amount in USD.
    pub usd: Decimal,
    /// The amount in KHR.
    pub khr: Decimal,
}
