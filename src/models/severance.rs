//! Severance input and result records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of monthly wage samples averaged for severance.
pub const SEVERANCE_SAMPLE_MONTHS: usize = 3;

/// Employment dates and the last three monthly wages.
///
/// # Example
///
/// ```
/// use eps_salary_engine::models::SeveranceInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SeveranceInput {
///     start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     monthly_wage_samples: [Decimal::from(3_000_000); 3],
/// };
/// assert_eq!(input.monthly_wage_samples.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceInput {
    /// First day of employment.
    pub start_date: NaiveDate,
    /// Last day of employment; must not precede `start_date`.
    pub end_date: NaiveDate,
    /// Gross wages of the last three months.
    pub monthly_wage_samples: [Decimal; SEVERANCE_SAMPLE_MONTHS],
}

/// Severance computed from tenure and average recent wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// Mean of the three wage samples.
    pub average_monthly_wage: Decimal,
    /// Calendar days from start to end date, both inclusive.
    pub total_days: i64,
    /// `average_monthly_wage * total_days / 365`.
    pub severance_pay: Decimal,
}

/// Rough severance estimate of one month's gross pay per year worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceEstimate {
    /// Monthly gross income the estimate is based on.
    pub gross_income: Decimal,
    /// Years of employment.
    pub years_worked: Decimal,
    /// `gross_income * years_worked`, in KRW.
    pub estimated_pay: Decimal,
    /// `estimated_pay` converted to USD.
    pub estimated_pay_usd: Decimal,
}
