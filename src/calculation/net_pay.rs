//! Net pay calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Deductions, NetResult, WageConstants};

/// Subtracts deductions from gross income and converts the result to USD.
///
/// Full precision is kept; rounding is a display concern. The USD rate is
/// guaranteed positive by [`WageConstants::new`].
///
/// # Returns
///
/// Returns `InvalidInput` on `gross_income` if the difference or the USD
/// conversion does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use eps_salary_engine::calculation::compute_net;
/// use eps_salary_engine::models::{Deductions, WageConstants};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = WageConstants::new(
///     Decimal::from(10300),
///     Decimal::from(1350),
///     Decimal::from_str("3.05").unwrap(),
/// )
/// .unwrap();
/// let deductions = Deductions::FlatRate {
///     insurance_rate: Decimal::from_str("0.10").unwrap(),
///     total: Decimal::from(245_655),
/// };
///
/// let net = compute_net(Decimal::from(2_456_550), &deductions, &constants).unwrap();
/// assert_eq!(net.net_income, Decimal::from(2_210_895));
/// assert_eq!(net.net_income_usd, Decimal::from_str("1637.70").unwrap());
/// ```
pub fn compute_net(
    gross_income: Decimal,
    deductions: &Deductions,
    constants: &WageConstants,
) -> EngineResult<NetResult> {
    let net_income = gross_income
        .checked_sub(deductions.total())
        .ok_or_else(|| EngineError::value_too_large("gross_income"))?;
    let net_income_usd = net_income
        .checked_div(constants.exchange_rate_to_usd())
        .ok_or_else(|| EngineError::value_too_large("gross_income"))?;

    Ok(NetResult {
        net_income,
        net_income_usd,
    })
}
