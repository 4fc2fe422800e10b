//! KRW to USD/KHR conversion.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{ExchangeResult, WageConstants};

/// Converts a KRW amount to USD and KHR.
///
/// The two conversions are independent; the USD and KHR rates are not
/// cross-checked against each other.
///
/// # Returns
///
/// Returns `InvalidInput` if `amount_krw` is negative or a converted amount
/// does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use eps_salary_engine::calculation::compute_exchange;
/// use eps_salary_engine::models::WageConstants;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = WageConstants::new(
///     Decimal::from(10300),
///     Decimal::from(1350),
///     Decimal::from_str("3.05").unwrap(),
/// )
/// .unwrap();
///
/// let result = compute_exchange(Decimal::from(1_000_000), &constants).unwrap();
/// assert_eq!(result.khr, Decimal::from(3_050_000));
/// assert_eq!(result.usd.round_dp(2), Decimal::from_str("740.74").unwrap());
/// ```
pub fn compute_exchange(
    amount_krw: Decimal,
    constants: &WageConstants,
) -> EngineResult<ExchangeResult> {
    if amount_krw < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "amount_krw",
            format!("must not be negative, got {}", amount_krw),
        ));
    }

    let usd = amount_krw
        .checked_div(constants.exchange_rate_to_usd())
        .ok_or_else(|| EngineError::value_too_large("amount_krw"))?;
    let khr = amount_krw
        .checked_mul(constants.exchange_rate_to_khr())
        .ok_or_else(|| EngineError::value_too_large("amount_krw"))?;

    Ok(ExchangeResult {
        amount_krw,
        usd,
        khr,
    })
}
