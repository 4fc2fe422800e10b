//! Gross pay breakdown.
//!
//! Splits a period's worked time into base pay, overtime pay, the night
//! surcharge and holiday pay, all priced off the hourly minimum wage.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{HoursInput, PayBreakdown, WageConstants};

/// Overtime is paid at 150% of the hourly wage.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Night hours attract a 50% surcharge on top of their base pay.
pub const NIGHT_SURCHARGE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Holiday work is paid at 150% of the hourly wage.
pub const HOLIDAY_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Paid hours credited for each holiday day worked.
pub const HOLIDAY_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Computes the gross pay breakdown for one pay period.
///
/// - `base_pay = standard_hours × wage`
/// - `overtime_pay = overtime_hours × wage × 1.5`
/// - `night_allowance = night_hours × wage × 0.5`
/// - `holiday_pay = holiday_days × 8 × wage × 1.5`
///
/// The night allowance is the surcharge only. Night hours must already be
/// counted in `standard_hours` or `overtime_hours`; they are not paid again
/// here. Callers who pass night hours that were not counted there will
/// under-pay those hours.
///
/// No rounding is applied, so `gross_income` is the exact sum of the four
/// components. Inputs are expected to have passed [`HoursInput::validate`].
///
/// # Returns
///
/// Returns `InvalidInput` naming the offending hours field if a component
/// or the total does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use eps_salary_engine::calculation::compute_gross_breakdown;
/// use eps_salary_engine::models::{HoursInput, WageConstants};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = WageConstants::new(
///     Decimal::from(10300),
///     Decimal::from(1350),
///     Decimal::from_str("3.05").unwrap(),
/// )
/// .unwrap();
/// let hours = HoursInput {
///     standard_hours: Decimal::from(209),
///     overtime_hours: Decimal::from(10),
///     night_hours: Decimal::from(5),
///     holiday_days: 1,
/// };
///
/// let breakdown = compute_gross_breakdown(&hours, &constants).unwrap();
/// assert_eq!(breakdown.gross_income, Decimal::from(2_456_550));
/// ```
pub fn compute_gross_breakdown(
    hours: &HoursInput,
    constants: &WageConstants,
) -> EngineResult<PayBreakdown> {
    let wage = constants.min_wage_hourly();

    let base_pay = hours
        .standard_hours
        .checked_mul(wage)
        .ok_or_else(|| EngineError::value_too_large("standard_hours"))?;
    let overtime_pay = hours
        .overtime_hours
        .checked_mul(wage)
        .and_then(|pay| pay.checked_mul(OVERTIME_MULTIPLIER))
        .ok_or_else(|| EngineError::value_too_large("overtime_hours"))?;
    let night_allowance = hours
        .night_hours
        .checked_mul(wage)
        .and_then(|pay| pay.checked_mul(NIGHT_SURCHARGE))
        .ok_or_else(|| EngineError::value_too_large("night_hours"))?;
    let holiday_pay = (Decimal::from(hours.holiday_days) * HOLIDAY_HOURS_PER_DAY)
        .checked_mul(wage)
        .and_then(|pay| pay.checked_mul(HOLIDAY_MULTIPLIER))
        .ok_or_else(|| EngineError::value_too_large("holiday_days"))?;

    let gross_income = base_pay
        .checked_add(overtime_pay)
        .and_then(|sum| sum.checked_add(night_allowance))
        .and_then(|sum| sum.checked_add(holiday_pay))
        .ok_or_else(|| EngineError::value_too_large("hours"))?;

    Ok(PayBreakdown {
        base_pay,
        overtime_pay,
        night_allowance,
        holiday_pay,
        gross_income,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn constants() -> WageConstants {
        WageConstants::new(dec("10300"), dec("1350"), dec("3.05")).unwrap()
    }

    fn hours(standard: &str, overtime: &str, night: &str, holiday_days: u32) -> HoursInput {
        HoursInput {
            standard_hours: dec(standard),
            overtime_hours: dec(overtime),
            night_hours: dec(night),
            holiday_days,
        }
    }

    #[test]
    fn test_multiplier_constants() {
        assert_eq!(OVERTIME_MULTIPLIER, dec("1.5"));
        assert_eq!(NIGHT_SURCHARGE, dec("0.5"));
        assert_eq!(HOLIDAY_MULTIPLIER, dec("1.5"));
        assert_eq!(HOLIDAY_HOURS_PER_DAY, dec("8"));
    }

    #[test]
    fn test_reference_month_breakdown() {
        let breakdown = compute_gross_breakdown(&hours("209", "10", "5", 1), &constants()).unwrap();

        assert_eq!(breakdown.base_pay, dec("2152700"));
        assert_eq!(breakdown.overtime_pay, dec("154500"));
        assert_eq!(breakdown.night_allowance, dec("25750"));
        assert_eq!(breakdown.holiday_pay, dec("123600"));
        assert_eq!(breakdown.gross_income, dec("2456550"));
    }

    #[test]
    fn test_standard_hours_only() {
        let breakdown = compute_gross_breakdown(&hours("209", "0", "0", 0), &constants()).unwrap();

        assert_eq!(breakdown.base_pay, dec("2152700"));
        assert_eq!(breakdown.overtime_pay, Decimal::ZERO);
        assert_eq!(breakdown.night_allowance, Decimal::ZERO);
        assert_eq!(breakdown.holiday_pay, Decimal::ZERO);
        assert_eq!(breakdown.gross_income, dec("2152700"));
    }

    #[test]
    fn test_zero_hours_gives_zero_gross() {
        let breakdown = compute_gross_breakdown(&HoursInput::default(), &constants()).unwrap();
        assert_eq!(breakdown.gross_income, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_overtime_hours() {
        // 2.5h × 10300 × 1.5 = 38625
        let breakdown = compute_gross_breakdown(&hours("0", "2.5", "0", 0), &constants()).unwrap();
        assert_eq!(breakdown.overtime_pay, dec("38625"));
    }

    #[test]
    fn test_night_allowance_is_surcharge_only() {
        // Night hours alone add only half the wage per hour.
        let breakdown = compute_gross_breakdown(&hours("0", "0", "8", 0), &constants()).unwrap();

        assert_eq!(breakdown.night_allowance, dec("41200"));
        assert_eq!(breakdown.base_pay, Decimal::ZERO);
        assert_eq!(breakdown.gross_income, dec("41200"));
    }

    #[test]
    fn test_holiday_days_use_eight_hours() {
        // 3 days × 8h × 10300 × 1.5 = 370800
        let breakdown = compute_gross_breakdown(&hours("0", "0", "0", 3), &constants()).unwrap();
        assert_eq!(breakdown.holiday_pay, dec("370800"));
    }

    #[test]
    fn test_other_minimum_wage() {
        let constants = WageConstants::new(dec("10030"), dec("1350"), dec("3.05")).unwrap();
        let breakdown = compute_gross_breakdown(&hours("209", "0", "0", 0), &constants).unwrap();

        assert_eq!(breakdown.base_pay, dec("2096270"));
    }

    #[test]
    fn test_huge_standard_hours_is_invalid_input() {
        let result = compute_gross_breakdown(
            &hours("10000000000000000000000000", "0", "0", 0),
            &constants(),
        );

        match result {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "standard_hours");
                assert_eq!(message, "value too large");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_components_that_overflow_only_when_summed() {
        // Each component fits on its own, their sum does not.
        let max_hours = (Decimal::MAX / dec("10300")).trunc();
        let hours = HoursInput {
            standard_hours: max_hours,
            overtime_hours: max_hours / dec("2"),
            ..Default::default()
        };

        match compute_gross_breakdown(&hours, &constants()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "hours"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
