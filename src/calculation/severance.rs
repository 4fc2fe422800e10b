//! Severance pay calculation.
//!
//! Provides the tenure-and-average-wage severance formula and a rough
//! one-month-per-year estimate for callers that only know gross income.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    SEVERANCE_SAMPLE_MONTHS, SeveranceEstimate, SeveranceInput, SeveranceResult, WageConstants,
};

/// Days per year used by the severance formula. Leap years are not special-cased.
pub const SEVERANCE_DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Computes severance from employment dates and the last three monthly wages.
///
/// - `total_days` counts calendar days from `start_date` to `end_date`,
///   both inclusive.
/// - `average_monthly_wage` is the mean of the three samples.
/// - `severance_pay = average_monthly_wage × total_days / 365`
///
/// # Returns
///
/// Returns `InvalidInput` if `end_date` precedes `start_date`, any wage
/// sample is negative, or the samples are too large for the formula to fit
/// in a `Decimal`.
///
/// # Examples
///
/// ```
/// use eps_salary_engine::calculation::compute_severance;
/// use eps_salary_engine::models::SeveranceInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = SeveranceInput {
///     start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     monthly_wage_samples: [Decimal::from(3_000_000); 3],
/// };
///
/// let result = compute_severance(&input).unwrap();
/// assert_eq!(result.total_days, 366);
/// assert_eq!(result.severance_pay.round_dp(2), Decimal::from_str("3008219.18").unwrap());
/// ```
pub fn compute_severance(input: &SeveranceInput) -> EngineResult<SeveranceResult> {
    if input.end_date < input.start_date {
        return Err(EngineError::invalid_input(
            "end_date",
            format!(
                "end date {} precedes start date {}",
                input.end_date, input.start_date
            ),
        ));
    }

    for (index, sample) in input.monthly_wage_samples.iter().enumerate() {
        if *sample < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                format!("monthly_wage_samples[{}]", index),
                format!("must not be negative, got {}", sample),
            ));
        }
    }

    let too_large = || EngineError::value_too_large("monthly_wage_samples");

    let total_days = (input.end_date - input.start_date).num_days() + 1;
    let sample_total = input
        .monthly_wage_samples
        .iter()
        .try_fold(Decimal::ZERO, |sum, sample| sum.checked_add(*sample))
        .ok_or_else(too_large)?;
    let average_monthly_wage = sample_total / Decimal::from(SEVERANCE_SAMPLE_MONTHS as u64);
    let severance_pay = average_monthly_wage
        .checked_mul(Decimal::from(total_days))
        .ok_or_else(too_large)?
        / SEVERANCE_DAYS_PER_YEAR;

    Ok(SeveranceResult {
        average_monthly_wage,
        total_days,
        severance_pay,
    })
}

/// Minimum tenure, in years, accepted by [`estimate_severance_by_tenure`].
pub const MIN_ESTIMATE_YEARS: Decimal = Decimal::ONE;

/// Estimates severance as one month of gross income per year worked.
///
/// This is the quick estimate offered when employment dates and wage history
/// are not at hand. Severance is only owed after a full year of service, so
/// tenures below [`MIN_ESTIMATE_YEARS`] are rejected rather than estimated
/// pro rata. Use [`compute_severance`] for exact day counts.
///
/// # Returns
///
/// Returns `InvalidInput` if `gross_income` is negative, `years_worked` is
/// below one, or the estimate does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use eps_salary_engine::calculation::estimate_severance_by_tenure;
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
/// let estimate = estimate_severance_by_tenure(
///     Decimal::from(2_700_000),
///     Decimal::from_str("1.5").unwrap(),
///     &constants,
/// )
/// .unwrap();
/// assert_eq!(estimate.estimated_pay, Decimal::from(4_050_000));
/// assert_eq!(estimate.estimated_pay_usd, Decimal::from(3_000));
///
/// let half_year = Decimal::from_str("0.5").unwrap();
/// let too_short = estimate_severance_by_tenure(Decimal::from(2_700_000), half_year, &constants);
/// assert!(too_short.is_err());
/// ```
pub fn estimate_severance_by_tenure(
    gross_income: Decimal,
    years_worked: Decimal,
    constants: &WageConstants,
) -> EngineResult<SeveranceEstimate> {
    if gross_income < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "gross_income",
            format!("must not be negative, got {}", gross_income),
        ));
    }
    if years_worked < MIN_ESTIMATE_YEARS {
        return Err(EngineError::invalid_input(
            "years_worked",
            format!(
                "severance requires at least {} year of service, got {}",
                MIN_ESTIMATE_YEARS, years_worked
            ),
        ));
    }

    let estimated_pay = gross_income
        .checked_mul(years_worked)
        .ok_or_else(|| EngineError::value_too_large("gross_income"))?;
    let estimated_pay_usd = estimated_pay
        .checked_div(constants.exchange_rate_to_usd())
        .ok_or_else(|| EngineError::value_too_large("gross_income"))?;

    Ok(SeveranceEstimate {
        gross_income,
        years_worked,
        estimated_pay,
        estimated_pay_usd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(start: NaiveDate, end: NaiveDate, samples: [&str; 3]) -> SeveranceInput {
        SeveranceInput {
            start_date: start,
            end_date: end,
            monthly_wage_samples: samples.map(dec),
        }
    }

    fn constants() -> WageConstants {
        WageConstants::new(dec("10300"), dec("1350"), dec("3.05")).unwrap()
    }

    #[test]
    fn test_one_calendar_year_with_equal_samples() {
        let result = compute_severance(&input(
            date(2023, 1, 1),
            date(2024, 1, 1),
            ["3000000", "3000000", "3000000"],
        ))
        .unwrap();

        assert_eq!(result.total_days, 366);
        assert_eq!(result.average_monthly_wage, dec("3000000"));
        assert_eq!(result.severance_pay.round_dp(2), dec("3008219.18"));
    }

    #[test]
    fn test_same_start_and_end_counts_one_day() {
        let result = compute_severance(&input(
            date(2025, 3, 10),
            date(2025, 3, 10),
            ["3650000", "3650000", "3650000"],
        ))
        .unwrap();

        assert_eq!(result.total_days, 1);
        assert_eq!(result.severance_pay, dec("10000"));
    }

    #[test]
    fn test_exactly_365_days_pays_average_wage() {
        let result = compute_severance(&input(
            date(2025, 1, 1),
            date(2025, 12, 31),
            ["2000000", "2500000", "3000000"],
        ))
        .unwrap();

        assert_eq!(result.total_days, 365);
        assert_eq!(result.average_monthly_wage, dec("2500000"));
        assert_eq!(result.severance_pay, dec("2500000"));
    }

    #[test]
    fn test_leap_year_is_not_special_cased() {
        // 2024 is a leap year: 366 inclusive days still divide by 365.
        let result = compute_severance(&input(
            date(2024, 1, 1),
            date(2024, 12, 31),
            ["3650000", "3650000", "3650000"],
        ))
        .unwrap();

        assert_eq!(result.total_days, 366);
        assert_eq!(result.severance_pay, dec("3660000"));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let result = compute_severance(&input(
            date(2024, 1, 1),
            date(2023, 12, 31),
            ["3000000", "3000000", "3000000"],
        ));

        match result {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "end_date");
                assert!(message.contains("2023-12-31"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_sample_is_rejected() {
        let result = compute_severance(&input(
            date(2023, 1, 1),
            date(2024, 1, 1),
            ["3000000", "-1", "3000000"],
        ));

        match result {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "monthly_wage_samples[1]")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_tenure_estimate() {
        let estimate = estimate_severance_by_tenure(dec("2456550"), dec("2"), &constants()).unwrap();

        assert_eq!(estimate.estimated_pay, dec("4913100"));
        assert_eq!(estimate.estimated_pay_usd.round_dp(2), dec("3639.33"));
    }

    #[test]
    fn test_tenure_estimate_rejects_negative_years() {
        let result = estimate_severance_by_tenure(dec("2456550"), dec("-0.5"), &constants());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_tenure_estimate_rejects_negative_gross() {
        let result = estimate_severance_by_tenure(dec("-1"), dec("1"), &constants());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_tenure_estimate_rejects_less_than_one_year() {
        let result = estimate_severance_by_tenure(dec("2456550"), dec("0.99"), &constants());

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "years_worked"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_tenure_estimate_accepts_exactly_one_year() {
        let estimate =
            estimate_severance_by_tenure(dec("2700000"), dec("1"), &constants()).unwrap();
        assert_eq!(estimate.estimated_pay, dec("2700000"));
    }

    #[test]
    fn test_huge_samples_are_invalid_input() {
        let result = compute_severance(&input(
            date(2023, 1, 1),
            date(2024, 1, 1),
            [
                "500000000000000000000000000",
                "500000000000000000000000000",
                "500000000000000000000000000",
            ],
        ));

        match result {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "monthly_wage_samples");
                assert_eq!(message, "value too large");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_samples_whose_sum_overflows_are_invalid_input() {
        let max = Decimal::MAX.to_string();
        let result = compute_severance(&input(
            date(2023, 1, 1),
            date(2023, 1, 1),
            [max.as_str(), max.as_str(), "0"],
        ));

        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_huge_tenure_estimate_is_invalid_input() {
        let result = estimate_severance_by_tenure(Decimal::MAX, dec("2"), &constants());

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "gross_income"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
