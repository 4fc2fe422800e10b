//! Statutory deduction calculation.
//!
//! Supports the itemized four-insurance model and the single flat-rate
//! model. The model is chosen by [`DeductionModel`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DeductionModel, Deductions};

/// National pension: 4.5% of gross income.
pub const PENSION_RATE: Decimal = Decimal::from_parts(45, 0, 0, false, 3);

/// National health insurance: 3.545% of gross income.
pub const HEALTH_RATE: Decimal = Decimal::from_parts(3545, 0, 0, false, 5);

/// Long-term care insurance: 12.95% of the health contribution.
pub const LONG_TERM_CARE_RATE: Decimal = Decimal::from_parts(1295, 0, 0, false, 4);

/// Employment insurance: 0.9% of gross income.
pub const EMPLOYMENT_INSURANCE_RATE: Decimal = Decimal::from_parts(9, 0, 0, false, 3);

/// Computes deductions from gross income under the given model.
///
/// In the itemized model the long-term care contribution is derived from
/// the health contribution, not from gross income, so the two-stage
/// derivation is visible in the result.
///
/// # Returns
///
/// Returns `InvalidInput` on `gross_income` if a product does not fit in a
/// `Decimal`. With a validated model every rate is at most one, so this
/// only happens for an unvalidated flat rate.
///
/// # Examples
///
/// ```
/// use eps_salary_engine::calculation::compute_deductions;
/// use eps_salary_engine::models::DeductionModel;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let flat = DeductionModel::FlatRate {
///     insurance_rate: Decimal::from_str("0.10").unwrap(),
/// };
/// let deductions = compute_deductions(Decimal::from(2_456_550), &flat).unwrap();
/// assert_eq!(deductions.total(), Decimal::from(245_655));
/// ```
pub fn compute_deductions(
    gross_income: Decimal,
    model: &DeductionModel,
) -> EngineResult<Deductions> {
    let apply = |base: Decimal, rate: Decimal| {
        base.checked_mul(rate)
            .ok_or_else(|| EngineError::value_too_large("gross_income"))
    };

    match model {
        DeductionModel::Itemized => {
            let pension = apply(gross_income, PENSION_RATE)?;
            let health = apply(gross_income, HEALTH_RATE)?;
            let long_term_care = apply(health, LONG_TERM_CARE_RATE)?;
            let employment_insurance = apply(gross_income, EMPLOYMENT_INSURANCE_RATE)?;
            let total = pension
                .checked_add(health)
                .and_then(|sum| sum.checked_add(long_term_care))
                .and_then(|sum| sum.checked_add(employment_insurance))
                .ok_or_else(|| EngineError::value_too_large("gross_income"))?;

            Ok(Deductions::Itemized {
                pension,
                health,
                long_term_care,
                employment_insurance,
                total,
            })
        }
        DeductionModel::FlatRate { insurance_rate } => Ok(Deductions::FlatRate {
            insurance_rate: *insurance_rate,
            total: apply(gross_income, *insurance_rate)?,
        }),
    }
}
