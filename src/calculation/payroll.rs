//! Full salary calculation with audit trace.
//!
//! Runs the gross, deduction and net stages in order and records one
//! [`AuditStep`] per stage so a result can be explained line by line.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DeductionModel, Deductions, HoursInput, PayBreakdown,
    PayrollResult, WageConstants,
};

use super::{compute_deductions, compute_gross_breakdown, compute_net};

/// Warning code raised when night hours exceed the hours paid at base or overtime rate.
pub const NIGHT_HOURS_WARNING: &str = "NIGHT_HOURS_EXCEED_PAID_HOURS";

/// Calculates gross pay, deductions and net pay for one period.
///
/// Hours and the deduction model are validated first; on failure nothing is
/// computed.
///
/// # Returns
///
/// Returns `InvalidInput` for negative hours or hours so large that an
/// amount does not fit in a `Decimal`, and `ConfigurationError` for a flat
/// rate outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use eps_salary_engine::calculation::calculate_payroll;
/// use eps_salary_engine::models::{DeductionModel, HoursInput, WageConstants};
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
///     ..Default::default()
/// };
///
/// let result = calculate_payroll(&hours, &constants, &DeductionModel::Itemized).unwrap();
/// assert_eq!(result.breakdown.gross_income, Decimal::from(2_152_700));
/// assert_eq!(result.audit_trace.steps.len(), 3);
/// ```
pub fn calculate_payroll(
    hours: &HoursInput,
    constants: &WageConstants,
    model: &DeductionModel,
) -> EngineResult<PayrollResult> {
    let start_time = Instant::now();

    hours.validate()?;
    model.validate()?;

    let mut warnings = Vec::new();
    if hours.night_hours > hours.paid_hours() {
        warnings.push(AuditWarning {
            code: NIGHT_HOURS_WARNING.to_string(),
            message: format!(
                "Night hours ({}) exceed standard plus overtime hours ({}); the night allowance \
                 is a surcharge and does not pay the base rate for those hours",
                hours.night_hours,
                hours.paid_hours()
            ),
            severity: "medium".to_string(),
        });
    }

    let breakdown = compute_gross_breakdown(hours, constants)?;
    debug!(gross_income = %breakdown.gross_income, "Computed gross breakdown");

    let deductions = compute_deductions(breakdown.gross_income, model)?;
    debug!(
        model = model.name(),
        total = %deductions.total(),
        "Computed deductions"
    );

    let net = compute_net(breakdown.gross_income, &deductions, constants)?;
    debug!(net_income = %net.net_income, "Computed net income");

    let steps = vec![
        gross_step(1, hours, constants, &breakdown),
        deduction_step(2, breakdown.gross_income, &deductions),
        AuditStep {
            step_number: 3,
            rule_id: "net_income".to_string(),
            rule_name: "Net Income".to_string(),
            formula: "gross_income − deductions; net_income ÷ exchange_rate_to_usd".to_string(),
            input: serde_json::json!({
                "gross_income": breakdown.gross_income.to_string(),
                "deductions_total": deductions.total().to_string(),
                "exchange_rate_to_usd": constants.exchange_rate_to_usd().to_string()
            }),
            output: serde_json::json!({
                "net_income": net.net_income.to_string(),
                "net_income_usd": net.net_income_usd.to_string()
            }),
            reasoning: format!(
                "₩{} − ₩{} = ₩{} (≈ ${})",
                breakdown.gross_income.normalize(),
                deductions.total().normalize(),
                net.net_income.normalize(),
                net.net_income_usd.round_dp(2)
            ),
        },
    ];

    Ok(PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        hours: hours.clone(),
        constants: *constants,
        breakdown,
        deductions,
        net,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX),
        },
    })
}

fn gross_step(
    step_number: u32,
    hours: &HoursInput,
    constants: &WageConstants,
    breakdown: &PayBreakdown,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "gross_breakdown".to_string(),
        rule_name: "Gross Pay Breakdown".to_string(),
        formula: "standard × wage + overtime × wage × 1.5 + night × wage × 0.5 \
                  + holiday_days × 8 × wage × 1.5"
            .to_string(),
        input: serde_json::json!({
            "standard_hours": hours.standard_hours.to_string(),
            "overtime_hours": hours.overtime_hours.to_string(),
            "night_hours": hours.night_hours.to_string(),
            "holiday_days": hours.holiday_days,
            "min_wage_hourly": constants.min_wage_hourly().to_string()
        }),
        output: serde_json::json!({
            "base_pay": breakdown.base_pay.to_string(),
            "overtime_pay": breakdown.overtime_pay.to_string(),
            "night_allowance": breakdown.night_allowance.to_string(),
            "holiday_pay": breakdown.holiday_pay.to_string(),
            "gross_income": breakdown.gross_income.to_string()
        }),
        reasoning: format!(
            "₩{} + ₩{} + ₩{} + ₩{} = ₩{}",
            breakdown.base_pay.normalize(),
            breakdown.overtime_pay.normalize(),
            breakdown.night_allowance.normalize(),
            breakdown.holiday_pay.normalize(),
            breakdown.gross_income.normalize()
        ),
    }
}

fn deduction_step(step_number: u32, gross_income: Decimal, deductions: &Deductions) -> AuditStep {
    let (formula, output, reasoning) = match deductions {
        Deductions::Itemized {
            pension,
            health,
            long_term_care,
            employment_insurance,
            total,
        } => (
            "gross × 0.045 + gross × 0.03545 + health × 0.1295 + gross × 0.009",
            serde_json::json!({
                "pension": pension.to_string(),
                "health": health.to_string(),
                "long_term_care": long_term_care.to_string(),
                "employment_insurance": employment_insurance.to_string(),
                "total": total.to_string()
            }),
            format!(
                "Pension ₩{} + health ₩{} + long-term care ₩{} + employment ₩{} = ₩{}",
                pension.normalize(),
                health.normalize(),
                long_term_care.normalize(),
                employment_insurance.normalize(),
                total.normalize()
            ),
        ),
        Deductions::FlatRate {
            insurance_rate,
            total,
        } => (
            "gross × insurance_rate",
            serde_json::json!({
                "insurance_rate": insurance_rate.to_string(),
                "total": total.to_string()
            }),
            format!(
                "₩{} × {} = ₩{}",
                gross_income.normalize(),
                insurance_rate.normalize(),
                total.normalize()
            ),
        ),
    };

    AuditStep {
        step_number,
        rule_id: "deductions".to_string(),
        rule_name: "Statutory Deductions".to_string(),
        formula: formula.to_string(),
        input: serde_json::json!({ "gross_income": gross_income.to_string() }),
        output,
        reasoning,
    }
}
