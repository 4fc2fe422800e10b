//! Payroll result models for the salary engine.
//!
//! This module contains the [`PayrollResult`] type and its audit structures,
//! which capture every output of one salary calculation together with a
//! step-by-step record of how it was reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Deductions, HoursInput, NetResult, PayBreakdown, WageConstants};

/// A single step in the audit trace recording a calculation stage.
///
/// Each step captures the input, output, and reasoning for one formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// Machine-readable identifier of the stage (e.g. "gross_breakdown").
    pub rule_id: String,
    /// The human-readable name of the stage.
    pub rule_name: String,
    /// The formula that was applied.
    pub formula: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that were accepted but look inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use eps_salary_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of one salary calculation.
///
/// Holds the inputs the calculation ran with, the gross breakdown, the
/// deductions under the selected model, the net result and an audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The hours the calculation ran with.
    pub hours: HoursInput,
    /// The wage constants the calculation ran with.
    pub constants: WageConstants,
    /// Gross pay by component.
    pub breakdown: PayBreakdown,
    /// Deductions under the selected model.
    pub deductions: Deductions,
    /// Net pay in KRW and USD.
    pub net: NetResult,
    /// Complete audit trace of calculation stages.
    pub audit_trace: AuditTrace,
}
