//! Deduction model selection and deduction records.
//!
//! Two methodologies are supported side by side: the itemized four-insurance
//! model and a single flat insurance rate applied to gross income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Selects how deductions are computed from gross income.
///
/// # Example
///
/// ```
/// use eps_salary_engine::models::DeductionModel;
///
/// let model: DeductionModel =
///     serde_json::from_str(r#"{"model": "flat_rate", "insurance_rate": "0.10"}"#).unwrap();
/// assert!(model.validate().is_ok());
/// assert_eq!(model.name(), "flat_rate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum DeductionModel {
    /// National pension, health, long-term care and employment insurance.
    #[default]
    Itemized,
    /// One rate applied directly to gross income, no line items.
    FlatRate {
        /// Fraction of gross income withheld (e.g. 0.10).
        insurance_rate: Decimal,
    },
}

impl DeductionModel {
    /// Checks that a flat rate lies within `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        if let DeductionModel::FlatRate { insurance_rate } = self {
            if *insurance_rate < Decimal::ZERO || *insurance_rate > Decimal::ONE {
                return Err(EngineError::configuration(
                    "insurance_rate",
                    format!("must be between 0 and 1, got {}", insurance_rate),
                ));
            }
        }
        Ok(())
    }

    /// The snake_case name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            DeductionModel::Itemized => "itemized",
            DeductionModel::FlatRate { .. } => "flat_rate",
        }
    }
}

/// Deductions withheld from gross income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Deductions {
    /// Four named insurance contributions.
    Itemized {
        /// National pension contribution.
        pension: Decimal,
        /// National health insurance contribution.
        health: Decimal,
        /// Long-term care insurance, computed from `health`.
        long_term_care: Decimal,
        /// Employment insurance contribution.
        employment_insurance: Decimal,
        /// Sum of the four contributions.
        total: Decimal,
    },
    /// A single flat withholding.
    FlatRate {
        /// The rate that was applied.
        insurance_rate: Decimal,
        /// Gross income multiplied by the rate.
        total: Decimal,
    },
}

impl Deductions {
    /// Total amount withheld.
    pub fn total(&self) -> Decimal {
        match self {
            Deductions::Itemized { total, .. } | Deductions::FlatRate { total, .. } => *total,
        }
    }
}
