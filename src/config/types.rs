//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::{DeductionModel, WageConstants};

/// Metadata about the calculator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorMetadata {
    /// Human-readable name of the configuration.
    pub name: String,
    /// Version label, usually the wage year (e.g. "2026").
    pub version: String,
    /// Currency that wages are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "KRW".to_string()
}

/// Structure of `calculator.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorFile {
    /// Configuration metadata.
    #[serde(flatten)]
    pub metadata: CalculatorMetadata,
    /// Deduction model used when a request does not override it.
    #[serde(default)]
    pub deduction_model: DeductionModel,
}

/// Wage constants effective from a given date, as stored in `rates/*.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// The first date these constants apply to.
    pub effective_date: NaiveDate,
    /// Hourly minimum wage in KRW.
    pub min_wage_hourly: Decimal,
    /// KRW per one USD.
    pub exchange_rate_to_usd: Decimal,
    /// KHR per one KRW.
    pub exchange_rate_to_khr: Decimal,
}

impl RateConfig {
    /// Validates the stored values into [`WageConstants`].
    pub fn wage_constants(&self) -> EngineResult<WageConstants> {
        WageConstants::new(
            self.min_wage_hourly,
            self.exchange_rate_to_usd,
            self.exchange_rate_to_khr,
        )
    }
}

/// The complete calculator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Configuration metadata.
    metadata: CalculatorMetadata,
    /// Default deduction model.
    deduction_model: DeductionModel,
    /// Rate configurations by effective date (sorted oldest first).
    rates: Vec<RateConfig>,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(
        metadata: CalculatorMetadata,
        deduction_model: DeductionModel,
        rates: Vec<RateConfig>,
    ) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            deduction_model,
            rates: sorted_rates,
        }
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.metadata
    }

    /// Returns the default deduction model.
    pub fn deduction_model(&self) -> &DeductionModel {
        &self.deduction_model
    }

    /// Returns all rate configurations, oldest first.
    pub fn rates(&self) -> &[RateConfig] {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(date: &str, wage: i64) -> RateConfig {
        RateConfig {
            effective_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            min_wage_hourly: Decimal::from(wage),
            exchange_rate_to_usd: Decimal::from(1350),
            exchange_rate_to_khr: Decimal::new(305, 2),
        }
    }

    #[test]
    fn test_rates_are_sorted_oldest_first() {
        let config = CalculatorConfig::new(
            CalculatorMetadata {
                name: "test".to_string(),
                version: "2026".to_string(),
                currency: "KRW".to_string(),
            },
            DeductionModel::Itemized,
            vec![rate("2026-01-01", 10300), rate("2025-01-01", 10030)],
        );

        let dates: Vec<String> = config
            .rates()
            .iter()
            .map(|r| r.effective_date.to_string())
            .collect();
        assert_eq!(dates, vec!["2025-01-01", "2026-01-01"]);
    }

    #[test]
    fn test_calculator_file_defaults() {
        let file: CalculatorFile =
            serde_yaml::from_str("name: EPS\nversion: \"2026\"\n").unwrap();

        assert_eq!(file.metadata.currency, "KRW");
        assert_eq!(file.deduction_model, DeductionModel::Itemized);
    }

    #[test]
    fn test_calculator_file_flat_rate() {
        let yaml = "name: EPS\nversion: \"2026\"\ndeduction_model:\n  model: flat_rate\n  insurance_rate: 0.10\n";
        let file: CalculatorFile = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            file.deduction_model,
            DeductionModel::FlatRate {
                insurance_rate: Decimal::new(10, 2)
            }
        );
    }

    #[test]
    fn test_rate_config_rejects_zero_exchange_rate() {
        let mut bad = rate("2026-01-01", 10300);
        bad.exchange_rate_to_usd = Decimal::ZERO;

        assert!(bad.wage_constants().is_err());
    }
}
