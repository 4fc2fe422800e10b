//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{DeductionModel, WageConstants};

use super::types::{CalculatorConfig, CalculatorFile, CalculatorMetadata, RateConfig};

/// Loads and provides access to calculator configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and resolves the wage constants effective on a given date.
///
/// # Directory Structure
///
/// ```text
/// config/eps2026/
/// ├── calculator.yaml      # Name, version, default deduction model
/// └── rates/
///     └── 2026-01-01.yaml  # Minimum wage and exchange rates from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use eps_salary_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/eps2026")?;
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let constants = loader.wage_constants(date)?;
/// println!("Minimum wage: ₩{}", constants.min_wage_hourly());
/// # Ok::<(), eps_salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The deduction model or any rate file holds out-of-range values
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calculator_path = path.join("calculator.yaml");
        let calculator = Self::load_yaml::<CalculatorFile>(&calculator_path)?;
        calculator.deduction_model.validate()?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        info!(
            name = %calculator.metadata.name,
            version = %calculator.metadata.version,
            deduction_model = calculator.deduction_model.name(),
            rate_files = rates.len(),
            "Loaded calculator configuration"
        );

        let config = CalculatorConfig::new(calculator.metadata, calculator.deduction_model, rates);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let rate_config = Self::load_yaml::<RateConfig>(&path)?;
                rate_config.wage_constants()?;
                rates.push(rate_config);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        self.config.metadata()
    }

    /// Returns the default deduction model.
    pub fn deduction_model(&self) -> &DeductionModel {
        self.config.deduction_model()
    }

    /// Gets the wage constants effective on a given date.
    ///
    /// The most recent rate file whose `effective_date` is on or before
    /// `date` wins.
    ///
    /// # Returns
    ///
    /// Returns `RateNotFound` if every rate file starts after `date`.
    pub fn wage_constants(&self, date: NaiveDate) -> EngineResult<WageConstants> {
        self.config
            .rates()
            .iter()
            .rfind(|rc| rc.effective_date <= date)
            .ok_or(EngineError::RateNotFound { date })?
            .wage_constants()
    }
}
