//! Configuration loading and management for the salary engine.
//!
//! This module loads the calculator configuration from YAML files: the
//! default deduction model and effective-dated wage constants, so a yearly
//! minimum-wage change is a new rate file rather than a code change.
//!
//! # Example
//!
//! ```no_run
//! use eps_salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/eps2026").unwrap();
//! println!("Loaded calculator: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, CalculatorFile, CalculatorMetadata, RateConfig};
