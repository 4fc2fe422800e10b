//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::WageConstants;

/// Shared application state.
///
/// Holds the loaded configuration read-only; every request resolves its own
/// copy of the wage constants from it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calculator configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Resolves wage constants for a date, defaulting to today (UTC).
    pub fn wage_constants(&self, date: Option<NaiveDate>) -> EngineResult<WageConstants> {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        self.config.wage_constants(date)
    }
}
