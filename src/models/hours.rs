//! Worked-time input for one pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hours and holiday days worked during one pay period.
///
/// `night_hours` are hours that already appear in `standard_hours` or
/// `overtime_hours`; they only attract the night surcharge.
///
/// # Example
///
/// ```
/// use eps_salary_engine::models::HoursInput;
/// use rust_decimal::Decimal;
///
/// let hours = HoursInput {
///     standard_hours: Decimal::from(209),
///     overtime_hours: Decimal::from(10),
///     night_hours: Decimal::from(5),
///     holiday_days: 1,
/// };
/// assert!(hours.validate().is_ok());
/// assert_eq!(hours.paid_hours(), Decimal::from(219));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoursInput {
    /// Regular hours in the period (typically 209 per month).
    pub standard_hours: Decimal,
    /// Hours worked beyond the standard hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Hours worked between 22:00 and 06:00.
    #[serde(default)]
    pub night_hours: Decimal,
    /// Public holidays on which the worker worked.
    #[serde(default)]
    pub holiday_days: u32,
}

impl HoursInput {
    /// Rejects negative hour counts.
    ///
    /// `holiday_days` is unsigned, so only the three hour fields need checking.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("standard_hours", self.standard_hours),
            ("overtime_hours", self.overtime_hours),
            ("night_hours", self.night_hours),
        ] {
            if value < Decimal::ZERO {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must not be negative, got {}", value),
                ));
            }
        }
        Ok(())
    }

    /// Hours paid at base or overtime rate, saturating at `Decimal::MAX`.
    pub fn paid_hours(&self) -> Decimal {
        self.standard_hours.saturating_add(self.overtime_hours)
    }
}
