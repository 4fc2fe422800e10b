//! Wage constants used by every calculation.
//!
//! [`WageConstants`] can only be built through [`WageConstants::new`], which
//! is also used when deserializing, so a zero or negative rate never reaches
//! the calculation functions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The hourly minimum wage and the two exchange rates for one calculation.
///
/// # Example
///
/// ```
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
/// assert_eq!(constants.min_wage_hourly(), Decimal::from(10300));
///
/// assert!(WageConstants::new(Decimal::from(10300), Decimal::ZERO, Decimal::ONE).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WageConstantsFields")]
pub struct WageConstants {
    min_wage_hourly: Decimal,
    exchange_rate_to_usd: Decimal,
    exchange_rate_to_khr: Decimal,
}

/// Unvalidated wire form of [`WageConstants`].
#[derive(Debug, Deserialize)]
struct WageConstantsFields {
    min_wage_hourly: Decimal,
    exchange_rate_to_usd: Decimal,
    exchange_rate_to_khr: Decimal,
}

impl TryFrom<WageConstantsFields> for WageConstants {
    type Error = EngineError;

    fn try_from(fields: WageConstantsFields) -> EngineResult<Self> {
        Self::new(
            fields.min_wage_hourly,
            fields.exchange_rate_to_usd,
            fields.exchange_rate_to_khr,
        )
    }
}

impl WageConstants {
    /// Creates a validated set of wage constants.
    ///
    /// # Arguments
    ///
    /// * `min_wage_hourly` - Hourly minimum wage in KRW
    /// * `exchange_rate_to_usd` - KRW per one USD
    /// * `exchange_rate_to_khr` - KHR per one KRW
    ///
    /// # Returns
    ///
    /// Returns `ConfigurationError` naming the first field that is zero or
    /// negative.
    pub fn new(
        min_wage_hourly: Decimal,
        exchange_rate_to_usd: Decimal,
        exchange_rate_to_khr: Decimal,
    ) -> EngineResult<Self> {
        ensure_positive("min_wage_hourly", min_wage_hourly)?;
        ensure_positive("exchange_rate_to_usd", exchange_rate_to_usd)?;
        ensure_positive("exchange_rate_to_khr", exchange_rate_to_khr)?;

        Ok(Self {
            min_wage_hourly,
            exchange_rate_to_usd,
            exchange_rate_to_khr,
        })
    }

    /// Hourly minimum wage in KRW.
    pub fn min_wage_hourly(&self) -> Decimal {
        self.min_wage_hourly
    }

    /// KRW per one USD.
    pub fn exchange_rate_to_usd(&self) -> Decimal {
        self.exchange_rate_to_usd
    }

    /// KHR per one KRW.
    pub fn exchange_rate_to_khr(&self) -> Decimal {
        self.exchange_rate_to_khr
    }
}

fn ensure_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::configuration(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_new_accepts_positive_values() {
        let constants = WageConstants::new(dec("10300"), dec("1350"), dec("3.05")).unwrap();

        assert_eq!(constants.min_wage_hourly(), dec("10300"));
        assert_eq!(constants.exchange_rate_to_usd(), dec("1350"));
        assert_eq!(constants.exchange_rate_to_khr(), dec("3.05"));
    }

    #[test]
    fn test_zero_usd_rate_is_configuration_error() {
        let result = WageConstants::new(dec("10300"), Decimal::ZERO, dec("3.05"));

        match result {
            Err(EngineError::ConfigurationError { field, .. }) => {
                assert_eq!(field, "exchange_rate_to_usd");
            }
            other => panic!("Expected ConfigurationError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_min_wage_is_configuration_error() {
        let result = WageConstants::new(dec("-1"), dec("1350"), dec("3.05"));

        match result {
            Err(EngineError::ConfigurationError { field, message }) => {
                assert_eq!(field, "min_wage_hourly");
                assert!(message.contains("-1"));
            }
            other => panic!("Expected ConfigurationError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_khr_rate_is_configuration_error() {
        let result = WageConstants::new(dec("10300"), dec("1350"), dec("0"));
        assert!(matches!(
            result,
            Err(EngineError::ConfigurationError { ref field, .. }) if field == "exchange_rate_to_khr"
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"min_wage_hourly": "10300", "exchange_rate_to_usd": "0", "exchange_rate_to_khr": "3.05"}"#;
        let result: Result<WageConstants, _> = serde_json::from_str(json);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("exchange_rate_to_usd"), "unexpected error: {}", err);
    }

    #[test]
    fn test_serialize_uses_field_names() {
        let constants = WageConstants::new(dec("10300"), dec("1350"), dec("3.05")).unwrap();
        let value = serde_json::to_value(constants).unwrap();

        assert_eq!(value["min_wage_hourly"], "10300");
        assert_eq!(value["exchange_rate_to_khr"], "3.05");
    }
}
