//! Request types for the salary engine API.
//!
//! This module defines the JSON request structures for each endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::display::Locale;
use crate::models::{DeductionModel, HoursInput, SEVERANCE_SAMPLE_MONTHS, SeveranceInput};

/// Request body for the `/salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Worked time for the period.
    pub hours: HoursInput,
    /// Overrides the configured deduction model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduction_model: Option<DeductionModel>,
    /// Date whose wage constants apply; defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    /// Locale of the display labels; defaults to English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

/// Request body for the `/severance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceRequest {
    /// First day of employment.
    pub start_date: NaiveDate,
    /// Last day of employment.
    pub end_date: NaiveDate,
    /// Gross wages of the last three months.
    pub monthly_wage_samples: [Decimal; SEVERANCE_SAMPLE_MONTHS],
    /// Locale of the display labels; defaults to English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

/// Request body for the `/severance/estimate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceEstimateRequest {
    /// Monthly gross income in KRW.
    pub gross_income: Decimal,
    /// Years of employment.
    pub years_worked: Decimal,
    /// Date whose exchange rate applies; defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    /// Locale of the display labels; defaults to English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

/// Request body for the `/exchange` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRequest {
    /// Amount to convert, in KRW.
    pub amount_krw: Decimal,
    /// Date whose exchange rates apply; defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    /// Locale of the display labels; defaults to English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

impl From<&SeveranceRequest> for SeveranceInput {
    fn from(req: &SeveranceRequest) -> Self {
        SeveranceInput {
            start_date: req.start_date,
            end_date: req.end_date,
            monthly_wage_samples: req.monthly_wage_samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_salary_request() {
        let json = r#"{ "hours": { "standard_hours": 209 } }"#;

        let request: SalaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.hours.standard_hours, Decimal::from(209));
        assert!(request.deduction_model.is_none());
        assert!(request.effective_date.is_none());
        assert!(request.locale.is_none());
    }

    #[test]
    fn test_deserialize_full_salary_request() {
        let json = r#"{
            "hours": {
                "standard_hours": "209",
                "overtime_hours": "10",
                "night_hours": "5",
                "holiday_days": 1
            },
            "deduction_model": { "model": "flat_rate", "insurance_rate": "0.10" },
            "effective_date": "2026-03-01",
            "locale": "km"
        }"#;

        let request: SalaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.hours.holiday_days, 1);
        assert_eq!(request.locale, Some(Locale::Km));
        assert_eq!(
            request.deduction_model,
            Some(DeductionModel::FlatRate {
                insurance_rate: Decimal::new(10, 2)
            })
        );
    }

    #[test]
    fn test_severance_request_requires_three_samples() {
        let json = r#"{
            "start_date": "2023-01-01",
            "end_date": "2024-01-01",
            "monthly_wage_samples": ["3000000", "3000000"]
        }"#;

        let result: Result<SeveranceRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_severance_request_conversion() {
        let json = r#"{
            "start_date": "2023-01-01",
            "end_date": "2024-01-01",
            "monthly_wage_samples": ["3000000", "3100000", "3200000"]
        }"#;

        let request: SeveranceRequest = serde_json::from_str(json).unwrap();
        let input: SeveranceInput = (&request).into();
        assert!(request.locale.is_none());
        assert_eq!(input.monthly_wage_samples[2], Decimal::from(3_200_000));
    }

    #[test]
    fn test_exchange_request_accepts_locale() {
        let json = r#"{ "amount_krw": "1000000", "locale": "km" }"#;

        let request: ExchangeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.locale, Some(Locale::Km));
    }
}
