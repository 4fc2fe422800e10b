//! Static label tables for the two supported locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A display locale, identified by its two-letter code.
///
/// ```
/// use eps_salary_engine::display::Locale;
///
/// let locale: Locale = "km".parse().unwrap();
/// assert_eq!(locale, Locale::Km);
/// assert!("fr".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Khmer.
    Km,
}

impl Locale {
    /// The two-letter locale code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Km => "km",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "km" => Ok(Locale::Km),
            _ => Err(EngineError::UnsupportedLocale {
                code: s.to_string(),
            }),
        }
    }
}

/// Keys of the label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Page title.
    Title,
    /// Headline card for take-home pay.
    NetSalary,
    /// Base pay row.
    BasePay,
    /// Overtime row.
    OvertimePay,
    /// Night surcharge row.
    NightAllowance,
    /// Holiday work row.
    HolidayPay,
    /// Gross income row.
    GrossIncome,
    /// Flat-rate insurance deduction row.
    InsuranceDeduction,
    /// National pension row.
    Pension,
    /// Health insurance row.
    HealthInsurance,
    /// Long-term care insurance row.
    LongTermCare,
    /// Employment insurance row.
    EmploymentInsurance,
    /// Net income row.
    NetIncome,
    /// Severance pay heading.
    SeverancePay,
    /// Inclusive days of employment.
    DaysWorked,
    /// Mean of the recent monthly wages.
    AverageMonthlyWage,
    /// Years of employment.
    YearsWorked,
    /// Currency conversion heading.
    CurrencyConversion,
    /// US dollar row.
    UsDollar,
    /// Cambodian riel row.
    CambodianRiel,
    /// Footer disclaimer.
    Disclaimer,
}

/// Looks up the text for a label in the given locale.
///
/// ```
/// use eps_salary_engine::display::{Label, Locale, label};
///
/// assert_eq!(label(Locale::En, Label::GrossIncome), "Gross Income");
/// assert_eq!(label(Locale::Km, Label::GrossIncome), "ចំណូលសរុប");
/// ```
pub fn label(locale: Locale, key: Label) -> &'static str {
    match locale {
        Locale::En => english(key),
        Locale::Km => khmer(key),
    }
}

fn english(key: Label) -> &'static str {
    match key {
        Label::Title => "EPS Salary Calculator",
        Label::NetSalary => "Net Salary",
        Label::BasePay => "Base Salary",
        Label::OvertimePay => "Overtime (OT)",
        Label::NightAllowance => "Night Shift Allowance",
        Label::HolidayPay => "Holiday Work",
        Label::GrossIncome => "Gross Income",
        Label::InsuranceDeduction => "Insurance Deduction",
        Label::Pension => "National Pension",
        Label::HealthInsurance => "Health Insurance",
        Label::LongTermCare => "Long-Term Care Insurance",
        Label::EmploymentInsurance => "Employment Insurance",
        Label::NetIncome => "Net Income",
        Label::SeverancePay => "Severance Pay",
        Label::DaysWorked => "Days Worked",
        Label::AverageMonthlyWage => "Average Monthly Wage",
        Label::YearsWorked => "Years Worked",
        Label::CurrencyConversion => "Currency Conversion",
        Label::UsDollar => "US Dollar",
        Label::CambodianRiel => "Cambodian Riel",
        Label::Disclaimer => {
            "This is an estimate. Actual tax and insurance deductions may differ slightly \
             depending on Korean labour law."
        }
    }
}

fn khmer(key: Label) -> &'static str {
    match key {
        Label::Title => "កម្មវិធីគណនាប្រាក់ខែពលករកូរ៉េ",
        Label::NetSalary => "ប្រាក់ទទួលបានជាក់ស្តែង",
        Label::BasePay => "ប្រាក់គោល",
        Label::OvertimePay => "ប្រាក់ថែមម៉ោង",
        Label::NightAllowance => "ប្រាក់បន្ថែមម៉ោងយប់",
        Label::HolidayPay => "ប្រាក់ធ្វើការថ្ងៃបុណ្យ",
        Label::GrossIncome => "ចំណូលសរុប",
        Label::InsuranceDeduction => "ដកធានារ៉ាប់រង",
        Label::Pension => "ប្រាក់សោធននិវត្តន៍ជាតិ",
        Label::HealthInsurance => "ធានារ៉ាប់រងសុខភាព",
        Label::LongTermCare => "ធានារ៉ាប់រងថែទាំរយៈពេលវែង",
        Label::EmploymentInsurance => "ធានារ៉ាប់រងការងារ",
        Label::NetIncome => "ប្រាក់សុទ្ធ",
        Label::SeverancePay => "ប្រាក់បំណាច់ឆ្នាំ",
        Label::DaysWorked => "ចំនួនថ្ងៃធ្វើការ",
        Label::AverageMonthlyWage => "ប្រាក់ខែមធ្យម",
        Label::YearsWorked => "ចំនួនឆ្នាំធ្វើការ",
        Label::CurrencyConversion => "ការប្តូររូបិយប័ណ្ណ",
        Label::UsDollar => "ដុល្លារអាមេរិក",
        Label::CambodianRiel => "ប្រាក់រៀល",
        Label::Disclaimer => {
            "ការគណនានេះគ្រាន់តែជាការប៉ាន់ស្មាន។ ការកាត់ពន្ធនិងធានារ៉ាប់រងជាក់ស្តែងអាចខុសគ្នាតិចតួច\
             អាស្រ័យលើច្បាប់ការងារកូរ៉េជាក់ស្តែង។"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LABELS: [Label; 21] = [
        Label::Title,
        Label::NetSalary,
        Label::BasePay,
        Label::OvertimePay,
        Label::NightAllowance,
        Label::HolidayPay,
        Label::GrossIncome,
        Label::InsuranceDeduction,
        Label::Pension,
        Label::HealthInsurance,
        Label::LongTermCare,
        Label::EmploymentInsurance,
        Label::NetIncome,
        Label::SeverancePay,
        Label::DaysWorked,
        Label::AverageMonthlyWage,
        Label::YearsWorked,
        Label::CurrencyConversion,
        Label::UsDollar,
        Label::CambodianRiel,
        Label::Disclaimer,
    ];

    #[test]
    fn test_every_label_has_text_in_both_locales() {
        for key in ALL_LABELS {
            assert!(!label(Locale::En, key).is_empty(), "{:?} missing in en", key);
            assert!(!label(Locale::Km, key).is_empty(), "{:?} missing in km", key);
            assert_ne!(label(Locale::En, key), label(Locale::Km, key));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("Km".parse::<Locale>().unwrap(), Locale::Km);
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        match "ko".parse::<Locale>() {
            Err(EngineError::UnsupportedLocale { code }) => assert_eq!(code, "ko"),
            other => panic!("Expected UnsupportedLocale, got {:?}", other),
        }
    }

    #[test]
    fn test_locale_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Km).unwrap(), "\"km\"");
        assert_eq!(Locale::En.to_string(), "en");
    }
}
