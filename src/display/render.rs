//! Renders engine results as a headline card and a breakdown table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Deductions, ExchangeResult, PayrollResult, SeveranceEstimate, SeveranceResult,
};

use super::format::{format_khr, format_krw, format_usd};
use super::labels::{Label, Locale, label};

/// One row of the breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Localized description.
    pub label: String,
    /// Formatted value; KRW deductions are shown negative.
    pub amount: String,
    /// Whether the row is a subtotal or total.
    pub emphasis: bool,
}

/// The headline shown above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCard {
    /// Localized card title.
    pub label: String,
    /// Headline amount in KRW.
    pub value: String,
    /// The same amount in USD, when a rate was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

/// Everything the presentation layer needs to show one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayReport {
    /// Locale the labels are in.
    pub locale: Locale,
    /// Localized page title.
    pub title: String,
    /// Headline amount.
    pub headline: DisplayCard,
    /// Breakdown table, top to bottom.
    pub rows: Vec<DisplayRow>,
    /// Localized disclaimer.
    pub disclaimer: String,
}

/// Builds the display report for a payroll result.
///
/// The table lists the four pay components, gross income, each deduction as
/// a negative amount (a single insurance row in the flat-rate model) and net
/// income.
pub fn render_breakdown(result: &PayrollResult, locale: Locale) -> DisplayReport {
    let b = &result.breakdown;
    let row = |key: Label, amount: Decimal, emphasis: bool| DisplayRow {
        label: label(locale, key).to_string(),
        amount: format_krw(amount),
        emphasis,
    };

    let mut rows = vec![
        row(Label::BasePay, b.base_pay, false),
        row(Label::OvertimePay, b.overtime_pay, false),
        row(Label::NightAllowance, b.night_allowance, false),
        row(Label::HolidayPay, b.holiday_pay, false),
        row(Label::GrossIncome, b.gross_income, true),
    ];

    match &result.deductions {
        Deductions::Itemized {
            pension,
            health,
            long_term_care,
            employment_insurance,
            ..
        } => {
            rows.push(row(Label::Pension, -*pension, false));
            rows.push(row(Label::HealthInsurance, -*health, false));
            rows.push(row(Label::LongTermCare, -*long_term_care, false));
            rows.push(row(Label::EmploymentInsurance, -*employment_insurance, false));
        }
        Deductions::FlatRate {
            insurance_rate,
            total,
        } => {
            let mut flat = row(Label::InsuranceDeduction, -*total, false);
            flat.label = format!(
                "{} (~{}%)",
                flat.label,
                (*insurance_rate * Decimal::ONE_HUNDRED).normalize()
            );
            rows.push(flat);
        }
    }

    rows.push(row(Label::NetIncome, result.net.net_income, true));

    DisplayReport {
        locale,
        title: label(locale, Label::Title).to_string(),
        headline: DisplayCard {
            label: label(locale, Label::NetSalary).to_string(),
            value: format_krw(result.net.net_income),
            secondary: Some(format_usd(result.net.net_income_usd)),
        },
        rows,
        disclaimer: label(locale, Label::Disclaimer).to_string(),
    }
}

/// Builds the display report for a severance result.
///
/// No exchange rate is involved, so the headline carries KRW only.
pub fn render_severance(result: &SeveranceResult, locale: Locale) -> DisplayReport {
    let rows = vec![
        text_row(locale, Label::DaysWorked, result.total_days.to_string()),
        text_row(locale, Label::AverageMonthlyWage, format_krw(result.average_monthly_wage)),
        emphasized(text_row(locale, Label::SeverancePay, format_krw(result.severance_pay))),
    ];

    report(
        locale,
        DisplayCard {
            label: label(locale, Label::SeverancePay).to_string(),
            value: format_krw(result.severance_pay),
            secondary: None,
        },
        rows,
    )
}

/// Builds the display report for a tenure-based severance estimate.
pub fn render_severance_estimate(estimate: &SeveranceEstimate, locale: Locale) -> DisplayReport {
    let rows = vec![
        text_row(locale, Label::GrossIncome, format_krw(estimate.gross_income)),
        text_row(locale, Label::YearsWorked, estimate.years_worked.normalize().to_string()),
        emphasized(text_row(locale, Label::SeverancePay, format_krw(estimate.estimated_pay))),
    ];

    report(
        locale,
        DisplayCard {
            label: label(locale, Label::SeverancePay).to_string(),
            value: format_krw(estimate.estimated_pay),
            secondary: Some(format_usd(estimate.estimated_pay_usd)),
        },
        rows,
    )
}

/// Builds the display report for a KRW conversion.
pub fn render_exchange(result: &ExchangeResult, locale: Locale) -> DisplayReport {
    let rows = vec![
        text_row(locale, Label::UsDollar, format_usd(result.usd)),
        text_row(locale, Label::CambodianRiel, format_khr(result.khr)),
    ];

    report(
        locale,
        DisplayCard {
            label: label(locale, Label::CurrencyConversion).to_string(),
            value: format_krw(result.amount_krw),
            secondary: None,
        },
        rows,
    )
}

fn text_row(locale: Locale, key: Label, amount: String) -> DisplayRow {
    DisplayRow {
        label: label(locale, key).to_string(),
        amount,
        emphasis: false,
    }
}

fn emphasized(row: DisplayRow) -> DisplayRow {
    DisplayRow {
        emphasis: true,
        ..row
    }
}

fn report(locale: Locale, headline: DisplayCard, rows: Vec<DisplayRow>) -> DisplayReport {
    DisplayReport {
        locale,
        title: label(locale, Label::Title).to_string(),
        headline,
        rows,
        disclaimer: label(locale, Label::Disclaimer).to_string(),
    }
}
