//! Display boundary for engine results.
//!
//! Turns engine values into formatted, localized strings. The calculation
//! module never depends on anything here; locale only affects labels, never
//! amounts.

mod format;
mod labels;
mod render;

pub use format::{format_khr, format_krw, format_usd};
pub use labels::{Label, Locale, label};
pub use render::{
    DisplayCard, DisplayReport, DisplayRow, render_breakdown, render_exchange, render_severance,
    render_severance_estimate,
};
