//! Display formatting for terminal output
//!
//! Shared helpers used by the reports: text progress bars, truncation and
//! the transaction table.

pub mod transaction;

pub use transaction::format_transaction_table;

use crate::config::Settings;

/// Currency and date presentation shared by every report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl DisplayOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Width of a full progress bar in characters
pub const BAR_WIDTH: usize = 20;

/// Render a percentage (clamped to 0..=100) as a fixed-width bar
pub fn progress_bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Truncate a string to a maximum number of characters, padding short ones
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Section heading with an underline
pub fn heading(title: &str, width: usize) -> String {
    format!("{}\n{}\n", title, "=".repeat(width))
}
