//! Reports module for budgetboard
//!
//! One report per dashboard page. Each report is generated from the fixture
//! store, renders itself for the terminal, exports CSV and serializes to
//! JSON or YAML.

pub mod budget;
pub mod dashboard;
pub mod goals;
pub mod savings;
pub mod transactions;

pub use budget::BudgetReport;
pub use dashboard::DashboardReport;
pub use goals::GoalsReport;
pub use savings::SavingsReport;
pub use transactions::TransactionReport;

use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::display::DisplayOptions;
use crate::error::BoardResult;
use crate::models::Money;

/// Common output surface of every report
pub trait Report: Serialize {
    /// Format the report for terminal display
    fn format_terminal(&self, options: &DisplayOptions) -> String;

    /// Export the report to CSV format
    fn export_csv<W: Write>(&self, writer: &mut W) -> BoardResult<()>;
}

/// Write a report to `writer` in the requested format
pub fn render<R: Report, W: Write>(
    report: &R,
    format: OutputFormat,
    options: &DisplayOptions,
    writer: &mut W,
) -> BoardResult<()> {
    match format {
        OutputFormat::Table => write!(writer, "{}", report.format_terminal(options))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *writer, report)?,
        OutputFormat::Csv => report.export_csv(writer)?,
    }
    Ok(())
}

/// Amount as a plain decimal for CSV cells
pub(crate) fn csv_amount(amount: Money) -> String {
    format!("{:.2}", amount.as_f64())
}
