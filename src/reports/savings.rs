//! Savings Report
//!
//! Month-by-month savings trend with the goals it is feeding.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use super::{csv_amount, Report};
use crate::display::{heading, progress_bar, DisplayOptions};
use crate::error::BoardResult;
use crate::models::MonthlySummary;
use crate::services::{
    goal_progress, rounded_percent, summarize_savings, GoalProgress, SavingsSummary,
};
use crate::storage::FixtureStore;

#[derive(Debug, Clone, Serialize)]
pub struct SavingsReport {
    pub summary: SavingsSummary,
    pub months: Vec<MonthlySummary>,
    pub goals: Vec<GoalProgress>,
}

impl SavingsReport {
    pub fn generate(store: &FixtureStore, today: NaiveDate) -> Self {
        let summary = summarize_savings(store.monthly_overview());
        debug!(months = store.monthly_overview().len(), "generated savings report");

        Self {
            summary,
            months: store.monthly_overview().to_vec(),
            goals: store
                .savings_goals()
                .iter()
                .map(|g| goal_progress(g, today))
                .collect(),
        }
    }
}

fn month_rate(month: &MonthlySummary) -> i64 {
    rounded_percent(month.savings, month.income)
}

impl Report for SavingsReport {
    fn format_terminal(&self, options: &DisplayOptions) -> String {
        let sym = options.currency_symbol.as_str();
        let mut output = heading("Savings", 60);

        output.push_str(&format!(
            "Total Savings: {}   Average Savings Rate: {}%\n",
            self.summary.total_savings.format_with_symbol(sym),
            self.summary.average_savings_rate
        ));
        output.push_str(&format!(
            "Projected Annual Savings: {}\n",
            self.summary.projected_annual_savings.format_with_symbol(sym)
        ));
        if let Some(best) = &self.summary.best_month {
            output.push_str(&format!("Best Month: {}\n", best));
        }
        output.push('\n');

        output.push_str(&format!(
            "{:<6} {:>12} {:>12} {:>12} {:>6}\n",
            "Month", "Income", "Expenses", "Savings", "Rate"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for month in &self.months {
            output.push_str(&format!(
                "{:<6} {:>12} {:>12} {:>12} {:>5}%\n",
                month.month,
                month.income.format_with_symbol(sym),
                month.expenses.format_with_symbol(sym),
                month.savings.format_with_symbol(sym),
                month_rate(month)
            ));
        }

        if !self.goals.is_empty() {
            output.push_str("\nGoals\n");
            for goal in &self.goals {
                output.push_str(&format!(
                    "  {:<16} {} {:>3.0}%  {} months left\n",
                    goal.name,
                    progress_bar(goal.progress_percent),
                    goal.progress_percent,
                    goal.months_left
                ));
            }
        }

        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> BoardResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Month", "Income", "Expenses", "Savings", "Savings Rate"])?;

        for month in &self.months {
            wtr.write_record([
                month.month.clone(),
                csv_amount(month.income),
                csv_amount(month.expenses),
                csv_amount(month.savings),
                month_rate(month).to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
