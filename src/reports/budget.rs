//! Budget Report
//!
//! Every budget category with budgeted, spent and remaining amounts, plus
//! totals across the whole budget.

use serde::Serialize;
use std::io::Write;
use tracing::debug;

use super::{csv_amount, Report};
use crate::display::{heading, progress_bar, DisplayOptions};
use crate::error::BoardResult;
use crate::services::{category_progress, summarize_budget, BudgetSummary, CategoryProgress};
use crate::storage::FixtureStore;

#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    pub summary: BudgetSummary,
    pub categories: Vec<CategoryProgress>,
}

impl BudgetReport {
    /// Generate a budget report; `over_only` keeps only over-budget categories
    pub fn generate(store: &FixtureStore, over_only: bool) -> Self {
        let summary = summarize_budget(store.budget_categories());
        let categories: Vec<CategoryProgress> = store
            .budget_categories()
            .iter()
            .map(category_progress)
            .filter(|p| !over_only || p.is_over_budget)
            .collect();

        debug!(
            categories = categories.len(),
            over_budget = summary.over_budget_count,
            "generated budget report"
        );

        Self {
            summary,
            categories,
        }
    }

    pub fn over_budget_categories(&self) -> Vec<&CategoryProgress> {
        self.categories.iter().filter(|c| c.is_over_budget).collect()
    }
}

impl Report for BudgetReport {
    fn format_terminal(&self, options: &DisplayOptions) -> String {
        let sym = options.currency_symbol.as_str();
        let mut output = heading("Budget Overview", 80);

        output.push_str(&format!(
            "Total Budget: {}   Spent: {}   Remaining: {}   Used: {}%\n\n",
            self.summary.total_budgeted.format_with_symbol(sym),
            self.summary.total_spent.format_with_symbol(sym),
            self.summary.remaining.format_with_symbol(sym),
            self.summary.percent_used
        ));

        output.push_str(&format!(
            "{:<18} {:>12} {:>12} {:>12} {:>6}  {}\n",
            "Category", "Budgeted", "Spent", "Remaining", "Used", "Progress"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No categories to show.\n");
        }

        for category in &self.categories {
            let marker = if category.is_over_budget { " *" } else { "" };
            output.push_str(&format!(
                "{:<18} {:>12} {:>12} {:>12} {:>5}%  {}{}\n",
                category.name,
                category.budgeted.format_with_symbol(sym),
                category.spent.format_with_symbol(sym),
                category.remaining.format_with_symbol(sym),
                category.percent_used,
                progress_bar(category.bar_percent as f64),
                marker
            ));
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str("* = Over budget\n");

        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> BoardResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            "Category",
            "Budgeted",
            "Spent",
            "Remaining",
            "Percent Used",
            "Over Budget",
        ])?;

        for category in &self.categories {
            wtr.write_record([
                category.name.clone(),
                csv_amount(category.budgeted),
                csv_amount(category.spent),
                csv_amount(category.remaining),
                category.percent_used.to_string(),
                category.is_over_budget.to_string(),
            ])?;
        }

        wtr.write_record([
            "TOTAL".to_string(),
            csv_amount(self.summary.total_budgeted),
            csv_amount(self.summary.total_spent),
            csv_amount(self.summary.remaining),
            self.summary.percent_used.to_string(),
            (self.summary.total_spent > self.summary.total_budgeted).to_string(),
        ])?;

        wtr.flush()?;
        Ok(())
    }
}
