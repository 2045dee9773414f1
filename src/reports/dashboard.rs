//! Dashboard Report
//!
//! The landing view: overview cards, recent transactions, budget progress,
//! expense breakdown, monthly trend and goal progress in one report.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use super::{csv_amount, Report};
use crate::display::{format_transaction_table, heading, progress_bar, DisplayOptions};
use crate::error::BoardResult;
use crate::models::{MonthlySummary, Transaction};
use crate::services::{
    calculate_totals, category_progress, expense_breakdown, goal_progress, recent_transactions,
    summarize_budget, BudgetSummary, CategoryProgress, ExpenseShare, GoalProgress, Totals,
};
use crate::storage::FixtureStore;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub as_of: NaiveDate,
    pub totals: Totals,
    pub recent: Vec<Transaction>,
    pub budget: BudgetSummary,
    pub categories: Vec<CategoryProgress>,
    pub expense_breakdown: Vec<ExpenseShare>,
    pub monthly_trend: Vec<MonthlySummary>,
    pub goals: Vec<GoalProgress>,
}

impl DashboardReport {
    /// Generate the dashboard, showing at most `recent_limit` recent transactions
    pub fn generate(store: &FixtureStore, today: NaiveDate, recent_limit: usize) -> Self {
        let report = Self {
            as_of: today,
            totals: calculate_totals(store.transactions()),
            recent: recent_transactions(store.transactions(), recent_limit),
            budget: summarize_budget(store.budget_categories()),
            categories: store
                .budget_categories()
                .iter()
                .map(category_progress)
                .collect(),
            expense_breakdown: expense_breakdown(store.budget_categories()),
            monthly_trend: store.monthly_overview().to_vec(),
            goals: store
                .savings_goals()
                .iter()
                .map(|g| goal_progress(g, today))
                .collect(),
        };

        debug!(
            recent = report.recent.len(),
            savings_rate = report.totals.savings_rate,
            "generated dashboard report"
        );

        report
    }
}

impl Report for DashboardReport {
    fn format_terminal(&self, options: &DisplayOptions) -> String {
        let sym = options.currency_symbol.as_str();
        let mut output = heading(
            &format!("Dashboard - {}", self.as_of.format(&options.date_format)),
            80,
        );

        output.push_str(&format!(
            "Income: {}   Expenses: {}   Savings: {}   Savings Rate: {}%\n",
            self.totals.income.format_with_symbol(sym),
            self.totals.expenses.format_with_symbol(sym),
            self.totals.savings.format_with_symbol(sym),
            self.totals.savings_rate
        ));

        output.push_str("\nRecent Transactions\n");
        output.push_str(&format_transaction_table(&self.recent, sym, &options.date_format));

        output.push_str(&format!(
            "\nBudget Progress ({}% of {} used)\n",
            self.budget.percent_used,
            self.budget.total_budgeted.format_with_symbol(sym)
        ));
        for category in &self.categories {
            output.push_str(&format!(
                "  {:<16} {} {:>10} / {:<10}{}\n",
                category.name,
                progress_bar(category.bar_percent as f64),
                category.spent.format_with_symbol(sym),
                category.budgeted.format_with_symbol(sym),
                if category.is_over_budget { " over" } else { "" }
            ));
        }

        output.push_str("\nExpense Breakdown\n");
        for share in &self.expense_breakdown {
            output.push_str(&format!(
                "  {:<16} {:>10} ({}%)\n",
                share.name,
                share.spent.format_with_symbol(sym),
                share.share_percent
            ));
        }

        output.push_str("\nMonthly Trend\n");
        for month in &self.monthly_trend {
            output.push_str(&format!(
                "  {:<5} income {:>10}  expenses {:>10}\n",
                month.month,
                month.income.format_with_symbol(sym),
                month.expenses.format_with_symbol(sym)
            ));
        }

        output.push_str("\nSavings Goals\n");
        for goal in &self.goals {
            output.push_str(&format!(
                "  {:<16} {} {:>3.0}%  {} days left  [{}]\n",
                goal.name,
                progress_bar(goal.progress_percent),
                goal.progress_percent,
                goal.days_left,
                goal.status
            ));
        }

        output
    }

    /// Flat `Section,Item,Value` rows covering every panel
    fn export_csv<W: Write>(&self, writer: &mut W) -> BoardResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Section", "Item", "Value"])?;

        let overview = [
            ("Income", csv_amount(self.totals.income)),
            ("Expenses", csv_amount(self.totals.expenses)),
            ("Savings", csv_amount(self.totals.savings)),
            ("Savings Rate", self.totals.savings_rate.to_string()),
        ];
        for (item, value) in overview {
            wtr.write_record(["Overview", item, value.as_str()])?;
        }

        for txn in &self.recent {
            wtr.write_record([
                "Recent".to_string(),
                txn.description.clone(),
                csv_amount(txn.signed_amount()),
            ])?;
        }

        for category in &self.categories {
            wtr.write_record([
                "Budget".to_string(),
                category.name.clone(),
                category.percent_used.to_string(),
            ])?;
        }

        for share in &self.expense_breakdown {
            wtr.write_record([
                "Expense Share".to_string(),
                share.name.clone(),
                share.share_percent.to_string(),
            ])?;
        }

        for goal in &self.goals {
            wtr.write_record([
                "Goal".to_string(),
                goal.name.clone(),
                format!("{:.1}", goal.progress_percent),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_generate() {
        let store = FixtureStore::seeded(today(), 5).unwrap();
        let report = DashboardReport::generate(&store, today(), 5);

        assert_eq!(report.totals.income, Money::from_dollars(3000));
        assert_eq!(report.recent.len(), 5);
        assert!(report.recent.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(report.categories.len(), 6);
        assert_eq!(report.expense_breakdown[0].name, "Housing");
        assert_eq!(report.monthly_trend.len(), 6);
        assert_eq!(report.goals.len(), 3);
    }

    #[test]
    fn test_recent_limit() {
        let store = FixtureStore::seeded(today(), 5).unwrap();
        assert_eq!(DashboardReport::generate(&store, today(), 2).recent.len(), 2);
        assert_eq!(DashboardReport::generate(&store, today(), 50).recent.len(), 8);
    }

    #[test]
    fn test_terminal_format() {
        let store = FixtureStore::seeded(today(), 5).unwrap();
        let report = DashboardReport::generate(&store, today(), 5);
        let output = report.format_terminal(&DisplayOptions::default());

        assert!(output.contains("Dashboard - 2025-06-30"));
        assert!(output.contains("Savings Rate: 58%"));
        assert!(output.contains("Recent Transactions"));
        assert!(output.contains("Expense Breakdown"));
        assert!(output.contains("[Overdue]"));
    }

    #[test]
    fn test_csv_export() {
        let store = FixtureStore::seeded(today(), 5).unwrap();
        let report = DashboardReport::generate(&store, today(), 5);

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();
        let csv_string = String::from_utf8(csv_output).unwrap();

        assert!(csv_string.contains("Overview,Income,3000.00"));
        assert!(csv_string.contains("Overview,Savings Rate,58"));
        assert!(csv_string.contains("Expense Share,Housing,45"));
        // header + 4 overview + 5 recent + 6 budget + 6 shares + 3 goals
        assert_eq!(csv_string.lines().count(), 25);
    }
}
