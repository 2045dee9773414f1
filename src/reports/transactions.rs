//! Transaction Report
//!
//! The transaction list after applying a type filter and search text, with
//! totals for the matching set.

use serde::Serialize;
use std::io::Write;
use tracing::debug;

use super::{csv_amount, Report};
use crate::display::{format_transaction_table, heading, DisplayOptions};
use crate::error::BoardResult;
use crate::models::Transaction;
use crate::services::{calculate_totals, filter_transactions, Totals, TransactionQuery};
use crate::storage::FixtureStore;

#[derive(Debug, Clone, Serialize)]
pub struct TransactionReport {
    pub query: TransactionQuery,
    pub transactions: Vec<Transaction>,
    /// Totals of the matching transactions only
    pub totals: Totals,
}

impl TransactionReport {
    pub fn generate(store: &FixtureStore, query: TransactionQuery) -> Self {
        let transactions = filter_transactions(store.transactions(), &query);
        let totals = calculate_totals(&transactions);

        debug!(
            filter = %query.type_filter,
            search = %query.search,
            matched = transactions.len(),
            "generated transaction report"
        );

        Self {
            query,
            transactions,
            totals,
        }
    }

    pub fn count(&self) -> usize {
        self.transactions.len()
    }
}

impl Report for TransactionReport {
    fn format_terminal(&self, options: &DisplayOptions) -> String {
        let sym = options.currency_symbol.as_str();
        let mut output = heading("Transactions", 60);

        output.push_str(&format!("Type: {}", self.query.type_filter));
        if !self.query.search.is_empty() {
            output.push_str(&format!("   Search: \"{}\"", self.query.search));
        }
        output.push_str(&format!("   Matches: {}\n\n", self.count()));

        output.push_str(&format_transaction_table(
            &self.transactions,
            sym,
            &options.date_format,
        ));

        if !self.transactions.is_empty() {
            output.push_str(&format!(
                "\nIncome: {}   Expenses: {}   Net: {}\n",
                self.totals.income.format_with_symbol(sym),
                self.totals.expenses.format_with_symbol(sym),
                self.totals.savings.format_with_symbol(sym)
            ));
        }

        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> BoardResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["ID", "Date", "Description", "Category", "Type", "Amount"])?;

        for txn in &self.transactions {
            wtr.write_record([
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.description.clone(),
                txn.category.clone(),
                txn.kind.to_string(),
                csv_amount(txn.amount),
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
    use crate::services::TypeFilter;
    use chrono::NaiveDate;

    fn store() -> FixtureStore {
        FixtureStore::seeded(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(), 11).unwrap()
    }

    #[test]
    fn test_expense_rent() {
        let query = TransactionQuery::new(TypeFilter::Expense, "rent");
        let report = TransactionReport::generate(&store(), query);

        assert_eq!(report.count(), 1);
        assert_eq!(report.transactions[0].category, "Rent");
        assert_eq!(report.totals.expenses, Money::from_dollars(800));
        assert_eq!(report.totals.income, Money::zero());
    }

    #[test]
    fn test_all_transactions_totals() {
        let report = TransactionReport::generate(&store(), TransactionQuery::default());

        assert_eq!(report.count(), 8);
        assert_eq!(report.totals.income, Money::from_dollars(3000));
        assert_eq!(report.totals.expenses, Money::from_dollars(1270));
        assert_eq!(report.totals.savings_rate, 58);
    }

    #[test]
    fn test_terminal_format() {
        let report =
            TransactionReport::generate(&store(), TransactionQuery::new(TypeFilter::All, "bill"));
        let output = report.format_terminal(&DisplayOptions::default());

        assert!(output.contains("Search: \"bill\""));
        assert!(output.contains("Electricity bill"));
        assert!(output.contains("Matches: 1"));
    }

    #[test]
    fn test_no_matches() {
        let query = TransactionQuery::new(TypeFilter::Income, "fuel");
        let report = TransactionReport::generate(&store(), query);
        let output = report.format_terminal(&DisplayOptions::default());
        assert!(output.contains("No transactions found"));
    }

    #[test]
    fn test_csv_export() {
        let report = TransactionReport::generate(&store(), TransactionQuery::default());

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();
        let csv_string = String::from_utf8(csv_output).unwrap();

        assert!(csv_string.starts_with("ID,Date,Description,Category,Type,Amount"));
        assert!(csv_string.contains("Monthly rent payment,Rent,expense,800.00"));
        assert_eq!(csv_string.lines().count(), 9);
    }
}
