//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table; expenses are shown with a leading minus
pub fn format_transaction_table(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        date: txn.date.format(date_format).to_string(),
        description: super::truncate(&txn.description, 28).trim_end().to_string(),
        category: txn.category.clone(),
        kind: txn.kind.to_string(),
        amount: txn.signed_amount().format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_format_table() {
        let txn = Transaction::new(
            "3",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::from_dollars(800),
            "Rent",
            "Monthly rent payment",
            TransactionType::Expense,
        );

        let formatted = format_transaction_table(&[txn], "$", "%Y-%m-%d");
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("Monthly rent payment"));
        assert!(formatted.contains("-$800.00"));
        assert!(formatted.contains("Amount"));
    }

    #[test]
    fn test_custom_date_format() {
        let txn = Transaction::new(
            "1",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::from_dollars(2500),
            "Salary",
            "Monthly salary",
            TransactionType::Income,
        );

        let formatted = format_transaction_table(&[txn], "€", "%d/%m/%Y");
        assert!(formatted.contains("15/01/2025"));
        assert!(formatted.contains("€2500.00"));
    }

    #[test]
    fn test_format_empty() {
        let formatted = format_transaction_table(&[], "$", "%Y-%m-%d");
        assert!(formatted.contains("No transactions found"));
    }
}
