//! Income, expense and savings totals over a list of transactions

use serde::Serialize;

use super::rounded_percent;
use crate::models::{Money, Transaction};

/// Aggregate totals for a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    /// Income minus expenses
    pub savings: Money,
    /// Whole-number percentage of income saved; 0 when there is no income
    pub savings_rate: i64,
}

/// Sum income and expenses and derive savings and the savings rate
pub fn calculate_totals(transactions: &[Transaction]) -> Totals {
    let income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();

    let expenses: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    let savings = income - expenses;

    Totals {
        income,
        expenses,
        savings,
        savings_rate: rounded_percent(savings, income),
    }
}
