//! Hard-coded dashboard records
//!
//! Amounts are whole currency units. Transaction dates are not part of the
//! fixture; the caller supplies one per record.

use chrono::NaiveDate;

use crate::models::{
    BudgetCategory, Money, MonthlySummary, SavingsGoal, Transaction, TransactionType,
};

/// Transactions loaded into the dashboard
pub const TRANSACTION_COUNT: usize = 8;

/// Build the transaction fixtures, asking `date_for` for each record's date
pub fn transactions(mut date_for: impl FnMut() -> NaiveDate) -> Vec<Transaction> {
    use TransactionType::{Expense, Income};

    let rows: [(&str, i64, &str, &str, TransactionType); TRANSACTION_COUNT] = [
        ("1", 2500, "Salary", "Monthly salary", Income),
        ("2", 500, "Freelance", "Website design project", Income),
        ("3", 800, "Rent", "Monthly rent payment", Expense),
        ("4", 120, "Groceries", "Weekly grocery shopping", Expense),
        ("5", 65, "Dining", "Dinner with friends", Expense),
        ("6", 200, "Utilities", "Electricity bill", Expense),
        ("7", 50, "Entertainment", "Movie tickets", Expense),
        ("8", 35, "Transportation", "Fuel", Expense),
    ];

    rows.into_iter()
        .map(|(id, amount, category, description, kind)| {
            Transaction::new(
                id,
                date_for(),
                Money::from_dollars(amount),
                category,
                description,
                kind,
            )
        })
        .collect()
}

pub fn budget_categories() -> Vec<BudgetCategory> {
    [
        ("1", "Housing", 1000, 800, "#FF6384"),
        ("2", "Food", 400, 350, "#36A2EB"),
        ("3", "Transportation", 200, 180, "#FFCE56"),
        ("4", "Entertainment", 150, 120, "#4BC0C0"),
        ("5", "Utilities", 300, 280, "#9966FF"),
        ("6", "Healthcare", 200, 50, "#FF9F40"),
    ]
    .into_iter()
    .map(|(id, name, budgeted, spent, color)| {
        BudgetCategory::new(
            id,
            name,
            Money::from_dollars(budgeted),
            Money::from_dollars(spent),
            color,
        )
    })
    .collect()
}

pub fn savings_goals() -> Vec<SavingsGoal> {
    [
        ("1", "Emergency Fund", 10000, 5000, (2024, 12, 31), "#FF6384"),
        ("2", "Vacation", 3000, 1500, (2024, 8, 15), "#36A2EB"),
        ("3", "New Laptop", 2000, 800, (2024, 10, 1), "#FFCE56"),
    ]
    .into_iter()
    .filter_map(|(id, name, target, current, (y, m, d), color)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| {
            SavingsGoal::new(
                id,
                name,
                Money::from_dollars(target),
                Money::from_dollars(current),
                date,
                color,
            )
        })
    })
    .collect()
}

pub fn monthly_overview() -> Vec<MonthlySummary> {
    [
        ("Jan", 3000, 2200, 800),
        ("Feb", 3200, 2400, 800),
        ("Mar", 3100, 2300, 800),
        ("Apr", 3300, 2100, 1200),
        ("May", 3400, 2500, 900),
        ("Jun", 3200, 2400, 800),
    ]
    .into_iter()
    .map(|(month, income, expenses, savings)| {
        MonthlySummary::new(
            month,
            Money::from_dollars(income),
            Money::from_dollars(expenses),
            Money::from_dollars(savings),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactions_use_supplied_dates() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let txns = transactions(|| day);

        assert_eq!(txns.len(), TRANSACTION_COUNT);
        assert!(txns.iter().all(|t| t.date == day));
        assert_eq!(txns.iter().filter(|t| t.is_income()).count(), 2);
    }

    #[test]
    fn test_goal_dates_are_valid() {
        assert_eq!(savings_goals().len(), 3);
    }

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(budget_categories().len(), 6);
        assert_eq!(monthly_overview().len(), 6);
    }
}
