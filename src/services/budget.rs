//! Budget aggregation
//!
//! Totals across all categories, per-category progress and the
//! spending breakdown shown on the dashboard.

use serde::Serialize;

use super::rounded_percent;
use crate::models::{BudgetCategory, CategoryId, Money};

/// Totals across every budget category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BudgetSummary {
    pub total_budgeted: Money,
    pub total_spent: Money,
    /// Budgeted minus spent; negative when over budget overall
    pub remaining: Money,
    /// Whole-number percentage of the budget spent; 0 for an empty budget
    pub percent_used: i64,
    pub over_budget_count: usize,
}

/// Progress of a single category against its budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub id: CategoryId,
    pub name: String,
    pub budgeted: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percent_used: i64,
    /// `percent_used` capped at 100, for progress bars
    pub bar_percent: i64,
    pub is_over_budget: bool,
}

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseShare {
    pub name: String,
    pub spent: Money,
    pub share_percent: i64,
    pub color: String,
}

pub fn summarize_budget(categories: &[BudgetCategory]) -> BudgetSummary {
    let total_budgeted: Money = categories.iter().map(|c| c.budgeted).sum();
    let total_spent: Money = categories.iter().map(|c| c.spent).sum();

    BudgetSummary {
        total_budgeted,
        total_spent,
        remaining: total_budgeted - total_spent,
        percent_used: rounded_percent(total_spent, total_budgeted),
        over_budget_count: categories.iter().filter(|c| c.is_over_budget()).count(),
    }
}

pub fn category_progress(category: &BudgetCategory) -> CategoryProgress {
    let percent_used = rounded_percent(category.spent, category.budgeted);

    CategoryProgress {
        id: category.id.clone(),
        name: category.name.clone(),
        budgeted: category.budgeted,
        spent: category.spent,
        remaining: category.remaining(),
        percent_used,
        bar_percent: percent_used.min(100),
        is_over_budget: category.is_over_budget(),
    }
}

/// Categories ordered by amount spent (largest first) with their share of the total
pub fn expense_breakdown(categories: &[BudgetCategory]) -> Vec<ExpenseShare> {
    let total_spent: Money = categories.iter().map(|c| c.spent).sum();

    let mut sorted: Vec<&BudgetCategory> = categories.iter().collect();
    sorted.sort_by(|a, b| b.spent.cmp(&a.spent));

    sorted
        .into_iter()
        .map(|c| ExpenseShare {
            name: c.name.clone(),
            spent: c.spent,
            share_percent: rounded_percent(c.spent, total_spent),
            color: c.color.clone(),
        })
        .collect()
}
