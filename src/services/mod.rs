//! Derivation layer for budgetboard
//!
//! Pure functions computing totals, rates and progress from slices of
//! records. Nothing here holds state; every report recomputes from the
//! fixture store.

pub mod budget;
pub mod goals;
pub mod savings;
pub mod totals;
pub mod transactions;

pub use budget::{
    category_progress, expense_breakdown, summarize_budget, BudgetSummary, CategoryProgress,
    ExpenseShare,
};
pub use goals::{goal_progress, summarize_goals, GoalProgress, GoalStatus, GoalsSummary};
pub use savings::{summarize_savings, SavingsSummary};
pub use totals::{calculate_totals, Totals};
pub use transactions::{filter_transactions, recent_transactions, TransactionQuery, TypeFilter};

use crate::models::Money;

/// Round half up (toward positive infinity on .5)
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `part / whole * 100`, or 0 when `whole` is zero
pub(crate) fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

/// Whole-number percentage of `part` in `whole`, 0 when `whole` is zero
pub(crate) fn rounded_percent(part: Money, whole: Money) -> i64 {
    round_half_up(percent_of(part, whole))
}
