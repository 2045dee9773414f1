//! Savings goal progress

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::{percent_of, rounded_percent};
use crate::models::{GoalId, Money, SavingsGoal};

/// Days counted as one month when spreading the remaining amount
pub const DAYS_PER_MONTH: i64 = 30;

/// Where a goal stands relative to its target and deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    InProgress,
    /// Target date has passed without reaching the target
    Overdue,
    Achieved,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In progress"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Achieved => write!(f, "Achieved"),
        }
    }
}

/// Derived progress for one savings goal as of a reference date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub target_date: NaiveDate,
    /// Capped at 100
    pub progress_percent: f64,
    /// Never negative
    pub remaining: Money,
    /// Days until the target date; 0 once it has passed
    pub days_left: i64,
    pub months_left: i64,
    /// Whole currency units per month needed to reach the target; 0 when no months remain
    pub monthly_contribution_needed: Money,
    pub status: GoalStatus,
}

/// Totals across all goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GoalsSummary {
    pub total_target: Money,
    pub total_current: Money,
    pub overall_progress: i64,
}

pub fn goal_progress(goal: &SavingsGoal, today: NaiveDate) -> GoalProgress {
    let progress_percent = percent_of(goal.current_amount, goal.target_amount).min(100.0);
    let remaining = (goal.target_amount - goal.current_amount).non_negative();

    let days_left = (goal.target_date - today).num_days().max(0);
    let months_left = div_ceil(days_left, DAYS_PER_MONTH);

    let monthly_contribution_needed = if months_left > 0 {
        Money::from_dollars(div_ceil(remaining.cents(), months_left * 100))
    } else {
        Money::zero()
    };

    let status = if goal.is_achieved() {
        GoalStatus::Achieved
    } else if goal.target_date < today {
        GoalStatus::Overdue
    } else {
        GoalStatus::InProgress
    };

    GoalProgress {
        id: goal.id.clone(),
        name: goal.name.clone(),
        target_amount: goal.target_amount,
        current_amount: goal.current_amount,
        target_date: goal.target_date,
        progress_percent,
        remaining,
        days_left,
        months_left,
        monthly_contribution_needed,
        status,
    }
}

pub fn summarize_goals(goals: &[SavingsGoal]) -> GoalsSummary {
    let total_target: Money = goals.iter().map(|g| g.target_amount).sum();
    let total_current: Money = goals.iter().map(|g| g.current_amount).sum();

    GoalsSummary {
        total_target,
        total_current,
        overall_progress: rounded_percent(total_current, total_target),
    }
}

/// Ceiling division for non-negative numerators and positive divisors
fn div_ceil(numerator: i64, divisor: i64) -> i64 {
    (numerator + divisor - 1) / divisor
}
