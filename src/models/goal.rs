//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings target with a deadline
///
/// `current_amount` may exceed `target_amount` once the goal is met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,

    pub name: String,

    pub target_amount: Money,

    pub current_amount: Money,

    pub target_date: NaiveDate,

    pub color: String,
}

impl SavingsGoal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        target_date: NaiveDate,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: GoalId::new(id),
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
            color: color.into(),
        }
    }

    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }

        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {} by {})",
            self.name,
            self.current_amount,
            self.target_amount,
            self.target_date.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive, got {}", amount)
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Goal current amount cannot be negative, got {}", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
