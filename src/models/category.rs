//! Budget category model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// A budget category with its planned and actual spending
///
/// `spent` may exceed `budgeted`; that is the over-budget state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: CategoryId,

    pub name: String,

    pub budgeted: Money,

    pub spent: Money,

    /// Display color token (e.g. "#FF6384")
    pub color: String,
}

impl BudgetCategory {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        budgeted: Money,
        spent: Money,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            budgeted,
            spent,
            color: color.into(),
        }
    }

    /// Budgeted minus spent; negative when over budget
    pub fn remaining(&self) -> Money {
        self.budgeted - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budgeted
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.budgeted.is_negative() {
            return Err(CategoryValidationError::NegativeBudgeted(self.budgeted));
        }

        if self.spent.is_negative() {
            return Err(CategoryValidationError::NegativeSpent(self.spent));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} of {})", self.name, self.spent, self.budgeted)
    }
}

/// Validation errors for budget categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NegativeBudgeted(Money),
    NegativeSpent(Money),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NegativeBudgeted(amount) => {
                write!(f, "Budgeted amount cannot be negative, got {}", amount)
            }
            Self::NegativeSpent(amount) => {
                write!(f, "Spent amount cannot be negative, got {}", amount)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
