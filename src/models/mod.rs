//! Core data models for budgetboard
//!
//! This module contains the record types the dashboard is built from:
//! transactions, budget categories, savings goals and monthly summaries.

pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod summary;
pub mod transaction;

pub use category::{BudgetCategory, CategoryValidationError};
pub use goal::{GoalValidationError, SavingsGoal};
pub use ids::{CategoryId, GoalId, TransactionId};
pub use money::Money;
pub use summary::MonthlySummary;
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
