//! In-memory fixture store
//!
//! Holds the dashboard's records for the lifetime of the process. The store
//! is built once and never mutated; every report reads from its slices.

pub mod fixtures;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{BoardError, BoardResult};
use crate::models::{BudgetCategory, MonthlySummary, SavingsGoal, Transaction};

/// Transaction dates fall within this many days ending today
pub const DATE_WINDOW_DAYS: i64 = 30;

/// Read-only collection of all dashboard records
#[derive(Debug, Clone)]
pub struct FixtureStore {
    transactions: Vec<Transaction>,
    budget_categories: Vec<BudgetCategory>,
    savings_goals: Vec<SavingsGoal>,
    monthly_overview: Vec<MonthlySummary>,
}

impl FixtureStore {
    /// Load the fixtures, drawing each transaction date from `rng`
    pub fn load<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> BoardResult<Self> {
        let earliest = today
            .checked_sub_signed(Duration::days(DATE_WINDOW_DAYS - 1))
            .ok_or_else(|| {
                BoardError::Validation(format!("reference date out of range: {}", today))
            })?;
        let transactions = fixtures::transactions(|| {
            let days_ago = rng.gen_range(0..DATE_WINDOW_DAYS);
            earliest + Duration::days(DATE_WINDOW_DAYS - 1 - days_ago)
        });

        let store = Self::from_parts(
            transactions,
            fixtures::budget_categories(),
            fixtures::savings_goals(),
            fixtures::monthly_overview(),
        )?;

        debug!(
            transactions = store.transactions.len(),
            categories = store.budget_categories.len(),
            goals = store.savings_goals.len(),
            months = store.monthly_overview.len(),
            "loaded fixture store"
        );

        Ok(store)
    }

    /// Load the fixtures with reproducible transaction dates
    pub fn seeded(today: NaiveDate, seed: u64) -> BoardResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::load(today, &mut rng)
    }

    /// Build a store from explicit records, validating each one
    pub fn from_parts(
        transactions: Vec<Transaction>,
        budget_categories: Vec<BudgetCategory>,
        savings_goals: Vec<SavingsGoal>,
        monthly_overview: Vec<MonthlySummary>,
    ) -> BoardResult<Self> {
        for txn in &transactions {
            txn.validate().map_err(|e| {
                BoardError::Validation(format!("transaction {}: {}", txn.id, e))
            })?;
        }
        for category in &budget_categories {
            category.validate().map_err(|e| {
                BoardError::Validation(format!("budget category {}: {}", category.id, e))
            })?;
        }
        for goal in &savings_goals {
            goal.validate()
                .map_err(|e| BoardError::Validation(format!("savings goal {}: {}", goal.id, e)))?;
        }

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = transactions.iter().find(|t| !seen.insert(&t.id)) {
            return Err(BoardError::Validation(format!(
                "duplicate transaction id: {}",
                dup.id
            )));
        }

        Ok(Self {
            transactions,
            budget_categories,
            savings_goals,
            monthly_overview,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budget_categories(&self) -> &[BudgetCategory] {
        &self.budget_categories
    }

    pub fn savings_goals(&self) -> &[SavingsGoal] {
        &self.savings_goals
    }

    pub fn monthly_overview(&self) -> &[MonthlySummary] {
        &self.monthly_overview
    }

    /// Find a savings goal by id or case-insensitive name
    pub fn find_goal(&self, identifier: &str) -> BoardResult<&SavingsGoal> {
        let needle = identifier.trim();
        self.savings_goals
            .iter()
            .find(|g| g.id.as_str() == needle || g.name.eq_ignore_ascii_case(needle))
            .ok_or_else(|| BoardError::goal_not_found(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_dates_within_window() {
        let store = FixtureStore::load(today(), &mut rand::thread_rng()).unwrap();
        let earliest = today() - Duration::days(DATE_WINDOW_DAYS - 1);

        assert_eq!(store.transactions().len(), fixtures::TRANSACTION_COUNT);
        for txn in store.transactions() {
            assert!(txn.date <= today());
            assert!(txn.date >= earliest);
        }
    }

    #[test]
    fn test_reference_date_at_calendar_start_is_rejected() {
        let err = FixtureStore::seeded(NaiveDate::MIN, 1).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("reference date out of range"));

        let first_valid = NaiveDate::MIN + Duration::days(DATE_WINDOW_DAYS - 1);
        let store = FixtureStore::seeded(first_valid, 1).unwrap();
        assert!(store.transactions().iter().all(|t| t.date >= NaiveDate::MIN));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = FixtureStore::seeded(today(), 7).unwrap();
        let b = FixtureStore::seeded(today(), 7).unwrap();
        assert_eq!(a.transactions(), b.transactions());
    }

    #[test]
    fn test_find_goal() {
        let store = FixtureStore::seeded(today(), 1).unwrap();

        assert_eq!(store.find_goal("vacation").unwrap().id.as_str(), "2");
        assert_eq!(store.find_goal("3").unwrap().name, "New Laptop");
        assert!(store.find_goal("Yacht").unwrap_err().is_not_found());
    }

    #[test]
    fn test_from_parts_rejects_invalid_records() {
        let bad = Transaction::new(
            "1",
            today(),
            Money::zero(),
            "Misc",
            "Nothing",
            TransactionType::Expense,
        );
        let err = FixtureStore::from_parts(vec![bad], vec![], vec![], vec![]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_parts_rejects_duplicate_ids() {
        let txn = Transaction::new(
            "1",
            today(),
            Money::from_dollars(5),
            "Misc",
            "Coffee",
            TransactionType::Expense,
        );
        let err =
            FixtureStore::from_parts(vec![txn.clone(), txn], vec![], vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate transaction id"));
    }
}
