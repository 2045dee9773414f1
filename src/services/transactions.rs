//! Transaction search and the dashboard's recent list
//!
//! Filtering is a single function of (type filter, search text, source list);
//! changing either input re-runs it from the full list.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

use crate::models::{Transaction, TransactionType};

/// Which transaction types to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// Type filter plus free-text search over description and category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionQuery {
    pub type_filter: TypeFilter,
    pub search: String,
}

impl TransactionQuery {
    pub fn new(type_filter: TypeFilter, search: impl Into<String>) -> Self {
        Self {
            type_filter,
            search: search.into(),
        }
    }

    /// Check a single transaction against the query
    pub fn matches(&self, txn: &Transaction) -> bool {
        if !self.type_filter.matches(txn.kind) {
            return false;
        }

        let needle = self.search.to_lowercase();
        needle.is_empty()
            || txn.description.to_lowercase().contains(&needle)
            || txn.category.to_lowercase().contains(&needle)
    }
}

/// Transactions matching the query, in source order
pub fn filter_transactions(
    transactions: &[Transaction],
    query: &TransactionQuery,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| query.matches(t))
        .cloned()
        .collect()
}

/// The `limit` most recent transactions, newest first
///
/// Transactions sharing a date keep their source order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by_key(|t| Reverse(t.date));
    sorted.truncate(limit);
    sorted
}
