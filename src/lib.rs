//! budgetboard - terminal personal-finance dashboard
//!
//! Renders budget, transaction, savings and goal views from a fixed set of
//! in-memory records. All figures are derived on demand by pure functions;
//! nothing is persisted apart from user settings.
//!
//! # Architecture
//!
//! - `config`: Settings and path management
//! - `error`: Custom error types
//! - `models`: Record types (transactions, budget categories, goals, monthly summaries)
//! - `storage`: The read-only fixture store
//! - `services`: Derivation functions (totals, budget, goals, savings, search)
//! - `reports`: One report per dashboard view
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use budgetboard::services::calculate_totals;
//! use budgetboard::storage::FixtureStore;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let store = FixtureStore::seeded(today, 7).unwrap();
//! let totals = calculate_totals(store.transactions());
//! assert_eq!(totals.savings, totals.income - totals.expenses);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BoardError, BoardResult};
