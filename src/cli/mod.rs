//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reports.

pub mod report;

pub use report::{
    handle_budget_command, handle_dashboard_command, handle_goals_command,
    handle_savings_command, handle_transactions_command, BudgetArgs, DashboardArgs, GoalsArgs,
    SavingsArgs, TransactionsArgs,
};

use chrono::NaiveDate;
use tracing::info;

use crate::config::{OutputFormat, Settings};
use crate::display::DisplayOptions;
use crate::error::{BoardError, BoardResult};
use crate::storage::FixtureStore;

/// Everything a command handler needs: the loaded store plus settings
pub struct Context {
    pub store: FixtureStore,
    pub settings: Settings,
    pub today: NaiveDate,
    pub display: DisplayOptions,
}

impl Context {
    /// Load the fixture store for `today`, seeded from `seed` or the settings
    pub fn load(settings: Settings, today: NaiveDate, seed: Option<u64>) -> BoardResult<Self> {
        let store = match seed.or(settings.fixture_seed) {
            Some(seed) => {
                info!(seed, %today, "loading seeded fixtures");
                FixtureStore::seeded(today, seed)?
            }
            None => {
                info!(%today, "loading fixtures with random dates");
                FixtureStore::load(today, &mut rand::thread_rng())?
            }
        };

        Ok(Self {
            display: DisplayOptions::from_settings(&settings),
            store,
            settings,
            today,
        })
    }

    /// The requested format, or the configured default
    pub fn format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.settings.default_format)
    }
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> BoardResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        BoardError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2025").unwrap_err().is_validation());
    }

    #[test]
    fn test_seed_flag_overrides_settings() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let settings = Settings {
            fixture_seed: Some(1),
            ..Settings::default()
        };

        let from_flag = Context::load(settings.clone(), today, Some(2)).unwrap();
        let expected = FixtureStore::seeded(today, 2).unwrap();
        assert_eq!(from_flag.store.transactions(), expected.transactions());

        let from_settings = Context::load(settings, today, None).unwrap();
        let expected = FixtureStore::seeded(today, 1).unwrap();
        assert_eq!(from_settings.store.transactions(), expected.transactions());
    }

    #[test]
    fn test_format_falls_back_to_settings() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let settings = Settings {
            default_format: OutputFormat::Yaml,
            ..Settings::default()
        };
        let ctx = Context::load(settings, today, Some(0)).unwrap();

        assert_eq!(ctx.format(None), OutputFormat::Yaml);
        assert_eq!(ctx.format(Some(OutputFormat::Csv)), OutputFormat::Csv);
    }
}
