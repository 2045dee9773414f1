//! CLI commands for the dashboard views
//!
//! Each command generates one report and writes it in the chosen format.

use clap::Args;
use std::io::Write;

use super::Context;
use crate::config::OutputFormat;
use crate::error::BoardResult;
use crate::reports::{
    render, BudgetReport, DashboardReport, GoalsReport, SavingsReport, TransactionReport,
};
use crate::services::{TransactionQuery, TypeFilter};

#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of recent transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub struct BudgetArgs {
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show only categories that are over budget
    #[arg(long)]
    pub over_only: bool,
}

#[derive(Args, Debug, Default)]
pub struct GoalsArgs {
    /// Show a single goal (ID or name)
    pub goal: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug, Default)]
pub struct SavingsArgs {
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug, Default)]
pub struct TransactionsArgs {
    /// Transaction type to show
    #[arg(short = 't', long = "type", value_enum, default_value_t = TypeFilter::All)]
    pub type_filter: TypeFilter,

    /// Case-insensitive text matched against description and category
    #[arg(short, long, default_value = "")]
    pub search: String,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn handle_dashboard_command<W: Write>(
    ctx: &Context,
    args: DashboardArgs,
    out: &mut W,
) -> BoardResult<()> {
    let limit = args.limit.unwrap_or(ctx.settings.recent_limit);
    let report = DashboardReport::generate(&ctx.store, ctx.today, limit);
    render(&report, ctx.format(args.format), &ctx.display, out)
}

pub fn handle_budget_command<W: Write>(
    ctx: &Context,
    args: BudgetArgs,
    out: &mut W,
) -> BoardResult<()> {
    let report = BudgetReport::generate(&ctx.store, args.over_only);
    render(&report, ctx.format(args.format), &ctx.display, out)
}

pub fn handle_goals_command<W: Write>(
    ctx: &Context,
    args: GoalsArgs,
    out: &mut W,
) -> BoardResult<()> {
    let report = GoalsReport::generate(&ctx.store, ctx.today, args.goal.as_deref())?;
    render(&report, ctx.format(args.format), &ctx.display, out)
}

pub fn handle_savings_command<W: Write>(
    ctx: &Context,
    args: SavingsArgs,
    out: &mut W,
) -> BoardResult<()> {
    let report = SavingsReport::generate(&ctx.store, ctx.today);
    render(&report, ctx.format(args.format), &ctx.display, out)
}

pub fn handle_transactions_command<W: Write>(
    ctx: &Context,
    args: TransactionsArgs,
    out: &mut W,
) -> BoardResult<()> {
    let query = TransactionQuery::new(args.type_filter, args.search);
    let report = TransactionReport::generate(&ctx.store, query);
    render(&report, ctx.format(args.format), &ctx.display, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use chrono::NaiveDate;

    fn ctx() -> Context {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        Context::load(Settings::default(), today, Some(42)).unwrap()
    }

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> BoardResult<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dashboard_json_limit() {
        let ctx = ctx();
        let args = DashboardArgs {
            format: Some(OutputFormat::Json),
            limit: Some(3),
        };
        let output = run(|out| handle_dashboard_command(&ctx, args, out));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["recent"].as_array().unwrap().len(), 3);
        assert_eq!(value["totals"]["savings_rate"], 58);
    }

    #[test]
    fn test_transactions_filter() {
        let ctx = ctx();
        let args = TransactionsArgs {
            type_filter: TypeFilter::Expense,
            search: "RENT".into(),
            format: Some(OutputFormat::Json),
        };
        let output = run(|out| handle_transactions_command(&ctx, args, out));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let txns = value["transactions"].as_array().unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0]["id"], "3");
        assert_eq!(value["query"]["type_filter"], "expense");
    }

    #[test]
    fn test_budget_yaml() {
        let ctx = ctx();
        let args = BudgetArgs {
            format: Some(OutputFormat::Yaml),
            over_only: false,
        };
        let output = run(|out| handle_budget_command(&ctx, args, out));
        assert!(output.contains("percent_used: 79"));
    }

    #[test]
    fn test_goals_unknown_goal() {
        let ctx = ctx();
        let args = GoalsArgs {
            goal: Some("Boat".into()),
            format: None,
        };
        let err = handle_goals_command(&ctx, args, &mut Vec::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_savings_table_default() {
        let ctx = ctx();
        let output = run(|out| handle_savings_command(&ctx, SavingsArgs::default(), out));
        assert!(output.contains("Total Savings: $5300.00"));
    }
}
