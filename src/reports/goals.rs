//! Goals Report
//!
//! Progress, deadline and required monthly contribution for each savings goal.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use super::{csv_amount, Report};
use crate::display::{heading, progress_bar, DisplayOptions};
use crate::error::BoardResult;
use crate::services::{goal_progress, summarize_goals, GoalProgress, GoalStatus, GoalsSummary};
use crate::storage::FixtureStore;

#[derive(Debug, Clone, Serialize)]
pub struct GoalsReport {
    /// Reference date the countdowns are measured from
    pub as_of: NaiveDate,
    pub summary: GoalsSummary,
    pub goals: Vec<GoalProgress>,
}

impl GoalsReport {
    /// Generate a report over all goals, or just the one matching `goal` (id or name)
    pub fn generate(
        store: &FixtureStore,
        today: NaiveDate,
        goal: Option<&str>,
    ) -> BoardResult<Self> {
        let goals = match goal {
            Some(identifier) => vec![goal_progress(store.find_goal(identifier)?, today)],
            None => store
                .savings_goals()
                .iter()
                .map(|g| goal_progress(g, today))
                .collect(),
        };

        debug!(goals = goals.len(), %today, "generated goals report");

        Ok(Self {
            as_of: today,
            summary: summarize_goals(store.savings_goals()),
            goals,
        })
    }

    pub fn overdue_count(&self) -> usize {
        self.goals
            .iter()
            .filter(|g| g.status == GoalStatus::Overdue)
            .count()
    }
}

impl Report for GoalsReport {
    fn format_terminal(&self, options: &DisplayOptions) -> String {
        let sym = options.currency_symbol.as_str();
        let mut output = heading(
            &format!("Savings Goals - as of {}", self.as_of.format(&options.date_format)),
            80,
        );

        output.push_str(&format!(
            "Saved {} of {} across all goals ({}%)\n",
            self.summary.total_current.format_with_symbol(sym),
            self.summary.total_target.format_with_symbol(sym),
            self.summary.overall_progress
        ));

        for goal in &self.goals {
            output.push('\n');
            output.push_str(&format!("{} [{}]\n", goal.name, goal.status));
            output.push_str(&format!(
                "  {} {:.0}%\n",
                progress_bar(goal.progress_percent),
                goal.progress_percent
            ));
            output.push_str(&format!(
                "  Current: {}   Target: {}   Remaining: {}\n",
                goal.current_amount.format_with_symbol(sym),
                goal.target_amount.format_with_symbol(sym),
                goal.remaining.format_with_symbol(sym)
            ));
            output.push_str(&format!(
                "  Target date: {}   {} days / {} months left   Needed: {}/month\n",
                goal.target_date.format(&options.date_format),
                goal.days_left,
                goal.months_left,
                goal.monthly_contribution_needed.format_with_symbol(sym)
            ));
        }

        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> BoardResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            "Goal",
            "Status",
            "Current",
            "Target",
            "Remaining",
            "Progress",
            "Target Date",
            "Days Left",
            "Months Left",
            "Monthly Needed",
        ])?;

        for goal in &self.goals {
            wtr.write_record([
                goal.name.clone(),
                goal.status.to_string(),
                csv_amount(goal.current_amount),
                csv_amount(goal.target_amount),
                csv_amount(goal.remaining),
                format!("{:.1}", goal.progress_percent),
                goal.target_date.format("%Y-%m-%d").to_string(),
                goal.days_left.to_string(),
                goal.months_left.to_string(),
                csv_amount(goal.monthly_contribution_needed),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
