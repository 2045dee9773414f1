//! Savings trend across monthly summaries

use serde::Serialize;

use super::{percent_of, round_half_up};
use crate::models::{Money, MonthlySummary};

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SavingsSummary {
    pub total_savings: Money,
    /// Mean of each month's savings rate, rounded; months without income count as 0
    pub average_savings_rate: i64,
    /// Mean monthly savings scaled to twelve months, rounded to the cent
    pub projected_annual_savings: Money,
    /// Month with the highest savings (earliest wins ties)
    pub best_month: Option<String>,
}

pub fn summarize_savings(months: &[MonthlySummary]) -> SavingsSummary {
    let total_savings: Money = months.iter().map(|m| m.savings).sum();

    let average_savings_rate = if months.is_empty() {
        0
    } else {
        let rate_sum: f64 = months
            .iter()
            .map(|m| percent_of(m.savings, m.income))
            .sum();
        round_half_up(rate_sum / months.len() as f64)
    };

    let projected_annual_savings = if months.is_empty() {
        Money::zero()
    } else {
        let monthly_mean = total_savings.cents() as f64 / months.len() as f64;
        Money::from_cents(round_half_up(monthly_mean * MONTHS_PER_YEAR))
    };

    let best_month = months
        .iter()
        .fold(None::<&MonthlySummary>, |best, m| match best {
            Some(b) if b.savings >= m.savings => Some(b),
            _ => Some(m),
        })
        .map(|m| m.month.clone());

    SavingsSummary {
        total_savings,
        average_savings_rate,
        projected_annual_savings,
        best_month,
    }
}
