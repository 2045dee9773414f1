//! Monthly summary model

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Income, expenses and savings for one month
///
/// `savings` is recorded as given and never checked against
/// `income - expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Month label (e.g. "Jan")
    pub month: String,

    pub income: Money,

    pub expenses: Money,

    pub savings: Money,
}

impl MonthlySummary {
    pub fn new(month: impl Into<String>, income: Money, expenses: Money, savings: Money) -> Self {
        Self {
            month: month.into(),
            income,
            expenses,
            savings,
        }
    }
}
