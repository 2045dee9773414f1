//! Transaction model
//!
//! A single income or expense entry. Amounts are always positive; the
//! direction lives in [`TransactionType`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub date: NaiveDate,

    /// Always positive
    pub amount: Money,

    /// Category label (free text, not linked to a budget category)
    pub category: String,

    pub description: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        kind: TransactionType,
    ) -> Self {
        Self {
            id: TransactionId::new(id),
            date,
            amount,
            category: category.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with sign applied (negative for expenses)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.id.is_empty() {
            return Err(TransactionValidationError::MissingId);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    MissingId,
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "Transaction id cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: TransactionType, dollars: i64) -> Transaction {
        Transaction::new(
            "1",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::from_dollars(dollars),
            "Rent",
            "Monthly rent payment",
            kind,
        )
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(
            sample(TransactionType::Income, 10).signed_amount().cents(),
            1000
        );
        assert_eq!(
            sample(TransactionType::Expense, 10).signed_amount().cents(),
            -1000
        );
    }

    #[test]
    fn test_validation() {
        assert!(sample(TransactionType::Expense, 800).validate().is_ok());
        assert_eq!(
            sample(TransactionType::Expense, 0).validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        let mut txn = sample(TransactionType::Income, 5);
        txn.id = TransactionId::new("");
        assert_eq!(txn.validate(), Err(TransactionValidationError::MissingId));
    }

    #[test]
    fn test_type_parse() {
        assert_eq!("Income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!(" expense ".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_serializes_type_field() {
        let json = serde_json::to_value(sample(TransactionType::Expense, 800)).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["amount"], 80000);
        assert_eq!(json["date"], "2025-01-15");
    }
}
