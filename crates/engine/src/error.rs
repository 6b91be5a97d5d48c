//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`UnsupportedConversion`] thrown when a currency pair is not in the rate table.
//! - [`IncomeNotSet`] thrown when an operation needs a configured income.
//! - [`BudgetNotConfigured`] thrown when a summary is requested with no budget set.
//!
//!  [`UnsupportedConversion`]: LedgerError::UnsupportedConversion
//!  [`IncomeNotSet`]: LedgerError::IncomeNotSet
//!  [`BudgetNotConfigured`]: LedgerError::BudgetNotConfigured
use thiserror::Error;

use crate::Currency;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Unsupported conversion: {from} to {to}")]
    UnsupportedConversion { from: Currency, to: Currency },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("You haven't set your monthly income yet. Please use /income to set your income.")]
    IncomeNotSet,
    #[error("Budget does not exist. Use /updatebudget option to add/update the budget")]
    BudgetNotConfigured,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::UnsupportedConversion { from: a, to: b },
                Self::UnsupportedConversion { from: c, to: d },
            ) => a == c && b == d,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidDate(a), Self::InvalidDate(b)) => a == b,
            (Self::InvalidRecord(a), Self::InvalidRecord(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::IncomeNotSet, Self::IncomeNotSet) => true,
            (Self::BudgetNotConfigured, Self::BudgetNotConfigured) => true,
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            (Self::Serialization(a), Self::Serialization(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
