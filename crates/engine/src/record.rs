//! User records and the transaction codec.
//!
//! A `Transaction` is a typed record, but it serializes as the legacy
//! comma-joined line `DATE,CATEGORY,AMOUNT[,CURRENCY]` so documents written
//! by earlier deployments keep loading unchanged.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Currency, LedgerError};

/// Date format written to the store, e.g. `01-Jan-2021`.
const DATE_FORMAT: &str = "%d-%b-%Y";
/// Older records also carry ISO dates, e.g. `2023-11-01`.
const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

/// A single dated, categorized spending entry.
///
/// `currency` is `None` for records stored before currencies existed; they
/// are denominated in the store default (`USD`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Transaction {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub currency: Option<Currency>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        currency: Option<Currency>,
    ) -> Result<Self, LedgerError> {
        let category = category.into();
        if category.is_empty() || category.contains(',') {
            return Err(LedgerError::InvalidRecord(format!(
                "invalid category: {category:?}"
            )));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            date,
            category,
            amount,
            currency,
        })
    }

    /// Currency the amount is denominated in; records without a fourth field
    /// default to `USD`.
    #[must_use]
    pub fn currency_or_default(&self) -> Currency {
        self.currency.unwrap_or_default()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.date.format(DATE_FORMAT),
            self.category,
            display_amount(self.amount)
        )?;
        if let Some(currency) = self.currency {
            write!(f, ",{}", currency.code())?;
        }
        Ok(())
    }
}

impl FromStr for Transaction {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        if !(3..=4).contains(&fields.len()) {
            return Err(LedgerError::InvalidRecord(s.to_string()));
        }
        let date = parse_date(fields[0])?;
        let category = fields[1].to_string();
        let amount: f64 = fields[2]
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidRecord(s.to_string()))?;
        let currency = match fields.get(3) {
            Some(code) => Some(Currency::try_from(*code)?),
            None => None,
        };
        Ok(Self {
            date,
            category,
            amount,
            currency,
        })
    }
}

impl From<Transaction> for String {
    fn from(tx: Transaction) -> Self {
        tx.to_string()
    }
}

impl TryFrom<String> for Transaction {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Per-user spend ceilings; absent means unconstrained.
///
/// All three fields serialize as explicit nulls when unset, matching the
/// stored document shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub overall: Option<f64>,
    pub category: Option<BTreeMap<String, f64>>,
    pub max_per_txn_spend: Option<f64>,
}

/// Everything the store keeps for one user.
///
/// `Default` is the record created lazily on first interaction: no
/// transactions, an all-null budget, and no income key in the document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub data: Vec<Transaction>,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_currency: Option<Currency>,
}

/// Field update applied by [`Ledger::edit_transaction`].
///
/// [`Ledger::edit_transaction`]: crate::Ledger::edit_transaction
#[derive(Clone, Debug, PartialEq)]
pub enum TransactionUpdate {
    Date(NaiveDate),
    Category(String),
    Amount(f64),
}

/// Parses a user-entered amount.
///
/// Failure is an explicit [`LedgerError::InvalidAmount`] rather than a zero
/// sentinel, so "failed to parse" and "parsed as zero" stay distinguishable.
/// Entered amounts must be strictly positive.
pub fn parse_amount(input: &str) -> Result<f64, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidAmount("empty amount".to_string()));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(format!("{trimmed} is not a number")))?;
    if !value.is_finite() {
        return Err(LedgerError::InvalidAmount(format!("{trimmed} is not finite")));
    }
    if value <= 0.0 {
        return Err(LedgerError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}

/// Parses a day-precision date in either stored format.
pub fn parse_date(input: &str) -> Result<NaiveDate, LedgerError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, DATE_FORMAT_ISO))
        .map_err(|_| LedgerError::InvalidDate(trimmed.to_string()))
}

/// Formats an amount the way the stored records and user messages do:
/// integral values keep a single trailing decimal (`100.0`), everything else
/// uses the shortest round-trip form.
#[must_use]
pub fn display_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
