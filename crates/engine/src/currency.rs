use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// ISO-like currency code attached to stored amounts.
///
/// Records written without a currency field are treated as `USD`, the store
/// default. The set is closed on purpose: conversion is backed by a fixed
/// rate table, not a live FX feed, and a code outside the table (JPY has no
/// declared pair) converts to nothing but still parses from stored data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "INR" => Ok(Currency::Inr),
            "JPY" => Ok(Currency::Jpy),
            other => Err(LedgerError::InvalidRecord(format!(
                "unknown currency: {other}"
            ))),
        }
    }
}

/// Multiplicative conversion table over declared currency pairs.
///
/// Only declared pairs convert; symmetry is not guaranteed and an undeclared
/// pair is a hard [`LedgerError::UnsupportedConversion`], never a silent
/// fallback. The table is injected where conversion happens so tests can
/// swap it out, with [`RateTable::default`] carrying the fixed deployment
/// rates.
#[derive(Clone, Debug)]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), f64>,
}

impl RateTable {
    /// Builds a table from explicit `(from, to) -> rate` pairs.
    pub fn new(pairs: impl IntoIterator<Item = ((Currency, Currency), f64)>) -> Self {
        Self {
            rates: pairs.into_iter().collect(),
        }
    }

    /// Converts `amount` between currencies, rounded to 2 decimals.
    ///
    /// Identity conversion bypasses the table and returns the amount
    /// unchanged.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, LedgerError> {
        if from == to {
            return Ok(amount);
        }
        match self.rates.get(&(from, to)) {
            Some(rate) => Ok(round2(amount * rate)),
            None => Err(LedgerError::UnsupportedConversion { from, to }),
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        use Currency::*;
        Self::new([
            ((Usd, Eur), 0.95),
            ((Eur, Usd), 1.05),
            ((Usd, Gbp), 0.80),
            ((Gbp, Usd), 1.25),
            ((Usd, Inr), 83.0),
            ((Inr, Usd), 0.012),
        ])
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
