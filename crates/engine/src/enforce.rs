//! Constraint checks applied to a candidate transaction and the budget
//! summary selection.
//!
//! A submission ends in one of three terminal outcomes: accepted, warned
//! (recorded anyway), or rejected (not recorded). Every rejection carries
//! user-facing text; a bad user-supplied amount never takes the process
//! down.

use std::collections::BTreeMap;

use crate::{Currency, LedgerError, RateTable, UserRecord, aggregate, record::display_amount};

/// Advisory warning sent when a single transaction exceeds the configured
/// per-transaction ceiling.
pub const MAX_SPEND_WARNING: &str = "Warning! You went over your transaction spend limit.";

/// Outcome of the income affordability check.
///
/// `blocked` is true when the transaction must not be recorded; the
/// message is the user-facing side output, absent when unblocked.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitCheck {
    pub blocked: bool,
    pub message: Option<String>,
}

impl LimitCheck {
    fn pass() -> Self {
        Self {
            blocked: false,
            message: None,
        }
    }

    fn block(message: String) -> Self {
        Self {
            blocked: true,
            message: Some(message),
        }
    }
}

/// Terminal outcome of a transaction submission.
#[derive(Clone, Debug, PartialEq)]
pub enum TransactionVerdict {
    Accepted,
    Warned(String),
    Rejected(String),
}

/// Which budget summary applies to a user.
#[derive(Clone, Debug, PartialEq)]
pub enum BudgetView {
    Overall(f64),
    Category(BTreeMap<String, f64>),
}

/// Income-based affordability check for a candidate amount.
///
/// Requires a configured nonzero income; otherwise the submission is
/// blocked with guidance to set one. The candidate amount is converted to
/// the store reference currency (`USD`) and added to the user's total
/// expenditure; exceeding income blocks the transaction.
pub fn check_transaction_limit(
    record: Option<&UserRecord>,
    amount: f64,
    currency: Currency,
    rates: &RateTable,
) -> Result<LimitCheck, LedgerError> {
    let Some(record) = record else {
        return Ok(LimitCheck::block(LedgerError::IncomeNotSet.to_string()));
    };
    let income = match record.income {
        Some(income) if income != 0.0 => income,
        _ => return Ok(LimitCheck::block(LedgerError::IncomeNotSet.to_string())),
    };

    let converted = rates.convert(amount, currency, Currency::default())?;
    let projected = aggregate::total_expenditure(record, None) + converted;
    if projected > income {
        return Ok(LimitCheck::block(format!(
            "Transaction cannot be recorded! Your total expenditure of ${} exceeds your \
             monthly income of ${}. Please update your income or hold off on new transactions.",
            display_amount(projected),
            display_amount(income)
        )));
    }
    Ok(LimitCheck::pass())
}

/// True when a per-transaction ceiling is set and the converted amount
/// exceeds it. Advisory: the transaction proceeds either way.
#[must_use]
pub fn exceeds_max_transaction_limit(record: &UserRecord, converted_amount: f64) -> bool {
    record
        .budget
        .max_per_txn_spend
        .is_some_and(|limit| converted_amount > limit)
}

/// Picks the budget summary for a user.
///
/// An overall budget wins over category budgets. With neither configured
/// the absence itself is reported as [`LedgerError::BudgetNotConfigured`],
/// never a silent no-op.
pub fn budget_view(record: &UserRecord) -> Result<BudgetView, LedgerError> {
    if let Some(overall) = record.budget.overall {
        return Ok(BudgetView::Overall(overall));
    }
    if let Some(categories) = &record.budget.category {
        if !categories.is_empty() {
            return Ok(BudgetView::Category(categories.clone()));
        }
    }
    Err(LedgerError::BudgetNotConfigured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Budget;

    fn record(income: Option<f64>, data: &[&str]) -> UserRecord {
        UserRecord {
            data: data.iter().map(|line| line.parse().unwrap()).collect(),
            income,
            ..UserRecord::default()
        }
    }

    #[test]
    fn limit_check_blocks_without_income() {
        let rates = RateTable::default();
        let check = check_transaction_limit(None, 100.0, Currency::Usd, &rates).unwrap();
        assert!(check.blocked);
        assert_eq!(check.message.as_deref(), Some(
            "You haven't set your monthly income yet. Please use /income to set your income."
        ));

        let zero = record(Some(0.0), &[]);
        let check = check_transaction_limit(Some(&zero), 100.0, Currency::Usd, &rates).unwrap();
        assert!(check.blocked);
    }

    #[test]
    fn limit_check_blocks_when_projection_exceeds_income() {
        let rates = RateTable::default();
        let user = record(Some(500.0), &["01-Jan-2021,Food,250"]);
        let check = check_transaction_limit(Some(&user), 300.0, Currency::Usd, &rates).unwrap();
        assert!(check.blocked);
        assert_eq!(
            check.message.as_deref(),
            Some(
                "Transaction cannot be recorded! Your total expenditure of $550.0 exceeds your \
                 monthly income of $500.0. Please update your income or hold off on new transactions."
            )
        );
    }

    #[test]
    fn limit_check_passes_silently_within_income() {
        let rates = RateTable::default();
        let user = record(Some(500.0), &["01-Jan-2021,Food,200"]);
        let check = check_transaction_limit(Some(&user), 100.0, Currency::Usd, &rates).unwrap();
        assert!(!check.blocked);
        assert_eq!(check.message, None);
    }

    #[test]
    fn limit_check_converts_before_comparing() {
        let rates = RateTable::default();
        // 100 GBP -> 125 USD pushes a 400-spent/500-income user over.
        let user = record(Some(500.0), &["01-Jan-2021,Food,400"]);
        let check = check_transaction_limit(Some(&user), 100.0, Currency::Gbp, &rates).unwrap();
        assert!(check.blocked);
    }

    #[test]
    fn limit_check_propagates_unsupported_pairs() {
        let rates = RateTable::default();
        let user = record(Some(500.0), &[]);
        assert!(check_transaction_limit(Some(&user), 10.0, Currency::Jpy, &rates).is_err());
    }

    #[test]
    fn max_limit_is_advisory_and_optional() {
        let mut user = record(None, &[]);
        assert!(!exceeds_max_transaction_limit(&user, 150.0));

        user.budget.max_per_txn_spend = Some(100.0);
        assert!(exceeds_max_transaction_limit(&user, 150.0));
        assert!(!exceeds_max_transaction_limit(&user, 100.0));
    }

    #[test]
    fn budget_view_prefers_overall_and_errors_when_empty() {
        let mut user = UserRecord::default();
        assert_eq!(budget_view(&user).unwrap_err(), LedgerError::BudgetNotConfigured);

        let mut categories = BTreeMap::new();
        categories.insert("Food".to_string(), 200.0);
        user.budget = Budget {
            overall: None,
            category: Some(categories.clone()),
            max_per_txn_spend: None,
        };
        assert_eq!(budget_view(&user).unwrap(), BudgetView::Category(categories));

        user.budget.overall = Some(1000.0);
        assert_eq!(budget_view(&user).unwrap(), BudgetView::Overall(1000.0));
    }
}
