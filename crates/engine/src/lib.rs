//! Ledger & budget engine.
//!
//! The engine owns the persistent per-user transaction store, the
//! aggregation and projection math, the currency normalization layer, and
//! the constraint checks run before a transaction is accepted. Everything
//! conversational sits above it and consumes plain strings, numbers, and
//! records.

pub use aggregate::{project_spending, remaining_budget, total_expenditure};
pub use categories::CategoryRegistry;
pub use currency::{Currency, RateTable};
pub use enforce::{
    BudgetView, LimitCheck, MAX_SPEND_WARNING, TransactionVerdict, budget_view,
    check_transaction_limit, exceeds_max_transaction_limit,
};
pub use error::LedgerError;
pub use record::{
    Budget, Transaction, TransactionUpdate, UserRecord, display_amount, parse_amount, parse_date,
};
pub use store::{LedgerStore, Records};

mod aggregate;
mod categories;
mod currency;
mod enforce;
mod error;
mod record;
mod store;

type ResultLedger<T> = Result<T, LedgerError>;

/// Facade combining the persistent store with the conversion table.
///
/// The store and rate table are injected, never module-level state, so
/// hosts and tests can run as many independent ledgers as they like. Each
/// operation runs load -> compute -> (optionally) save to completion;
/// callers invoking the engine concurrently must serialize mutations per
/// store themselves.
#[derive(Clone, Debug)]
pub struct Ledger {
    store: LedgerStore,
    rates: RateTable,
}

impl Ledger {
    pub fn new(store: LedgerStore, rates: RateTable) -> Self {
        Self { store, rates }
    }

    #[must_use]
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Loads the full user-record document.
    pub fn load(&self) -> ResultLedger<Records> {
        self.store.load()
    }

    /// Overwrites the full user-record document.
    pub fn save(&self, records: &Records) -> ResultLedger<()> {
        self.store.save(records)
    }

    /// Returns the stored record for `user_id`, `None` when the user has
    /// never interacted.
    pub fn user_record(&self, user_id: &str) -> ResultLedger<Option<UserRecord>> {
        Ok(self.load()?.get(user_id).cloned())
    }

    /// Transactions for `user_id`, `None` when the user is absent or has
    /// no transactions.
    pub fn history(&self, user_id: &str) -> ResultLedger<Option<Vec<Transaction>>> {
        Ok(self
            .user_record(user_id)?
            .map(|record| record.data)
            .filter(|data| !data.is_empty()))
    }

    pub fn preferred_currency(&self, user_id: &str) -> ResultLedger<Currency> {
        Ok(self
            .user_record(user_id)?
            .and_then(|record| record.preferred_currency)
            .unwrap_or_default())
    }

    /// Converts an amount through the injected rate table.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> ResultLedger<f64> {
        self.rates.convert(amount, from, to)
    }

    /// Sets monthly income, creating the record on first interaction.
    pub fn set_income(&self, user_id: &str, income: f64) -> ResultLedger<()> {
        self.update_record(user_id, |record| {
            record.income = Some(income);
            Ok(())
        })
    }

    pub fn set_overall_budget(&self, user_id: &str, amount: f64) -> ResultLedger<()> {
        self.update_record(user_id, |record| {
            record.budget.overall = Some(amount);
            Ok(())
        })
    }

    pub fn set_category_budget(&self, user_id: &str, category: &str, amount: f64) -> ResultLedger<()> {
        self.update_record(user_id, |record| {
            record
                .budget
                .category
                .get_or_insert_with(Default::default)
                .insert(category.to_string(), amount);
            Ok(())
        })
    }

    pub fn set_max_transaction_limit(&self, user_id: &str, amount: f64) -> ResultLedger<()> {
        self.update_record(user_id, |record| {
            record.budget.max_per_txn_spend = Some(amount);
            Ok(())
        })
    }

    pub fn set_preferred_currency(&self, user_id: &str, currency: Currency) -> ResultLedger<()> {
        self.update_record(user_id, |record| {
            record.preferred_currency = Some(currency);
            Ok(())
        })
    }

    /// Runs the enforcement pipeline and appends the transaction unless it
    /// is rejected.
    ///
    /// The income affordability check blocks; the per-transaction ceiling
    /// only warns and the transaction is recorded anyway.
    pub fn add_transaction(&self, user_id: &str, tx: Transaction) -> ResultLedger<TransactionVerdict> {
        let mut records = self.load()?;

        let check = enforce::check_transaction_limit(
            records.get(user_id),
            tx.amount,
            tx.currency_or_default(),
            &self.rates,
        )?;
        if check.blocked {
            let message = check
                .message
                .unwrap_or_else(|| LedgerError::IncomeNotSet.to_string());
            return Ok(TransactionVerdict::Rejected(message));
        }

        let converted = self
            .rates
            .convert(tx.amount, tx.currency_or_default(), Currency::default())?;
        let record = records.entry(user_id.to_string()).or_default();
        let warned = enforce::exceeds_max_transaction_limit(record, converted);
        record.data.push(tx);
        self.save(&records)?;

        Ok(if warned {
            TransactionVerdict::Warned(MAX_SPEND_WARNING.to_string())
        } else {
            TransactionVerdict::Accepted
        })
    }

    /// Face-value expenditure total, `0.0` for an absent user.
    pub fn total_expenditure(&self, user_id: &str, category: Option<&str>) -> ResultLedger<f64> {
        Ok(self
            .user_record(user_id)?
            .map(|record| aggregate::total_expenditure(&record, category))
            .unwrap_or(0.0))
    }

    pub fn remaining_budget(&self, user_id: &str, category: Option<&str>) -> ResultLedger<f64> {
        Ok(self
            .user_record(user_id)?
            .map(|record| aggregate::remaining_budget(&record, category))
            .unwrap_or(0.0))
    }

    /// Income affordability check without recording anything.
    pub fn check_transaction_limit(
        &self,
        user_id: &str,
        amount: f64,
        currency: Currency,
    ) -> ResultLedger<LimitCheck> {
        let records = self.load()?;
        enforce::check_transaction_limit(records.get(user_id), amount, currency, &self.rates)
    }

    /// Budget summary selection; an unconfigured budget is an error, not a
    /// silent no-op.
    pub fn budget_view(&self, user_id: &str) -> ResultLedger<BudgetView> {
        match self.user_record(user_id)? {
            Some(record) => enforce::budget_view(&record),
            None => Err(LedgerError::BudgetNotConfigured),
        }
    }

    /// Applies a single-field update to the `index`-th transaction (entry
    /// order) and re-persists the document.
    pub fn edit_transaction(
        &self,
        user_id: &str,
        index: usize,
        update: TransactionUpdate,
    ) -> ResultLedger<()> {
        let mut records = self.load()?;
        let record = records
            .get_mut(user_id)
            .ok_or_else(|| LedgerError::KeyNotFound(user_id.to_string()))?;
        let tx = record
            .data
            .get_mut(index)
            .ok_or_else(|| LedgerError::KeyNotFound(format!("transaction {index}")))?;
        match update {
            TransactionUpdate::Date(date) => tx.date = date,
            TransactionUpdate::Category(category) => tx.category = category,
            TransactionUpdate::Amount(amount) => tx.amount = amount,
        }
        self.save(&records)
    }

    /// Clears every stored transaction for the user; budget settings and
    /// income stay in place.
    pub fn delete_history(&self, user_id: &str) -> ResultLedger<()> {
        let mut records = self.load()?;
        let record = records
            .get_mut(user_id)
            .ok_or_else(|| LedgerError::KeyNotFound(user_id.to_string()))?;
        record.data.clear();
        self.save(&records)
    }

    fn update_record<T>(
        &self,
        user_id: &str,
        apply: impl FnOnce(&mut UserRecord) -> ResultLedger<T>,
    ) -> ResultLedger<T> {
        let mut records = self.load()?;
        let record = records.entry(user_id.to_string()).or_default();
        let value = apply(record)?;
        self.save(&records)?;
        Ok(value)
    }
}
