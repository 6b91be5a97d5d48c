use std::fs;
use std::path::PathBuf;

use engine::{
    BudgetView, CategoryRegistry, Currency, Ledger, LedgerError, LedgerStore, RateTable,
    Transaction, TransactionUpdate, TransactionVerdict, parse_date,
};
use uuid::Uuid;

fn test_root() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_stores");
    fs::create_dir_all(&root).unwrap();
    root
}

fn test_store() -> LedgerStore {
    LedgerStore::new(test_root().join(format!("store_{}.json", Uuid::new_v4())))
}

fn test_ledger() -> Ledger {
    Ledger::new(test_store(), RateTable::default())
}

fn tx(line: &str) -> Transaction {
    line.parse().unwrap()
}

#[test]
fn load_initializes_missing_store_to_empty_document() {
    let store = test_store();
    assert!(!store.path().exists());

    let records = store.load().unwrap();
    assert!(records.is_empty());
    assert!(store.path().exists());

    // Loading again reads the file it just created.
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn load_accepts_present_but_empty_file() {
    let store = test_store();
    fs::write(store.path(), "").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_load_round_trip_preserves_content() {
    let ledger = test_ledger();
    ledger.set_income("12345", 5000.0).unwrap();
    ledger
        .add_transaction("12345", tx("01-Jan-2021,Food,100"))
        .unwrap();
    ledger
        .add_transaction("12345", tx("02-Jan-2021,Transport,50,EUR"))
        .unwrap();
    ledger.set_overall_budget("12345", 1000.0).unwrap();

    let loaded = ledger.load().unwrap();
    ledger.save(&loaded).unwrap();
    let reloaded = ledger.load().unwrap();
    assert_eq!(loaded, reloaded);

    // Saving what was just loaded leaves the document bytes unchanged.
    let first = fs::read_to_string(ledger.store().path()).unwrap();
    ledger.save(&reloaded).unwrap();
    let second = fs::read_to_string(ledger.store().path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn set_income_creates_the_default_record() {
    let ledger = test_ledger();
    ledger.set_income("12345", 5000.0).unwrap();

    let record = ledger.user_record("12345").unwrap().unwrap();
    assert!(record.data.is_empty());
    assert_eq!(record.budget.overall, None);
    assert_eq!(record.budget.category, None);
    assert_eq!(record.budget.max_per_txn_spend, None);
    assert_eq!(record.income, Some(5000.0));

    // The budget fields are stored as explicit nulls.
    let raw = fs::read_to_string(ledger.store().path()).unwrap();
    assert!(raw.contains("\"overall\": null"));
    assert!(raw.contains("\"max_per_txn_spend\": null"));
}

#[test]
fn user_record_is_none_for_unknown_users() {
    let ledger = test_ledger();
    assert_eq!(ledger.user_record("12345").unwrap(), None);
    assert_eq!(ledger.history("12345").unwrap(), None);
    assert_eq!(ledger.total_expenditure("12345", None).unwrap(), 0.0);
    assert_eq!(ledger.remaining_budget("12345", None).unwrap(), 0.0);
}

#[test]
fn add_transaction_is_rejected_without_income() {
    let ledger = test_ledger();
    let verdict = ledger
        .add_transaction("12345", tx("01-Jan-2021,Food,100"))
        .unwrap();
    assert_eq!(
        verdict,
        TransactionVerdict::Rejected(
            "You haven't set your monthly income yet. Please use /income to set your income."
                .to_string()
        )
    );
    // Nothing was recorded, and no record was created as a side effect.
    assert_eq!(ledger.user_record("12345").unwrap(), None);
}

#[test]
fn add_transaction_is_rejected_over_income() {
    let ledger = test_ledger();
    ledger.set_income("12345", 500.0).unwrap();
    assert_eq!(
        ledger
            .add_transaction("12345", tx("01-Jan-2021,Food,250"))
            .unwrap(),
        TransactionVerdict::Accepted
    );

    let verdict = ledger
        .add_transaction("12345", tx("02-Jan-2021,Transport,300"))
        .unwrap();
    assert_eq!(
        verdict,
        TransactionVerdict::Rejected(
            "Transaction cannot be recorded! Your total expenditure of $550.0 exceeds your \
             monthly income of $500.0. Please update your income or hold off on new transactions."
                .to_string()
        )
    );
    assert_eq!(ledger.history("12345").unwrap().unwrap().len(), 1);
}

#[test]
fn add_transaction_warns_over_the_per_transaction_ceiling() {
    let ledger = test_ledger();
    ledger.set_income("12345", 10000.0).unwrap();
    ledger.set_max_transaction_limit("12345", 100.0).unwrap();

    let verdict = ledger
        .add_transaction("12345", tx("01-Jan-2021,Food,150"))
        .unwrap();
    assert_eq!(
        verdict,
        TransactionVerdict::Warned(
            "Warning! You went over your transaction spend limit.".to_string()
        )
    );
    // Advisory only: the transaction was still recorded.
    assert_eq!(ledger.history("12345").unwrap().unwrap().len(), 1);
}

#[test]
fn totals_and_remaining_budget_follow_the_stored_data() {
    let ledger = test_ledger();
    ledger.set_income("12345", 1000.0).unwrap();
    for line in [
        "01-Jan-2021,Food,100",
        "02-Jan-2021,Transport,50",
        "03-Jan-2021,Food,75",
    ] {
        assert_eq!(
            ledger.add_transaction("12345", tx(line)).unwrap(),
            TransactionVerdict::Accepted
        );
    }

    assert_eq!(ledger.total_expenditure("12345", None).unwrap(), 225.0);
    assert_eq!(ledger.total_expenditure("12345", Some("Food")).unwrap(), 175.0);
    assert_eq!(ledger.remaining_budget("12345", None).unwrap(), 775.0);
}

#[test]
fn check_transaction_limit_reports_without_recording() {
    let ledger = test_ledger();
    let check = ledger
        .check_transaction_limit("12345", 100.0, Currency::Usd)
        .unwrap();
    assert!(check.blocked);

    ledger.set_income("12345", 500.0).unwrap();
    let check = ledger
        .check_transaction_limit("12345", 100.0, Currency::Usd)
        .unwrap();
    assert!(!check.blocked);
    assert_eq!(check.message, None);
    assert_eq!(ledger.history("12345").unwrap(), None);
}

#[test]
fn budget_view_selection_and_absence() {
    let ledger = test_ledger();
    assert_eq!(
        ledger.budget_view("12345").unwrap_err(),
        LedgerError::BudgetNotConfigured
    );

    ledger.set_category_budget("12345", "Food", 200.0).unwrap();
    match ledger.budget_view("12345").unwrap() {
        BudgetView::Category(categories) => {
            assert_eq!(categories.get("Food"), Some(&200.0));
        }
        other => panic!("expected category view, got {other:?}"),
    }

    ledger.set_overall_budget("12345", 1000.0).unwrap();
    assert_eq!(
        ledger.budget_view("12345").unwrap(),
        BudgetView::Overall(1000.0)
    );
}

#[test]
fn edit_transaction_updates_one_field_at_a_time() {
    let ledger = test_ledger();
    ledger.set_income("12345", 5000.0).unwrap();
    ledger
        .add_transaction("12345", tx("2023-10-31,Food,10.00"))
        .unwrap();

    ledger
        .edit_transaction("12345", 0, TransactionUpdate::Date(parse_date("01-Nov-2023").unwrap()))
        .unwrap();
    ledger
        .edit_transaction("12345", 0, TransactionUpdate::Category("Transport".to_string()))
        .unwrap();
    ledger
        .edit_transaction("12345", 0, TransactionUpdate::Amount(15.0))
        .unwrap();

    let history = ledger.history("12345").unwrap().unwrap();
    assert_eq!(history[0].to_string(), "01-Nov-2023,Transport,15.0");

    assert!(matches!(
        ledger.edit_transaction("12345", 7, TransactionUpdate::Amount(1.0)),
        Err(LedgerError::KeyNotFound(_))
    ));
    assert!(matches!(
        ledger.edit_transaction("99999", 0, TransactionUpdate::Amount(1.0)),
        Err(LedgerError::KeyNotFound(_))
    ));
}

#[test]
fn delete_history_clears_transactions_only() {
    let ledger = test_ledger();
    ledger.set_income("12345", 5000.0).unwrap();
    ledger
        .add_transaction("12345", tx("01-Jan-2021,Food,100"))
        .unwrap();

    ledger.delete_history("12345").unwrap();
    assert_eq!(ledger.history("12345").unwrap(), None);

    let record = ledger.user_record("12345").unwrap().unwrap();
    assert_eq!(record.income, Some(5000.0));
}

#[test]
fn preferred_currency_defaults_to_usd() {
    let ledger = test_ledger();
    assert_eq!(ledger.preferred_currency("12345").unwrap(), Currency::Usd);

    ledger
        .set_preferred_currency("12345", Currency::Eur)
        .unwrap();
    assert_eq!(ledger.preferred_currency("12345").unwrap(), Currency::Eur);
}

#[test]
fn category_registry_add_list_delete() {
    let registry =
        CategoryRegistry::new(test_root().join(format!("categories_{}.txt", Uuid::new_v4())));
    assert!(registry.list().unwrap().is_empty());

    registry.add("Food").unwrap();
    registry.add("Transport").unwrap();
    assert_eq!(registry.list().unwrap(), vec!["Food", "Transport"]);
    assert_eq!(
        registry.add("Food").unwrap_err(),
        LedgerError::ExistingKey("Food".to_string())
    );

    registry.delete("Food").unwrap();
    assert_eq!(registry.list().unwrap(), vec!["Transport"]);
    assert_eq!(
        registry.delete("Food").unwrap_err(),
        LedgerError::KeyNotFound("Food".to_string())
    );
}
