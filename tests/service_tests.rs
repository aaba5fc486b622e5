use chrono::NaiveDate;
use uuid::Uuid;
use walletlog_core::{
    errors::LedgerError,
    ledger::{
        parse_amount, Ledger, NewCategory, NewTransaction, TransactionKind, TransactionPatch,
    },
    services::{CategoryService, SummaryService, TransactionService},
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

#[test]
fn session_bootstrap_matches_the_documented_defaults() {
    let ledger = Ledger::with_defaults();
    assert_eq!(ledger.category_count(), 3);
    assert_eq!(ledger.transaction_count(), 4);

    let salary = ledger
        .transactions
        .iter()
        .find(|txn| txn.name == "Salary")
        .expect("seed includes a salary entry");
    assert_eq!(salary.kind, TransactionKind::Income);
    assert!(salary.category_id.is_none());

    let summary = SummaryService::totals(&ledger);
    assert_eq!(summary.total_income, 3200.0);
    assert_eq!(summary.total_expenses, 650.0);
    assert_eq!(summary.remaining_balance, 2550.0);
}

#[test]
fn adding_a_category_then_spending_against_it() {
    let mut ledger = Ledger::with_defaults();
    let rent = CategoryService::add(
        &mut ledger,
        NewCategory::new("Rent").with_icon("🏠"),
    )
    .unwrap();

    TransactionService::add(
        &mut ledger,
        NewTransaction::new("January rent", 900.0, TransactionKind::Expense)
            .with_category(rent.id),
        today(),
    )
    .unwrap();

    let summary = SummaryService::totals(&ledger);
    assert_eq!(summary.total_expenses, 1550.0);
    assert_eq!(summary.remaining_balance, 1650.0);

    let rollup = summary
        .category_totals
        .iter()
        .find(|rollup| rollup.category_id == rent.id)
        .expect("new category appears in the rollups");
    assert_eq!(rollup.expense_total, 900.0);
    assert_eq!(rollup.net_total, -900.0);
    assert_eq!(rollup.icon, "🏠");
}

#[test]
fn cascade_delete_keeps_referential_consistency() {
    let mut ledger = Ledger::with_defaults();
    let school = ledger
        .categories
        .iter()
        .find(|category| category.name == "School")
        .map(|category| category.id)
        .unwrap();

    let removal = CategoryService::remove(&mut ledger, school).unwrap();
    assert_eq!(removal.removed_transactions, 1);
    assert_eq!(ledger.transaction_count(), 3);
    assert!(ledger
        .transactions
        .iter()
        .all(|txn| txn.category_id != Some(school)));

    let summary = SummaryService::totals(&ledger);
    assert_eq!(summary.total_expenses, 150.0);
    assert!(summary
        .category_totals
        .iter()
        .all(|rollup| rollup.category_id != school));
}

#[test]
fn failed_operations_leave_the_session_untouched() {
    let mut ledger = Ledger::with_defaults();
    let categories = ledger.categories.clone();
    let transactions = ledger.transactions.clone();

    let ghost = Uuid::new_v4();
    assert!(matches!(
        CategoryService::remove(&mut ledger, ghost),
        Err(LedgerError::CategoryNotFound(_))
    ));
    assert!(matches!(
        TransactionService::remove(&mut ledger, ghost),
        Err(LedgerError::TransactionNotFound(_))
    ));
    assert!(matches!(
        TransactionService::add(
            &mut ledger,
            NewTransaction::new("Orphan", 10.0, TransactionKind::Expense).with_category(ghost),
            today(),
        ),
        Err(LedgerError::CategoryNotFound(_))
    ));
    assert!(matches!(
        TransactionService::add(
            &mut ledger,
            NewTransaction::new("Negative", -10.0, TransactionKind::Expense),
            today(),
        ),
        Err(LedgerError::InvalidAmount(_))
    ));
    assert!(matches!(
        CategoryService::add(&mut ledger, NewCategory::new(" ")),
        Err(LedgerError::InvalidName(_))
    ));

    assert_eq!(ledger.categories, categories);
    assert_eq!(ledger.transactions, transactions);
}

#[test]
fn update_repoints_and_clears_category_links() {
    let mut ledger = Ledger::with_defaults();
    let food = ledger
        .categories
        .iter()
        .find(|category| category.name == "Food")
        .map(|category| category.id)
        .unwrap();
    let savings = ledger
        .categories
        .iter()
        .find(|category| category.name == "Savings")
        .map(|category| category.id)
        .unwrap();
    let groceries = ledger
        .transactions
        .iter()
        .find(|txn| txn.name == "Groceries")
        .map(|txn| txn.id)
        .unwrap();

    TransactionService::update(
        &mut ledger,
        groceries,
        TransactionPatch {
            category_id: Some(Some(savings)),
            ..TransactionPatch::default()
        },
    )
    .unwrap();
    assert_eq!(
        ledger.transaction(groceries).unwrap().category_id,
        Some(savings)
    );

    TransactionService::update(
        &mut ledger,
        groceries,
        TransactionPatch {
            category_id: Some(None),
            ..TransactionPatch::default()
        },
    )
    .unwrap();
    assert!(ledger.transaction(groceries).unwrap().category_id.is_none());

    let summary = SummaryService::totals(&ledger);
    let food_rollup = summary
        .category_totals
        .iter()
        .find(|rollup| rollup.category_id == food)
        .unwrap();
    assert_eq!(food_rollup.expense_total, 0.0);
    assert_eq!(summary.uncategorized_transactions, 2);
}

#[test]
fn form_inputs_flow_through_parsing_into_the_store() {
    let mut ledger = Ledger::with_defaults();
    let food = ledger
        .categories
        .iter()
        .find(|category| category.name == "Food")
        .map(|category| category.id)
        .unwrap();

    let amount = parse_amount(" 4.50 ").unwrap();
    let txn = TransactionService::add(
        &mut ledger,
        NewTransaction::new("Coffee", amount, TransactionKind::Expense).with_category(food),
        today(),
    )
    .unwrap();

    assert_eq!(txn.amount, 4.5);
    assert_eq!(txn.date, today());
    assert_eq!(txn.category_id, Some(food));
    assert!(parse_amount("4,50").is_err());
}

#[test]
fn removing_twice_reports_not_found_without_side_effects() {
    let mut ledger = Ledger::with_defaults();
    let tuition = ledger
        .transactions
        .iter()
        .find(|txn| txn.name == "Tuition")
        .map(|txn| txn.id)
        .unwrap();

    TransactionService::remove(&mut ledger, tuition).unwrap();
    let after_first = ledger.transactions.clone();

    let err = TransactionService::remove(&mut ledger, tuition)
        .expect_err("second removal must report not found");
    assert!(matches!(err, LedgerError::TransactionNotFound(_)));
    assert_eq!(ledger.transactions, after_first);
}
