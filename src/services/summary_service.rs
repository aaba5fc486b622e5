//! Derived totals and filtered views over the ledger.

use chrono::NaiveDate;

use crate::ledger::summary::{CategoryRollup, LedgerSummary, PeriodSummary, TransactionFilter};
use crate::ledger::transaction::{Transaction, TransactionKind};
use crate::ledger::{Ledger, Period};

/// Computes read-only aggregates; never mutates the ledger.
pub struct SummaryService;

impl SummaryService {
    /// Ledger-wide totals plus one rollup per category, in insertion order.
    /// Categories without activity still appear, with zeroed totals.
    pub fn totals(ledger: &Ledger) -> LedgerSummary {
        let total_income = sum_kind(&ledger.transactions, TransactionKind::Income);
        let total_expenses = sum_kind(&ledger.transactions, TransactionKind::Expense);
        let category_totals = ledger
            .categories
            .iter()
            .map(|category| {
                let mut income_total = 0.0;
                let mut expense_total = 0.0;
                for txn in ledger
                    .transactions
                    .iter()
                    .filter(|txn| txn.category_id == Some(category.id))
                {
                    match txn.kind {
                        TransactionKind::Income => income_total += txn.amount,
                        TransactionKind::Expense => expense_total += txn.amount,
                    }
                }
                CategoryRollup::from_parts(category, income_total, expense_total)
            })
            .collect();
        let uncategorized_transactions = ledger
            .transactions
            .iter()
            .filter(|txn| txn.category_id.is_none())
            .count();
        LedgerSummary {
            total_income,
            total_expenses,
            remaining_balance: total_income - total_expenses,
            category_totals,
            uncategorized_transactions,
        }
    }

    /// Transactions whose date falls inside the `period` window ending at
    /// `today`, preserving relative order.
    pub fn filter_by_period<'a>(
        transactions: &'a [Transaction],
        period: Period,
        today: NaiveDate,
    ) -> Vec<&'a Transaction> {
        match period.start_from(today) {
            Some(start) => transactions.iter().filter(|txn| txn.date >= start).collect(),
            None => transactions.iter().collect(),
        }
    }

    /// Applies the kind and period criteria, preserving relative order.
    pub fn filtered<'a>(
        ledger: &'a Ledger,
        filter: &TransactionFilter,
        today: NaiveDate,
    ) -> Vec<&'a Transaction> {
        ledger
            .transactions
            .iter()
            .filter(|txn| filter.kind.map_or(true, |kind| txn.kind == kind))
            .filter(|txn| filter.period.contains(txn.date, today))
            .collect()
    }

    /// Totals over the filtered view, the way the history screen reports them.
    pub fn summarize_period(
        ledger: &Ledger,
        filter: &TransactionFilter,
        today: NaiveDate,
    ) -> PeriodSummary {
        let matching = Self::filtered(ledger, filter, today);
        let total_income = sum_kind(matching.iter().copied(), TransactionKind::Income);
        let total_expenses = sum_kind(matching.iter().copied(), TransactionKind::Expense);
        PeriodSummary {
            period: filter.period,
            total_income,
            total_expenses,
            remaining_balance: total_income - total_expenses,
            matching_transactions: matching.len(),
        }
    }
}

fn sum_kind<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    kind: TransactionKind,
) -> f64 {
    transactions
        .into_iter()
        .filter(|txn| txn.kind == kind)
        .map(|txn| txn.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::transaction::TransactionKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn totals_for_the_default_session() {
        let ledger = Ledger::with_defaults();
        let summary = SummaryService::totals(&ledger);
        assert_eq!(summary.total_income, 3200.0);
        assert_eq!(summary.total_expenses, 650.0);
        assert_eq!(summary.remaining_balance, 2550.0);
        assert_eq!(summary.uncategorized_transactions, 1);
    }

    #[test]
    fn rollups_keep_category_insertion_order() {
        let ledger = Ledger::with_defaults();
        let summary = SummaryService::totals(&ledger);
        let names: Vec<&str> = summary
            .category_totals
            .iter()
            .map(|rollup| rollup.name.as_str())
            .collect();
        assert_eq!(names, vec!["Savings", "School", "Food"]);
    }

    #[test]
    fn rollup_nets_income_against_expenses() {
        let ledger = Ledger::with_defaults();
        let summary = SummaryService::totals(&ledger);
        let food = summary
            .category_totals
            .iter()
            .find(|rollup| rollup.name == "Food")
            .unwrap();
        assert_eq!(food.income_total, 0.0);
        assert_eq!(food.expense_total, 150.0);
        assert_eq!(food.net_total, -150.0);

        let savings = summary
            .category_totals
            .iter()
            .find(|rollup| rollup.name == "Savings")
            .unwrap();
        assert_eq!(savings.income_total, 200.0);
        assert_eq!(savings.net_total, 200.0);
    }

    #[test]
    fn totals_of_an_empty_ledger_are_zero() {
        let summary = SummaryService::totals(&Ledger::new());
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.remaining_balance, 0.0);
        assert!(summary.category_totals.is_empty());
        assert_eq!(summary.uncategorized_transactions, 0);
    }

    #[test]
    fn filtered_narrows_by_kind() {
        let ledger = Ledger::with_defaults();
        let filter = TransactionFilter::all().with_kind(TransactionKind::Expense);
        let expenses = SummaryService::filtered(&ledger, &filter, today());
        assert_eq!(expenses.len(), 2);
        assert!(expenses
            .iter()
            .all(|txn| txn.kind == TransactionKind::Expense));
    }

    #[test]
    fn summarize_period_counts_the_matching_view() {
        let ledger = Ledger::with_defaults();
        let filter = TransactionFilter::all();
        let summary = SummaryService::summarize_period(&ledger, &filter, today());
        assert_eq!(summary.matching_transactions, 4);
        assert_eq!(summary.remaining_balance, 2550.0);
    }
}
