//! Business logic helpers for managing transactions.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::transaction::{validate_amount, NewTransaction, Transaction, TransactionPatch};
use crate::ledger::Ledger;

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Records a transaction built from `draft`, returning the stored record.
    /// `today` supplies the date when the draft leaves it out.
    pub fn add(
        ledger: &mut Ledger,
        draft: NewTransaction,
        today: NaiveDate,
    ) -> Result<Transaction, LedgerError> {
        let amount = validate_amount(draft.amount)?;
        if let Some(category_id) = draft.category_id {
            if ledger.category(category_id).is_none() {
                return Err(LedgerError::CategoryNotFound(category_id));
            }
        }
        let date = draft.date.unwrap_or(today);
        let transaction = Transaction::new(draft.name, amount, date, draft.category_id, draft.kind);
        let stored = transaction.clone();
        ledger.add_transaction(transaction);
        Ok(stored)
    }

    /// Applies `patch` to the transaction identified by `id`; fields the
    /// patch leaves out keep their current value.
    pub fn update(
        ledger: &mut Ledger,
        id: Uuid,
        patch: TransactionPatch,
    ) -> Result<(), LedgerError> {
        if let Some(amount) = patch.amount {
            validate_amount(amount)?;
        }
        if let Some(Some(category_id)) = patch.category_id {
            if ledger.category(category_id).is_none() {
                return Err(LedgerError::CategoryNotFound(category_id));
            }
        }
        let txn = ledger
            .transaction_mut(id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        if !patch.has_effect() {
            return Ok(());
        }
        if let Some(name) = patch.name {
            txn.name = name;
        }
        if let Some(amount) = patch.amount {
            txn.amount = amount;
        }
        if let Some(date) = patch.date {
            txn.date = date;
        }
        if let Some(category_id) = patch.category_id {
            txn.category_id = category_id;
        }
        if let Some(kind) = patch.kind {
            txn.kind = kind;
        }
        ledger.touch();
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Result<Transaction, LedgerError> {
        let index = ledger
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        let removed = ledger.transactions.remove(index);
        ledger.touch();
        Ok(removed)
    }

    /// Returns a snapshot of the ledger's transactions.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }
}
