//! Ledger domain models, derived views, and period helpers.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod summary;
pub mod transaction;

pub use category::{Category, NewCategory, DEFAULT_CATEGORY_ICON};
pub use ledger::Ledger;
pub use period::Period;
pub use summary::{CategoryRollup, LedgerSummary, PeriodSummary, TransactionFilter};
pub use transaction::{
    parse_amount, NewTransaction, Transaction, TransactionKind, TransactionPatch,
};
