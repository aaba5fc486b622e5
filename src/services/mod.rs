//! Validated operations over the ledger's collections. Services check
//! inputs before touching state, so a failed call leaves the ledger as
//! it was.

pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::{CategoryRemoval, CategoryService};
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
