//! Business logic helpers for managing categories.

use tracing::debug;
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::category::{Category, NewCategory};
use crate::ledger::Ledger;

/// Minimum length of a category name after trimming.
const MIN_NAME_LEN: usize = 2;

/// Outcome of a category removal, including how many linked transactions
/// the cascade took with it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRemoval {
    pub category: Category,
    pub removed_transactions: usize,
}

/// Provides validated CRUD helpers for ledger categories.
pub struct CategoryService;

impl CategoryService {
    /// Adds a category built from `draft`, returning the stored record.
    pub fn add(ledger: &mut Ledger, draft: NewCategory) -> Result<Category, LedgerError> {
        let name = Self::validate_name(&draft.name)?;
        let mut category = Category::new(name);
        category.description = draft
            .description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        if let Some(icon) = draft.icon {
            category.icon = icon;
        }
        let stored = category.clone();
        ledger.add_category(category);
        Ok(stored)
    }

    /// Removes the category identified by `id` along with every transaction
    /// that references it, in one step.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Result<CategoryRemoval, LedgerError> {
        let index = ledger
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or(LedgerError::CategoryNotFound(id))?;
        let category = ledger.categories.remove(index);
        let before = ledger.transactions.len();
        ledger.transactions.retain(|txn| txn.category_id != Some(id));
        let removed_transactions = before - ledger.transactions.len();
        if removed_transactions > 0 {
            debug!(
                "cascade removed {} transaction(s) linked to `{}`",
                removed_transactions, category.name
            );
        }
        ledger.touch();
        Ok(CategoryRemoval {
            category,
            removed_transactions,
        })
    }

    /// Returns a snapshot of the ledger's categories.
    pub fn list(ledger: &Ledger) -> Vec<&Category> {
        ledger.categories.iter().collect()
    }

    fn validate_name(candidate: &str) -> Result<String, LedgerError> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::InvalidName("name is required".into()));
        }
        if trimmed.chars().count() < MIN_NAME_LEN {
            return Err(LedgerError::InvalidName(format!(
                "name must be at least {MIN_NAME_LEN} characters"
            )));
        }
        Ok(trimmed.to_string())
    }
}
