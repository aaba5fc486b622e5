use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::period::Period;
use super::transaction::TransactionKind;

/// Income and expense rollup for a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRollup {
    pub category_id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub icon: String,
    pub income_total: f64,
    pub expense_total: f64,
    pub net_total: f64,
}

impl CategoryRollup {
    pub fn from_parts(category: &Category, income_total: f64, expense_total: f64) -> Self {
        Self {
            category_id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            income_total,
            expense_total,
            net_total: income_total - expense_total,
        }
    }
}

/// Ledger-wide totals plus per-category rollups in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub remaining_balance: f64,
    pub category_totals: Vec<CategoryRollup>,
    pub uncategorized_transactions: usize,
}

/// Criteria for scoping a transaction view; `kind: None` keeps both
/// directions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub period: Period,
}

impl TransactionFilter {
    /// Filter that matches every transaction.
    pub fn all() -> Self {
        Self {
            kind: None,
            period: Period::All,
        }
    }

    pub fn for_period(period: Period) -> Self {
        Self { kind: None, period }
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Totals over a filtered transaction view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub period: Period,
    pub total_income: f64,
    pub total_expenses: f64,
    pub remaining_balance: f64,
    pub matching_transactions: usize,
}
