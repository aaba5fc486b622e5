use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// A single dated money movement, categorised or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        category_id: Option<Uuid>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            date,
            category_id,
            kind,
        }
    }

    /// Amount with the direction applied: income positive, expense negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Direction of a transaction; the stored amount itself stays non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

/// Payload for recording a transaction; the service fills in the id and
/// falls back to today's date when none is given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub name: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub fn new(name: impl Into<String>, amount: f64, kind: TransactionKind) -> Self {
        Self {
            name: name.into(),
            amount,
            date: None,
            category_id: None,
            kind,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Partial update for a transaction; absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// `Some(None)` clears the category link, `Some(Some(id))` repoints it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<Uuid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
}

impl TransactionPatch {
    pub fn has_effect(&self) -> bool {
        self.name.is_some()
            || self.amount.is_some()
            || self.date.is_some()
            || self.category_id.is_some()
            || self.kind.is_some()
    }
}

/// Checks that an amount can be stored without corrupting the aggregates.
pub(crate) fn validate_amount(amount: f64) -> Result<f64, LedgerError> {
    if !amount.is_finite() {
        return Err(LedgerError::InvalidAmount(
            "amount must be a finite number".to_string(),
        ));
    }
    if amount < 0.0 {
        return Err(LedgerError::InvalidAmount(
            "amount must not be negative; direction comes from the transaction kind".to_string(),
        ));
    }
    Ok(amount)
}

/// Parses a user-supplied amount string into a storable value.
pub fn parse_amount(value: &str) -> Result<f64, LedgerError> {
    let trimmed = value.trim();
    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(format!("`{trimmed}` is not a number")))?;
    validate_amount(parsed)
}
