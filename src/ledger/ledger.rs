use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::transaction::{Transaction, TransactionKind};

/// In-memory session state: the category and transaction collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            categories: Vec::new(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Starting state for a fresh session: three categories and four
    /// transactions, with the salary entry left uncategorised.
    pub fn with_defaults() -> Self {
        let mut ledger = Self::new();
        let savings = ledger.add_category(Category::new("Savings"));
        let school = ledger.add_category(Category::new("School"));
        let food = ledger.add_category(Category::new("Food"));

        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or_default();
        ledger.add_transaction(Transaction::new(
            "Salary",
            3000.0,
            day(1),
            None,
            TransactionKind::Income,
        ));
        ledger.add_transaction(Transaction::new(
            "Groceries",
            150.0,
            day(2),
            Some(food),
            TransactionKind::Expense,
        ));
        ledger.add_transaction(Transaction::new(
            "Tuition",
            500.0,
            day(3),
            Some(school),
            TransactionKind::Expense,
        ));
        ledger.add_transaction(Transaction::new(
            "Investment Return",
            200.0,
            day(4),
            Some(savings),
            TransactionKind::Income,
        ));
        ledger
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
