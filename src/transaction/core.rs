//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

/// Identifier for a transaction, unique among the transactions held by a
/// [TransactionManager](super::TransactionManager).
pub type TransactionId = i64;

/// Whether money was earned (a sale) or spent (a purchase).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Money earned, e.g. selling a pair of sneakers.
    Income,
    /// Money spent, e.g. buying a pair of sneakers to resell.
    Expense,
}

impl TransactionType {
    /// The value used for this type in forms and the table.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    /// Parse the exact, lowercase form value. The error holds the rejected input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(other.to_owned()),
        }
    }
}

/// A single financial record: one sneaker purchase or sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened, as entered in the form, e.g. "2023-10-01".
    pub date: String,
    /// The amount of money spent or earned, never negative.
    pub amount: f64,
    /// Whether the amount was earned or spent.
    pub type_: TransactionType,
    /// A free-text label, typically the brand, e.g. "Nike".
    pub category: String,
}

/// The validated fields of a transaction, before it has been given an ID.
///
/// Produced by [validate](super::validate) and consumed by
/// [TransactionManager::submit](super::TransactionManager::submit).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A non-empty date string.
    pub date: String,
    /// A finite amount, zero or greater.
    pub amount: f64,
    /// Income or expense.
    pub type_: TransactionType,
    /// A non-empty label.
    pub category: String,
}

impl NewTransaction {
    /// Attach `id` to the fields to make a [Transaction].
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            type_: self.type_,
            category: self.category,
        }
    }
}

/// The placeholder transactions the ledger starts with.
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            date: "2023-10-01".to_owned(),
            amount: 200.0,
            type_: TransactionType::Income,
            category: "Nike".to_owned(),
        },
        Transaction {
            id: 2,
            date: "2023-10-02".to_owned(),
            amount: 150.0,
            type_: TransactionType::Expense,
            category: "Adidas".to_owned(),
        },
    ]
}
