use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdvisorError;
use crate::ingestion::TableRow;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum TransactionCategory {
    /// Money coming in (salary, refunds, interest)
    Income,
    /// Money going out (rent, groceries, subscriptions)
    Expense,
}

impl TransactionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionCategory::Income => "Income",
            TransactionCategory::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionCategory {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionCategory::Income),
            "expense" => Ok(TransactionCategory::Expense),
            _ => Err(AdvisorError::InvalidCategory(s.to_string())),
        }
    }
}

/// A single row of the transaction table.
///
/// `amount` is a magnitude. Whether money came in or went out is carried by
/// `category`, never by the sign of the number. Deserialization goes through
/// [`TableRow`] so rows read straight from a table are normalized too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableRow")]
pub struct TransactionRecord {
    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Amount")]
    pub amount: f64,

    #[serde(rename = "Income/Expense")]
    pub category: TransactionCategory,
}

impl TransactionRecord {
    pub fn new(description: impl Into<String>, amount: f64, category: TransactionCategory) -> Self {
        Self {
            description: description.into(),
            amount: amount.abs(),
            category,
        }
    }

    pub fn income(description: impl Into<String>, amount: f64) -> Self {
        Self::new(description, amount, TransactionCategory::Income)
    }

    pub fn expense(description: impl Into<String>, amount: f64) -> Self {
        Self::new(description, amount, TransactionCategory::Expense)
    }

    /// Signed contribution to net cash flow: positive for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.category {
            TransactionCategory::Income => self.amount,
            TransactionCategory::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub lifestyle: String,
    pub hobbies: String,
}

impl UserProfile {
    pub fn new(age: u32, lifestyle: impl Into<String>, hobbies: impl Into<String>) -> Self {
        Self {
            age,
            lifestyle: lifestyle.into(),
            hobbies: hobbies.into(),
        }
    }
}
