use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{TransactionCategory, TransactionRecord};

const TOP_EXPENSES: usize = 5;

/// Aggregate view of a transaction set, rendered in the same lightweight
/// markup the report understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub transaction_count: usize,
    pub total_income: f64,
    pub total_expenses: f64,
    /// Expense totals grouped by description, largest first
    pub top_expenses: Vec<(String, f64)>,
}

impl FinancialSummary {
    pub fn from_transactions(transactions: &[TransactionRecord]) -> Self {
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;
        let mut by_description: BTreeMap<&str, f64> = BTreeMap::new();

        for record in transactions {
            match record.category {
                TransactionCategory::Income => total_income += record.amount,
                TransactionCategory::Expense => {
                    total_expenses += record.amount;
                    *by_description.entry(record.description.as_str()).or_insert(0.0) += record.amount;
                }
            }
        }

        let mut top_expenses: Vec<(String, f64)> = by_description
            .into_iter()
            .map(|(name, total)| (name.to_string(), total))
            .collect();
        // Stable sort keeps alphabetical order among equal totals.
        top_expenses.sort_by(|a, b| b.1.total_cmp(&a.1));
        top_expenses.truncate(TOP_EXPENSES);

        Self {
            transaction_count: transactions.len(),
            total_income,
            total_expenses,
            top_expenses,
        }
    }

    pub fn net_cash_flow(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    /// Savings rate as a fraction of income, if there was any income.
    pub fn savings_rate(&self) -> Option<f64> {
        (self.total_income > 0.0).then(|| self.net_cash_flow() / self.total_income)
    }

    pub fn to_markup(&self) -> String {
        let mut text = String::from("### Overview\n");
        text.push_str(&format!("**Transactions:** {}\n", self.transaction_count));
        text.push_str(&format!("**Total income:** {:.2}\n", self.total_income));
        text.push_str(&format!("**Total expenses:** {:.2}\n", self.total_expenses));
        text.push_str(&format!("**Net cash flow:** {:.2}", self.net_cash_flow()));
        if let Some(rate) = self.savings_rate() {
            text.push_str(&format!("\n**Savings rate:** {:.1}%", rate * 100.0));
        }

        if !self.top_expenses.is_empty() {
            text.push_str("\n### Largest expenses");
            for (name, total) in &self.top_expenses {
                text.push_str(&format!("\n- {}: {:.2}", name, total));
            }
        }

        text
    }
}
