use crate::error::{AdvisorError, Result};
use crate::schema::{TransactionCategory, TransactionRecord};
use serde::{Deserialize, Serialize};

/// A raw row as it arrives from the tabular source, before the direction
/// column has been interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Amount")]
    pub amount: f64,

    #[serde(rename = "Income/Expense")]
    pub direction: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionTable {
    rows: Vec<TableRow>,
}

impl TransactionTable {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converts every row into a [`TransactionRecord`], preserving row order.
    ///
    /// Negative amounts are stored as their magnitude; direction comes only
    /// from the `Income/Expense` column.
    pub fn records(&self) -> Result<Vec<TransactionRecord>> {
        self.rows
            .iter()
            .cloned()
            .map(TransactionRecord::try_from)
            .collect()
    }
}

impl TryFrom<TableRow> for TransactionRecord {
    type Error = AdvisorError;

    fn try_from(row: TableRow) -> Result<Self> {
        let category: TransactionCategory = row.direction.parse()?;
        Ok(TransactionRecord::new(row.description, row.amount, category))
    }
}

impl FromIterator<TableRow> for TransactionTable {
    fn from_iter<I: IntoIterator<Item = TableRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
