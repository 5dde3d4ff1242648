use super::{table_ops, Bracket, CostError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncentiveRow {
    pub mode: String,
    /// empty means any age
    pub age: Option<Bracket>,
    /// empty means any income
    pub income: Option<Bracket>,
    pub amount: f64,
}

impl IncentiveRow {
    fn applies_to(&self, mode: &str, age: f64, income: f64) -> bool {
        self.mode == mode
            && self.age.as_ref().map_or(true, |b| b.contains(age))
            && self.income.as_ref().map_or(true, |b| b.contains(income))
    }
}

/// per-trip incentive amounts by realized mode and rider demographics.
/// the first matching row in file order supplies the amount.
#[derive(Debug, Clone, Default)]
pub struct IncentiveTable {
    rows: Vec<IncentiveRow>,
}

impl IncentiveTable {
    pub fn from_file(filename: &str) -> Result<IncentiveTable, CostError> {
        let rows: Vec<IncentiveRow> = table_ops::read_rows(filename)?;
        Ok(IncentiveTable::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<IncentiveRow>) -> IncentiveTable {
        IncentiveTable { rows }
    }

    pub fn amount(&self, mode: &str, age: f64, income: f64) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.applies_to(mode, age, income))
            .map(|row| row.amount)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
