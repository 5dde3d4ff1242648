use super::{table_ops, CostError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonAttributes {
    pub person_id: String,
    pub age: f64,
    pub income: f64,
}

/// demographic attributes keyed by person id, used by fare and incentive
/// bracket matching.
#[derive(Debug, Clone, Default)]
pub struct PersonAttributeTable {
    attributes: HashMap<String, PersonAttributes>,
}

impl PersonAttributeTable {
    pub fn from_file(filename: &str) -> Result<PersonAttributeTable, CostError> {
        let rows: Vec<PersonAttributes> = table_ops::read_rows(filename)?;
        Ok(PersonAttributeTable::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<PersonAttributes>) -> PersonAttributeTable {
        let attributes = rows
            .into_iter()
            .map(|row| (row.person_id.clone(), row))
            .collect::<HashMap<_, _>>();
        PersonAttributeTable { attributes }
    }

    pub fn get(&self, person_id: &str) -> Option<&PersonAttributes> {
        self.attributes.get(person_id)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
