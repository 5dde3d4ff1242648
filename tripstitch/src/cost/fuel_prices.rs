use super::{table_ops, CostError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelPriceRow {
    pub fuel_type: String,
    pub price_per_joule: f64,
}

/// fuel prices keyed by lowercased fuel type. the simulator is inconsistent
/// about fuel type casing across event records, so lookups normalize too.
#[derive(Debug, Clone, Default)]
pub struct FuelPriceTable {
    prices: HashMap<String, f64>,
}

impl FuelPriceTable {
    pub fn from_file(filename: &str) -> Result<FuelPriceTable, CostError> {
        let rows: Vec<FuelPriceRow> = table_ops::read_rows(filename)?;
        Ok(FuelPriceTable::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<FuelPriceRow>) -> FuelPriceTable {
        let prices = rows
            .into_iter()
            .map(|row| (row.fuel_type.to_lowercase(), row.price_per_joule))
            .collect::<HashMap<_, _>>();
        FuelPriceTable { prices }
    }

    pub fn price_per_joule(&self, fuel_type: &str) -> Option<f64> {
        self.prices.get(&fuel_type.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lookup_normalizes_case() {
        let table = FuelPriceTable::from_rows(vec![FuelPriceRow {
            fuel_type: String::from("Gasoline"),
            price_per_joule: 3.0e-8,
        }]);
        assert_eq!(table.price_per_joule("gasoline"), Some(3.0e-8));
        assert_eq!(table.price_per_joule("GASOLINE"), Some(3.0e-8));
        assert_eq!(table.price_per_joule("diesel"), None);
    }
}
