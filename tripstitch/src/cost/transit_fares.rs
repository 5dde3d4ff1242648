use super::{table_ops, Bracket, CostError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitFareRow {
    pub agency_id: Option<String>,
    /// empty in rows that apply to every route
    pub route_id: Option<String>,
    pub age: Bracket,
    pub amount: f64,
}

impl TransitFareRow {
    fn names_route(&self, route_id: &str) -> bool {
        match self.route_id.as_deref() {
            Some(r) if !r.is_empty() => r == route_id,
            _ => false,
        }
    }

    fn is_wildcard(&self) -> bool {
        match self.route_id.as_deref() {
            Some(r) => r.is_empty(),
            None => true,
        }
    }
}

/// transit fares by route and rider age. file order is preserved because it
/// breaks ties between rows whose brackets overlap.
#[derive(Debug, Clone, Default)]
pub struct TransitFareTable {
    rows: Vec<TransitFareRow>,
}

impl TransitFareTable {
    pub fn from_file(filename: &str) -> Result<TransitFareTable, CostError> {
        let rows: Vec<TransitFareRow> = table_ops::read_rows(filename)?;
        Ok(TransitFareTable::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<TransitFareRow>) -> TransitFareTable {
        TransitFareTable { rows }
    }

    /// the fare for riding `route_id` at the given age. rows naming the
    /// route exactly win over empty-route wildcard rows; within each group
    /// the first matching row in file order applies.
    pub fn fare(&self, route_id: &str, age: f64) -> Option<f64> {
        let exact = self
            .rows
            .iter()
            .find(|row| row.names_route(route_id) && row.age.contains(age));
        let matched = exact.or_else(|| {
            self.rows
                .iter()
                .find(|row| row.is_wildcard() && row.age.contains(age))
        });
        matched.map(|row| row.amount)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn fare_row(route_id: Option<&str>, age: &str, amount: f64) -> TransitFareRow {
        TransitFareRow {
            agency_id: Some(String::from("sam")),
            route_id: route_id.map(String::from),
            age: Bracket::from_str(age).expect("test invariant failed"),
            amount,
        }
    }

    #[test]
    fn test_exact_route_beats_wildcard() {
        // SETUP: a wildcard row listed before the route-specific row
        let table = TransitFareTable::from_rows(vec![
            fare_row(None, "[0:120)", 2.0),
            fare_row(Some("1340"), "[0:120)", 1.5),
        ]);

        // TEST
        assert_eq!(table.fare("1340", 30.0), Some(1.5));
        assert_eq!(table.fare("9999", 30.0), Some(2.0));
    }

    #[test]
    fn test_age_bracket_selects_row() {
        let table = TransitFareTable::from_rows(vec![
            fare_row(Some("1340"), "[0:18)", 0.75),
            fare_row(Some("1340"), "[18:65)", 1.5),
            fare_row(Some("1340"), "[65:120)", 0.75),
        ]);
        assert_eq!(table.fare("1340", 10.0), Some(0.75));
        assert_eq!(table.fare("1340", 18.0), Some(1.5));
        assert_eq!(table.fare("1340", 70.0), Some(0.75));
    }

    #[test]
    fn test_no_matching_row_is_none() {
        let table = TransitFareTable::from_rows(vec![fare_row(Some("1340"), "[0:18)", 0.75)]);
        assert_eq!(table.fare("1340", 40.0), None);
        assert_eq!(table.fare("77", 10.0), None);
    }

    #[test]
    fn test_empty_string_route_is_wildcard() {
        let table = TransitFareTable::from_rows(vec![fare_row(Some(""), "[0:120)", 2.25)]);
        assert_eq!(table.fare("1340", 40.0), Some(2.25));
    }
}
