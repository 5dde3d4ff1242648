use super::{table_ops, CostError};
use crate::model::vehicle::vehicle_ops;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRouteRow {
    pub route_id: String,
    pub trip_id: String,
}

/// transit trip id → route id, used to resolve the route serving a
/// bus-like leg from its vehicle id.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    routes_by_trip: HashMap<String, String>,
}

impl RouteIndex {
    pub fn from_file(filename: &str) -> Result<RouteIndex, CostError> {
        let rows: Vec<TripRouteRow> = table_ops::read_rows(filename)?;
        Ok(RouteIndex::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<TripRouteRow>) -> RouteIndex {
        let routes_by_trip = rows
            .into_iter()
            .map(|row| (row.trip_id, row.route_id))
            .collect::<HashMap<_, _>>();
        RouteIndex { routes_by_trip }
    }

    /// the route serving a transit vehicle, via the trip id embedded after
    /// the last ':' in the vehicle id. vehicles without an embedded trip,
    /// or trips absent from the table, resolve to None.
    pub fn route_for_vehicle(&self, vehicle_id: &str) -> Option<&str> {
        let trip_id = vehicle_ops::transit_trip_id(vehicle_id)?;
        self.routes_by_trip.get(trip_id).map(|r| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes_by_trip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes_by_trip.is_empty()
    }
}
