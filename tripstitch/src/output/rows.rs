//! the seven relational row sets. serde field order is the column order
//! the analysis database expects, so field order here is load-bearing.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TripRow {
    pub run_id: String,
    pub person_id: String,
    pub trip_num: usize,
    pub orig_act: usize,
    pub dest_act: usize,
    pub trip_start: i64,
    pub trip_end: i64,
    pub distance: f64,
    /// empty when no mode choice preceded the trip
    pub planned_mode: Option<String>,
    pub realized_mode: String,
    pub fare: f64,
    pub fuel_cost: f64,
    pub toll: f64,
    pub incentives: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegRow {
    pub run_id: String,
    pub person_id: String,
    pub trip_num: usize,
    pub leg_num: usize,
    /// -1 when the leg has no known links
    pub orig_link: i64,
    pub dest_link: i64,
    pub leg_start: i64,
    pub leg_end: i64,
    pub distance: f64,
    pub leg_mode: String,
    pub vehicle: String,
    pub fuel_cost: f64,
    pub fare: f64,
    pub toll: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegLinkRow {
    pub run_id: String,
    pub person_id: String,
    pub trip_num: usize,
    pub leg_num: usize,
    pub link_id: i64,
    pub scenario: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegPathTraversalRow {
    pub run_id: String,
    pub person_id: String,
    pub trip_num: usize,
    pub leg_num: usize,
    pub vehicle_id: String,
    pub path_num: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathTraversalRow {
    pub run_id: String,
    pub vehicle_id: String,
    pub path_num: usize,
    pub driver_id: String,
    pub mode: String,
    pub distance: f64,
    pub start_time: i64,
    pub end_time: i64,
    pub num_passengers: u32,
    pub fuel_consumed: f64,
    pub fuel_level: f64,
    pub fuel_type: String,
    pub fuel_cost: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathTraversalLinkRow {
    pub run_id: String,
    pub vehicle_id: String,
    pub path_num: usize,
    pub link_id: i64,
    pub scenario: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehicleRow {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub scenario: String,
}
