use super::Leg;

/// one movement of one person between two consecutive activities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trip {
    /// 1-based position in the person's day
    pub trip_num: usize,
    /// 1-based sequence number of the departed activity
    pub orig_act: usize,
    /// sequence number of the arrival activity, 0 while the trip is open
    pub dest_act: usize,
    /// seconds since simulation midnight, truncated to whole seconds
    pub trip_start: i64,
    /// 0 for trips never closed by an activity start
    pub trip_end: i64,
    /// meters, the sum of leg distances
    pub distance: f64,
    /// mode chosen at the most recent choice event before departure
    pub planned_mode: Option<String>,
    /// labeled from the leg modes when the trip closes
    pub realized_mode: String,
    pub fare: f64,
    /// summed over car legs only
    pub fuel_cost: f64,
    pub toll: f64,
    pub incentives: f64,
    pub legs: Vec<Leg>,
}
