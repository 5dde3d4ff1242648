use super::EventKind;
use crate::model::mode;

/// one decoded record of the simulator event log.
///
/// `kind` and `time` are present on every event. the remaining fields are
/// populated only for the kinds that carry them in the log; absent columns
/// decode to `None` and absent link lists to an empty list.
#[derive(Debug, Clone, Default)]
pub struct Event {
    pub kind: EventKind,
    /// seconds since simulation midnight, may exceed 86400
    pub time: f64,
    pub person: Option<String>,
    pub vehicle: Option<String>,
    /// id of the agent driving, used to attribute walking traversals
    pub driver: Option<String>,
    pub mode: Option<String>,
    /// ordered link ids of a traversal, in traversal order
    pub links: Vec<i64>,
    /// meters
    pub length: Option<f64>,
    pub departure_time: Option<f64>,
    pub arrival_time: Option<f64>,
    pub num_passengers: Option<u32>,
    /// joules
    pub fuel: Option<f64>,
    pub fuel_type: Option<String>,
    pub fuel_level: Option<f64>,
    pub toll_paid: Option<f64>,
    pub vehicle_type: Option<String>,
    pub start_x: Option<f64>,
    pub start_y: Option<f64>,
    pub end_x: Option<f64>,
    pub end_y: Option<f64>,
}

impl Event {
    /// event time truncated to whole simulation seconds
    pub fn time_sec(&self) -> i64 {
        self.time as i64
    }

    /// true for walking path traversals, which carry their person in the
    /// `driver` field rather than `person`
    pub fn is_walk_traversal(&self) -> bool {
        self.kind == EventKind::PathTraversal && self.mode.as_deref() == Some(mode::WALK)
    }
}
