//! mode tokens shared between the event log, leg labeling and trip
//! labeling. leg modes come straight off traversal records; trip-level
//! realized modes add the composite transit labels.

pub const WALK: &str = "walk";
pub const CAR: &str = "car";
pub const DRIVE: &str = "drive";
pub const BUS: &str = "bus";
pub const TRAM: &str = "tram";
pub const SUBWAY: &str = "subway";
pub const CABLE_CAR: &str = "cable_car";
pub const RIDE_HAIL: &str = "ride_hail";
pub const DRIVE_TRANSIT: &str = "drive_transit";
pub const WALK_TRANSIT: &str = "walk_transit";
pub const UNCLASSIFIED: &str = "unclassified";

/// leg modes served by scheduled transit vehicles. legs in these modes are
/// eligible for transit fares.
pub const BUS_LIKE_MODES: [&str; 4] = [BUS, TRAM, SUBWAY, CABLE_CAR];

pub fn is_bus_like(m: &str) -> bool {
    BUS_LIKE_MODES.contains(&m)
}

/// true if a trip labeled with this realized mode can receive an incentive
pub fn is_incentive_eligible(realized_mode: &str) -> bool {
    matches!(realized_mode, RIDE_HAIL | DRIVE_TRANSIT | WALK_TRANSIT)
}
