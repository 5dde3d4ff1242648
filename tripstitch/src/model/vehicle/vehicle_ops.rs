//! id marker conventions used by the simulator. these are substring tests
//! on raw id strings, matching how the log encodes vehicle ownership.

/// marks a traveler's own walking pseudo-vehicle
pub const BODY_VEHICLE_MARKER: &str = "body";
/// marks a vehicle operated by the ride hail fleet
pub const RIDE_HAIL_VEHICLE_MARKER: &str = "rideHailVehicle";
/// marks a synthetic simulation agent rather than a modeled traveler
pub const SIMULATION_AGENT_MARKER: &str = "Agent";

pub fn is_body_vehicle(vehicle_id: &str) -> bool {
    vehicle_id.contains(BODY_VEHICLE_MARKER)
}

pub fn is_ride_hail_vehicle(vehicle_id: &str) -> bool {
    vehicle_id.contains(RIDE_HAIL_VEHICLE_MARKER)
}

pub fn is_simulation_agent(person_id: &str) -> bool {
    person_id.contains(SIMULATION_AGENT_MARKER)
}

/// the transit trip id embedded in a transit vehicle id, which has the
/// shape `agency:trip_id`. ids without a separator carry no trip.
pub fn transit_trip_id(vehicle_id: &str) -> Option<&str> {
    vehicle_id.rsplit_once(':').map(|(_, trip_id)| trip_id)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_body_vehicle_marker() {
        assert!(is_body_vehicle("body-p1"));
        assert!(!is_body_vehicle("veh-12"));
    }

    #[test]
    fn test_ride_hail_marker() {
        assert!(is_ride_hail_vehicle("rideHailVehicle-42"));
        assert!(!is_ride_hail_vehicle("veh-42"));
    }

    #[test]
    fn test_agent_marker() {
        assert!(is_simulation_agent("TransitDriverAgent-0"));
        assert!(is_simulation_agent("rideHailAgent-3"));
        assert!(!is_simulation_agent("4081293"));
    }

    #[test]
    fn test_transit_trip_id() {
        assert_eq!(
            transit_trip_id("siouxareametro-sd-us:t_75335_b_219_tn_1"),
            Some("t_75335_b_219_tn_1")
        );
        assert_eq!(transit_trip_id("veh-12"), None);
    }
}
