use crate::model::event::Event;

/// one movement of one vehicle, decoded from a traversal event and priced
/// at index build so leg accumulation and row emission share one fuel cost.
#[derive(Debug, Clone, Default)]
pub struct PathTraversal {
    pub driver_id: String,
    pub mode: String,
    /// meters
    pub distance: f64,
    /// seconds since simulation midnight
    pub departure_time: f64,
    pub arrival_time: f64,
    pub num_passengers: u32,
    /// joules
    pub fuel_consumed: f64,
    pub fuel_level: f64,
    pub fuel_type: String,
    /// fuel consumed times the fuel type's price per joule
    pub fuel_cost: f64,
    pub toll_paid: f64,
    pub vehicle_type: String,
    /// traversed links in traversal order, duplicates preserved
    pub links: Vec<i64>,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl PathTraversal {
    pub fn from_event(event: &Event, fuel_price_per_joule: f64) -> PathTraversal {
        let fuel_consumed = event.fuel.unwrap_or_default();
        PathTraversal {
            driver_id: event.driver.clone().unwrap_or_default(),
            mode: event.mode.clone().unwrap_or_default(),
            distance: event.length.unwrap_or_default(),
            departure_time: event.departure_time.unwrap_or_default(),
            arrival_time: event.arrival_time.unwrap_or_default(),
            num_passengers: event.num_passengers.unwrap_or_default(),
            fuel_consumed,
            fuel_level: event.fuel_level.unwrap_or_default(),
            fuel_type: event.fuel_type.clone().unwrap_or_default(),
            fuel_cost: fuel_consumed * fuel_price_per_joule,
            toll_paid: event.toll_paid.unwrap_or_default(),
            vehicle_type: event.vehicle_type.clone().unwrap_or_default(),
            links: event.links.clone(),
            start_x: event.start_x.unwrap_or_default(),
            start_y: event.start_y.unwrap_or_default(),
            end_x: event.end_x.unwrap_or_default(),
            end_y: event.end_y.unwrap_or_default(),
        }
    }

    /// true if this traversal belongs to the closed leg window
    /// [start, end]: it spans the window, departs inside [start, end), or
    /// arrives inside (start, end]. the permissive test is needed because
    /// vehicle movement boundaries do not align exactly with person
    /// enter/leave timestamps.
    pub fn overlaps_window(&self, start: f64, end: f64) -> bool {
        let t1 = self.departure_time;
        let t2 = self.arrival_time;
        (t1 <= start && t2 >= end) || (start <= t1 && t1 < end) || (start < t2 && t2 <= end)
    }
}
