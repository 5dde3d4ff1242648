use super::PathTraversal;
use crate::cost::FuelPriceTable;
use crate::model::event::{Event, EventKind};
use kdam::tqdm;
use std::collections::HashMap;

/// a matched traversal paired with its 1-based position in the vehicle's
/// traversal list
pub type PathMatch<'a> = (usize, &'a PathTraversal);

/// every path traversal in the event log grouped by vehicle, preserving
/// log order within each vehicle. built once before the per-person phase
/// and shared read-only across persons.
#[derive(Debug, Default)]
pub struct VehiclePathIndex {
    paths: HashMap<String, Vec<PathTraversal>>,
}

impl VehiclePathIndex {
    /// groups traversal events by vehicle id. a vehicle exists in the index
    /// from its first traversal; fuel cost is computed here from the price
    /// table, with unpriceable fuel defaulting to zero cost.
    pub fn from_events(events: &[Event], fuel_prices: &FuelPriceTable) -> VehiclePathIndex {
        let mut paths: HashMap<String, Vec<PathTraversal>> = HashMap::new();
        let events_iter = tqdm!(
            events.iter(),
            desc = "indexing vehicle paths",
            total = events.len()
        );
        for event in events_iter {
            if event.kind != EventKind::PathTraversal {
                continue;
            }
            let vehicle_id = match event.vehicle.as_deref() {
                Some(v) if !v.is_empty() => v,
                _ => {
                    log::warn!("traversal at {} carries no vehicle id, skipping", event.time);
                    continue;
                }
            };
            let price = fuel_price_per_joule(event, fuel_prices);
            paths
                .entry(vehicle_id.to_string())
                .or_default()
                .push(PathTraversal::from_event(event, price));
        }
        VehiclePathIndex { paths }
    }

    /// traversals of `vehicle_id` overlapping the closed window
    /// [start, end], in path order. unknown vehicles match nothing.
    pub fn matches_in_window(&self, vehicle_id: &str, start: f64, end: f64) -> Vec<PathMatch<'_>> {
        match self.paths.get(vehicle_id) {
            None => vec![],
            Some(traversals) => traversals
                .iter()
                .enumerate()
                .filter(|(_, t)| t.overlaps_window(start, end))
                .map(|(idx, t)| (idx + 1, t))
                .collect(),
        }
    }

    pub fn vehicles(&self) -> impl Iterator<Item = (&String, &Vec<PathTraversal>)> {
        self.paths.iter()
    }

    pub fn n_vehicles(&self) -> usize {
        self.paths.len()
    }

    pub fn n_traversals(&self) -> usize {
        self.paths.values().map(|v| v.len()).sum()
    }
}

/// dollars per joule for one traversal's fuel. zero-fuel traversals price
/// to zero without consulting the table; a missing fuel type is a lookup
/// miss recovered as zero with a warning.
fn fuel_price_per_joule(event: &Event, fuel_prices: &FuelPriceTable) -> f64 {
    let fuel = event.fuel.unwrap_or_default();
    let fuel_type = event.fuel_type.as_deref().unwrap_or_default();
    if fuel == 0.0 || fuel_type.is_empty() {
        return 0.0;
    }
    match fuel_prices.price_per_joule(fuel_type) {
        Some(price) => price,
        None => {
            log::warn!("no fuel price for type '{fuel_type}', fuel cost defaults to zero");
            0.0
        }
    }
}
