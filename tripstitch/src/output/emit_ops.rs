use super::rows::{
    LegLinkRow, LegPathTraversalRow, LegRow, PathTraversalLinkRow, PathTraversalRow, TripRow,
    VehicleRow,
};
use crate::model::trip::{Leg, PersonDay, Trip};
use crate::model::vehicle::VehiclePathIndex;
use itertools::Itertools;
use kdam::tqdm;

/// the seven flattened row sets of one run
#[derive(Debug, Default)]
pub struct RowSets {
    pub trips: Vec<TripRow>,
    pub legs: Vec<LegRow>,
    pub leg_links: Vec<LegLinkRow>,
    pub leg_pathtraversals: Vec<LegPathTraversalRow>,
    pub pathtraversals: Vec<PathTraversalRow>,
    pub pathtraversal_links: Vec<PathTraversalLinkRow>,
    pub vehicles: Vec<VehicleRow>,
}

impl RowSets {
    pub fn total(&self) -> usize {
        self.trips.len()
            + self.legs.len()
            + self.leg_links.len()
            + self.leg_pathtraversals.len()
            + self.pathtraversals.len()
            + self.pathtraversal_links.len()
            + self.vehicles.len()
    }
}

/// flattens reconstructed days and the path index into relational rows,
/// stamped with the run id and scenario. days arrive in sorted person
/// order; vehicles are emitted in sorted id order, so output content is
/// deterministic.
pub fn emit_row_sets(
    run_id: &str,
    scenario: &str,
    days: &[PersonDay],
    paths: &VehiclePathIndex,
) -> RowSets {
    let mut rows = RowSets::default();

    let days_iter = tqdm!(days.iter(), desc = "emitting person rows", total = days.len());
    for day in days_iter {
        for trip in day.trips.iter() {
            rows.trips.push(trip_row(run_id, &day.person_id, trip));
            for (leg_idx, leg) in trip.legs.iter().enumerate() {
                let leg_num = leg_idx + 1;
                rows.legs
                    .push(leg_row(run_id, &day.person_id, trip.trip_num, leg_num, leg));
                for link_id in leg.links.iter() {
                    rows.leg_links.push(LegLinkRow {
                        run_id: run_id.to_string(),
                        person_id: day.person_id.clone(),
                        trip_num: trip.trip_num,
                        leg_num,
                        link_id: *link_id,
                        scenario: scenario.to_string(),
                    });
                }
                for path_num in leg.path_nums.iter() {
                    rows.leg_pathtraversals.push(LegPathTraversalRow {
                        run_id: run_id.to_string(),
                        person_id: day.person_id.clone(),
                        trip_num: trip.trip_num,
                        leg_num,
                        vehicle_id: leg.vehicle.clone(),
                        path_num: *path_num,
                    });
                }
            }
        }
    }

    let sorted_vehicles = paths
        .vehicles()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .collect_vec();
    let vehicles_iter = tqdm!(
        sorted_vehicles.into_iter(),
        desc = "emitting vehicle rows",
        total = paths.n_vehicles()
    );
    for (vehicle_id, traversals) in vehicles_iter {
        let vehicle_type = traversals
            .first()
            .map(|t| t.vehicle_type.clone())
            .unwrap_or_default();
        rows.vehicles.push(VehicleRow {
            vehicle_id: vehicle_id.clone(),
            vehicle_type,
            scenario: scenario.to_string(),
        });
        for (traversal_idx, traversal) in traversals.iter().enumerate() {
            let path_num = traversal_idx + 1;
            rows.pathtraversals.push(PathTraversalRow {
                run_id: run_id.to_string(),
                vehicle_id: vehicle_id.clone(),
                path_num,
                driver_id: traversal.driver_id.clone(),
                mode: traversal.mode.clone(),
                distance: traversal.distance,
                start_time: traversal.departure_time as i64,
                end_time: traversal.arrival_time as i64,
                num_passengers: traversal.num_passengers,
                fuel_consumed: traversal.fuel_consumed,
                fuel_level: traversal.fuel_level,
                fuel_type: traversal.fuel_type.clone(),
                fuel_cost: traversal.fuel_cost,
                start_x: traversal.start_x,
                start_y: traversal.start_y,
                end_x: traversal.end_x,
                end_y: traversal.end_y,
            });
            for link_id in traversal.links.iter() {
                rows.pathtraversal_links.push(PathTraversalLinkRow {
                    run_id: run_id.to_string(),
                    vehicle_id: vehicle_id.clone(),
                    path_num,
                    link_id: *link_id,
                    scenario: scenario.to_string(),
                });
            }
        }
    }

    rows
}

fn trip_row(run_id: &str, person_id: &str, trip: &Trip) -> TripRow {
    TripRow {
        run_id: run_id.to_string(),
        person_id: person_id.to_string(),
        trip_num: trip.trip_num,
        orig_act: trip.orig_act,
        dest_act: trip.dest_act,
        trip_start: trip.trip_start,
        trip_end: trip.trip_end,
        distance: trip.distance,
        planned_mode: trip.planned_mode.clone(),
        realized_mode: trip.realized_mode.clone(),
        fare: trip.fare,
        fuel_cost: trip.fuel_cost,
        toll: trip.toll,
        incentives: trip.incentives,
    }
}

fn leg_row(run_id: &str, person_id: &str, trip_num: usize, leg_num: usize, leg: &Leg) -> LegRow {
    LegRow {
        run_id: run_id.to_string(),
        person_id: person_id.to_string(),
        trip_num,
        leg_num,
        orig_link: leg.orig_link.unwrap_or(-1),
        dest_link: leg.dest_link.unwrap_or(-1),
        leg_start: leg.leg_start,
        leg_end: leg.leg_end,
        distance: leg.distance,
        leg_mode: leg.leg_mode.clone(),
        vehicle: leg.vehicle.clone(),
        fuel_cost: leg.fuel_cost,
        fare: leg.fare,
        toll: leg.toll,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cost::{
        CostConfig, CostModel, FuelPriceRow, FuelPriceTable, IncentiveTable, PersonAttributeTable,
        RouteIndex, TransitFareTable,
    };
    use crate::model::event::{decode_ops, Event, EventKind};
    use crate::model::trip::WalkCarPolicy;
    use crate::reconstruction::{event_grouping, reconstruct_ops};
    use std::io::Cursor;

    fn traversal_event(vehicle: &str, vehicle_type: &str, dep: f64, arr: f64) -> Event {
        Event {
            kind: EventKind::PathTraversal,
            time: dep,
            vehicle: Some(vehicle.to_string()),
            vehicle_type: Some(vehicle_type.to_string()),
            mode: Some(String::from("car")),
            departure_time: Some(dep),
            arrival_time: Some(arr),
            length: Some(1000.0),
            links: vec![7, 8],
            ..Default::default()
        }
    }

    fn one_trip_day() -> PersonDay {
        PersonDay {
            person_id: String::from("p-1"),
            trips: vec![Trip {
                trip_num: 1,
                orig_act: 1,
                dest_act: 2,
                trip_start: 0,
                trip_end: 600,
                distance: 1000.0,
                planned_mode: Some(String::from("car")),
                realized_mode: String::from("car"),
                legs: vec![
                    Leg {
                        leg_start: 0,
                        leg_end: 600,
                        distance: 1000.0,
                        leg_mode: String::from("car"),
                        vehicle: String::from("veh-1"),
                        orig_link: Some(7),
                        dest_link: Some(8),
                        links: vec![7, 8],
                        path_nums: vec![1],
                        ..Default::default()
                    },
                    Leg {
                        leg_start: 600,
                        leg_end: 650,
                        leg_mode: String::from("walk"),
                        vehicle: String::from("body-p-1"),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_row_counts_and_stamping() {
        // SETUP: one day, one indexed vehicle with two traversals
        let events = vec![
            traversal_event("veh-1", "sedan", 0.0, 600.0),
            traversal_event("veh-1", "sedan", 700.0, 900.0),
        ];
        let paths = VehiclePathIndex::from_events(&events, &FuelPriceTable::default());
        let days = vec![one_trip_day()];

        // TEST
        let rows = emit_row_sets("run-7", "sioux", &days, &paths);
        assert_eq!(rows.trips.len(), 1);
        assert_eq!(rows.legs.len(), 2);
        assert_eq!(rows.leg_links.len(), 2);
        assert_eq!(rows.leg_pathtraversals.len(), 1);
        assert_eq!(rows.pathtraversals.len(), 2);
        assert_eq!(rows.pathtraversal_links.len(), 4);
        assert_eq!(rows.vehicles.len(), 1);
        assert_eq!(rows.total(), 13);

        assert_eq!(rows.trips[0].run_id, "run-7");
        assert_eq!(rows.leg_links[0].scenario, "sioux");
        assert_eq!(rows.vehicles[0].vehicle_type, "sedan");
        assert_eq!(rows.pathtraversals[1].path_num, 2);
        assert_eq!(rows.pathtraversals[1].start_time, 700);
    }

    #[test]
    fn test_missing_links_emit_sentinels() {
        let paths = VehiclePathIndex::from_events(&[], &FuelPriceTable::default());
        let days = vec![one_trip_day()];
        let rows = emit_row_sets("run-7", "sioux", &days, &paths);
        // the walk leg carries no links
        assert_eq!(rows.legs[1].orig_link, -1);
        assert_eq!(rows.legs[1].dest_link, -1);
        // the car leg does
        assert_eq!(rows.legs[0].orig_link, 7);
        assert_eq!(rows.legs[0].dest_link, 8);
    }

    #[test]
    fn test_full_pipeline_from_event_log() {
        // SETUP: a one-person car day as raw log text
        let csv = "\
time,type,person,vehicle,driver,mode,links,length,departureTime,arrivalTime,primaryFuel,primaryFuelType
0.0,actend,p-1,,,,,,,,,
0.0,PersonEntersVehicle,p-1,veh-1,,,,,,,,
0.0,PathTraversal,,veh-1,p-1,car,\"101,102\",5000.0,0.0,600.0,50000.0,Gasoline
600.0,PersonLeavesVehicle,p-1,veh-1,,,,,,,,
600.0,actstart,p-1,,,,,,,,,
";
        let events =
            decode_ops::read_events_from_reader(Cursor::new(csv)).expect("decode failed");
        let fuel_prices = FuelPriceTable::from_rows(vec![FuelPriceRow {
            fuel_type: String::from("gasoline"),
            price_per_joule: 2.0e-5,
        }]);
        let cost_model = CostModel {
            person_attributes: PersonAttributeTable::default(),
            transit_fares: TransitFareTable::default(),
            incentives: IncentiveTable::default(),
            routes: RouteIndex::default(),
            config: CostConfig::default(),
        };

        // TEST: decode through emission in one pass
        let paths = VehiclePathIndex::from_events(&events, &fuel_prices);
        let grouped = event_grouping::group_by_person(&events);
        let mut days = reconstruct_ops::reconstruct_all(&grouped, &paths, WalkCarPolicy::Car);
        cost_model.price_all(&mut days);
        let rows = emit_row_sets("run-1", "sioux", &days, &paths);

        assert_eq!(rows.trips.len(), 1);
        assert_eq!(rows.trips[0].distance, 5000.0);
        assert_eq!(rows.trips[0].realized_mode, "car");
        assert_eq!(rows.trips[0].fuel_cost, 50000.0 * 2.0e-5);
        assert_eq!(rows.legs.len(), 1);
        assert_eq!(rows.legs[0].orig_link, 101);
        assert_eq!(rows.legs[0].dest_link, 102);
        assert_eq!(rows.leg_pathtraversals[0].path_num, 1);
        assert_eq!(rows.pathtraversals[0].fuel_cost, 50000.0 * 2.0e-5);
        assert_eq!(rows.pathtraversal_links.len(), 2);
        assert_eq!(rows.vehicles[0].vehicle_id, "veh-1");
    }

    #[test]
    fn test_vehicles_sorted_by_id() {
        let events = vec![
            traversal_event("veh-9", "sedan", 0.0, 100.0),
            traversal_event("veh-1", "bus", 0.0, 100.0),
        ];
        let paths = VehiclePathIndex::from_events(&events, &FuelPriceTable::default());
        let rows = emit_row_sets("run-7", "sioux", &[], &paths);
        let ids: Vec<&str> = rows.vehicles.iter().map(|v| v.vehicle_id.as_str()).collect();
        assert_eq!(ids, vec!["veh-1", "veh-9"]);
        assert_eq!(rows.pathtraversals[0].vehicle_id, "veh-1");
    }
}
