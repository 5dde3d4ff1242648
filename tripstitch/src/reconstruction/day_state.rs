use crate::model::event::{Event, EventKind};
use crate::model::mode;
use crate::model::trip::{mode_label, Leg, PersonDay, Trip, WalkCarPolicy};
use crate::model::vehicle::{vehicle_ops, VehiclePathIndex};
use itertools::Itertools;
use std::collections::HashSet;

/// the accumulator for one person's fold over their time-ordered events.
///
/// trips grow in place as events arrive; the cursors `current_trip` and
/// `open_vehicle_leg` are indices into that growth, so the state is fully
/// person-local and the fold can run on any worker. the path index is
/// shared read-only across all persons.
pub struct DayState<'a> {
    person_id: String,
    paths: &'a VehiclePathIndex,
    policy: WalkCarPolicy,
    pending_planned_mode: Option<String>,
    /// 1-based; the first ActivityEnd departs activity 1
    activity_counter: usize,
    trip_counter: usize,
    /// counts this person's emitted walk legs, used as their traversal number
    walk_path_counter: usize,
    current_trip: Option<usize>,
    open_vehicle_leg: Option<usize>,
    trips: Vec<Trip>,
}

impl<'a> DayState<'a> {
    pub fn new(
        person_id: &str,
        paths: &'a VehiclePathIndex,
        policy: WalkCarPolicy,
    ) -> DayState<'a> {
        DayState {
            person_id: person_id.to_string(),
            paths,
            policy,
            pending_planned_mode: None,
            activity_counter: 1,
            trip_counter: 0,
            walk_path_counter: 0,
            current_trip: None,
            open_vehicle_leg: None,
            trips: vec![],
        }
    }

    /// advances the state by one event. kinds that do not shape the
    /// itinerary are explicit no-ops.
    pub fn apply(&mut self, event: &Event) {
        match event.kind {
            EventKind::ModeChoice => self.on_mode_choice(event),
            EventKind::ActivityEnd => self.on_activity_end(event),
            EventKind::ActivityStart => self.on_activity_start(event),
            EventKind::PathTraversal => self.on_path_traversal(event),
            EventKind::PersonEntersVehicle => self.on_enters_vehicle(event),
            EventKind::PersonLeavesVehicle => self.on_leaves_vehicle(event),
            EventKind::PersonCost => {}
            EventKind::Other => {}
        }
    }

    /// ends the fold. a trip still open never reached an activity; it is
    /// kept as a dangling trip rather than discarded.
    pub fn into_person_day(mut self) -> PersonDay {
        if self.current_trip.is_some() {
            self.finalize_dangling_trip();
        }
        PersonDay {
            person_id: self.person_id,
            trips: self.trips,
        }
    }

    fn on_mode_choice(&mut self, event: &Event) {
        if let Some(m) = event.mode.as_deref() {
            if !m.is_empty() {
                self.pending_planned_mode = Some(m.to_string());
            }
        }
    }

    fn on_activity_end(&mut self, event: &Event) {
        if self.current_trip.is_some() {
            self.finalize_dangling_trip();
        }
        self.trip_counter += 1;
        let trip = Trip {
            trip_num: self.trip_counter,
            orig_act: self.activity_counter,
            trip_start: event.time_sec(),
            planned_mode: self.pending_planned_mode.clone(),
            ..Default::default()
        };
        self.trips.push(trip);
        self.current_trip = Some(self.trips.len() - 1);
    }

    /// walking is self-reported: the traversal itself is the whole leg,
    /// closed on arrival. stationary walk events with zero length are
    /// ignored.
    fn on_path_traversal(&mut self, event: &Event) {
        if !event.is_walk_traversal() {
            return;
        }
        let distance = event.length.unwrap_or_default();
        if distance <= 0.0 {
            return;
        }
        let trip_idx = match self.current_trip {
            Some(idx) => idx,
            None => {
                log::warn!(
                    "person '{}' walks at {} with no trip open, skipping leg",
                    self.person_id,
                    event.time
                );
                return;
            }
        };
        self.walk_path_counter += 1;
        let links = event.links.clone();
        let leg = Leg {
            leg_start: event.departure_time.unwrap_or_default() as i64,
            leg_end: event.arrival_time.unwrap_or_default() as i64,
            distance,
            leg_mode: String::from(mode::WALK),
            vehicle: event.vehicle.clone().unwrap_or_default(),
            orig_link: links.first().copied(),
            dest_link: links.last().copied(),
            links,
            path_nums: vec![self.walk_path_counter],
            ..Default::default()
        };
        self.trips[trip_idx].legs.push(leg);
    }

    fn on_enters_vehicle(&mut self, event: &Event) {
        let vehicle_id = match event.vehicle.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => {
                log::warn!(
                    "person '{}' enters an unnamed vehicle at {}, skipping",
                    self.person_id,
                    event.time
                );
                return;
            }
        };
        if vehicle_ops::is_body_vehicle(vehicle_id) {
            return;
        }
        let trip_idx = match self.current_trip {
            Some(idx) => idx,
            None => {
                log::warn!(
                    "person '{}' enters vehicle '{}' at {} with no trip open, skipping leg",
                    self.person_id,
                    vehicle_id,
                    event.time
                );
                return;
            }
        };
        if self.open_vehicle_leg.is_some() {
            log::warn!(
                "person '{}' enters vehicle '{}' with a vehicle leg already open",
                self.person_id,
                vehicle_id
            );
        }
        let leg = Leg {
            leg_start: event.time_sec(),
            vehicle: vehicle_id.to_string(),
            ..Default::default()
        };
        let trip = &mut self.trips[trip_idx];
        trip.legs.push(leg);
        self.open_vehicle_leg = Some(trip.legs.len() - 1);
    }

    /// closes the open vehicle leg and attributes the vehicle's physical
    /// movement to it via windowed matching against the path index.
    fn on_leaves_vehicle(&mut self, event: &Event) {
        let vehicle_id = event.vehicle.as_deref().unwrap_or_default();
        if vehicle_ops::is_body_vehicle(vehicle_id) {
            return;
        }
        let trip_idx = match self.current_trip {
            Some(idx) => idx,
            None => {
                log::warn!(
                    "person '{}' leaves vehicle '{}' at {} with no trip open, skipping",
                    self.person_id,
                    vehicle_id,
                    event.time
                );
                return;
            }
        };
        let leg_idx = match self.open_vehicle_leg.take() {
            Some(idx) => idx,
            None => {
                log::warn!(
                    "person '{}' leaves vehicle '{}' at {} with no vehicle leg open, skipping",
                    self.person_id,
                    vehicle_id,
                    event.time
                );
                return;
            }
        };
        let leg = &mut self.trips[trip_idx].legs[leg_idx];
        leg.leg_end = event.time_sec();
        if !vehicle_id.is_empty() && leg.vehicle != vehicle_id {
            log::warn!(
                "person '{}' left vehicle '{}' but the open leg rides '{}'",
                self.person_id,
                vehicle_id,
                leg.vehicle
            );
        }
        let matches =
            self.paths
                .matches_in_window(&leg.vehicle, leg.leg_start as f64, leg.leg_end as f64);
        match matches.first() {
            None => {
                // a known simulator gap (e.g. mid-leg replanning); the leg
                // stays at zero distance with no links
                log::warn!(
                    "no traversals of vehicle '{}' overlap [{}, {}] for person '{}'",
                    leg.vehicle,
                    leg.leg_start,
                    leg.leg_end,
                    self.person_id
                );
            }
            Some((_, first)) => {
                leg.leg_mode = if first.mode == mode::CAR
                    && vehicle_ops::is_ride_hail_vehicle(&leg.vehicle)
                {
                    String::from(mode::RIDE_HAIL)
                } else {
                    first.mode.clone()
                };
                let mut seen: HashSet<i64> = HashSet::new();
                for (path_num, traversal) in matches.iter() {
                    leg.distance += traversal.distance;
                    leg.fuel_cost += traversal.fuel_cost;
                    leg.toll += traversal.toll_paid;
                    for link in traversal.links.iter() {
                        if seen.insert(*link) {
                            leg.links.push(*link);
                        }
                    }
                    leg.path_nums.push(*path_num);
                }
                leg.orig_link = leg.links.first().copied();
                leg.dest_link = leg.links.last().copied();
            }
        }
    }

    fn on_activity_start(&mut self, event: &Event) {
        self.activity_counter += 1;
        let trip_idx = match self.current_trip.take() {
            Some(idx) => idx,
            None => {
                log::warn!(
                    "person '{}' starts an activity at {} with no trip open, skipping",
                    self.person_id,
                    event.time
                );
                return;
            }
        };
        if self.open_vehicle_leg.take().is_some() {
            log::warn!(
                "person '{}' starts an activity with a vehicle leg still open",
                self.person_id
            );
        }
        let trip = &mut self.trips[trip_idx];
        trip.dest_act = self.activity_counter;
        trip.trip_end = event.time_sec();
        self.seal_trip(trip_idx);
        let trip = &self.trips[trip_idx];
        if trip.realized_mode == mode::UNCLASSIFIED {
            log::warn!(
                "trip {} of person '{}' has unclassifiable leg modes",
                trip.trip_num,
                self.person_id
            );
        }
    }

    fn finalize_dangling_trip(&mut self) {
        let trip_idx = match self.current_trip.take() {
            Some(idx) => idx,
            None => return,
        };
        self.open_vehicle_leg = None;
        self.seal_trip(trip_idx);
        log::warn!(
            "trip {} of person '{}' never reached an activity, kept as dangling",
            self.trips[trip_idx].trip_num,
            self.person_id
        );
    }

    /// derives the whole-trip quantities that depend on the final leg list
    fn seal_trip(&mut self, trip_idx: usize) {
        let trip = &mut self.trips[trip_idx];
        trip.distance = trip.legs.iter().map(|leg| leg.distance).sum();
        let leg_modes = trip.legs.iter().map(|leg| leg.leg_mode.as_str()).collect_vec();
        trip.realized_mode = mode_label::label_realized_mode(&leg_modes, self.policy);
    }
}
