use super::day_state::DayState;
use super::event_grouping::PersonEvents;
use crate::model::event::Event;
use crate::model::trip::{PersonDay, WalkCarPolicy};
use crate::model::vehicle::VehiclePathIndex;
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::HashMap;

/// folds one person's time-ordered events into their reconstructed day
pub fn reconstruct_person(
    person_id: &str,
    events: &[&Event],
    paths: &VehiclePathIndex,
    policy: WalkCarPolicy,
) -> PersonDay {
    let mut state = DayState::new(person_id, paths, policy);
    for event in events {
        state.apply(event);
    }
    state.into_person_day()
}

/// reconstructs every person against the shared path index. the fold is
/// person-local, so persons run in parallel; output lands in sorted
/// person-id order regardless of worker count.
pub fn reconstruct_all(
    person_events: &HashMap<String, PersonEvents<'_>>,
    paths: &VehiclePathIndex,
    policy: WalkCarPolicy,
) -> Vec<PersonDay> {
    let sorted: Vec<(&str, &[&Event])> = person_events
        .iter()
        .map(|(person_id, events)| (person_id.as_str(), events.as_slice()))
        .sorted_by_key(|(person_id, _)| *person_id)
        .collect_vec();
    sorted
        .into_par_iter()
        .map(|(person_id, events)| reconstruct_person(person_id, events, paths, policy))
        .collect()
}
