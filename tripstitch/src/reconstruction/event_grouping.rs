use crate::model::event::Event;
use crate::model::vehicle::vehicle_ops;
use kdam::tqdm;
use std::collections::HashMap;

/// the events of one person, in log order
pub type PersonEvents<'a> = Vec<&'a Event>;

/// partitions events by responsible person in a single pass, preserving
/// log order within each person. events with no responsible person are
/// dropped; synthetic simulation agents are excluded.
pub fn group_by_person(events: &[Event]) -> HashMap<String, PersonEvents<'_>> {
    let mut by_person: HashMap<String, PersonEvents<'_>> = HashMap::new();
    let events_iter = tqdm!(
        events.iter(),
        desc = "grouping person events",
        total = events.len()
    );
    for event in events_iter {
        let person_id = match responsible_person(event) {
            Some(p) => p,
            None => continue,
        };
        if vehicle_ops::is_simulation_agent(person_id) {
            continue;
        }
        by_person
            .entry(person_id.to_string())
            .or_default()
            .push(event);
    }
    by_person
}

/// who an event belongs to. walking traversals carry their person in the
/// `driver` field; every other kind carries it in `person`.
fn responsible_person(event: &Event) -> Option<&str> {
    let id = if event.is_walk_traversal() {
        event.driver.as_deref()
    } else {
        event.person.as_deref()
    };
    id.filter(|p| !p.is_empty())
}
