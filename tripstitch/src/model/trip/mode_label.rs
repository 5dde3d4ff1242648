use crate::model::mode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// label for a trip whose legs are exactly walk and car. both labels are
/// in circulation among consumers of these row sets, so the choice is a
/// policy rather than a rule.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WalkCarPolicy {
    #[default]
    Car,
    Drive,
}

impl WalkCarPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            WalkCarPolicy::Car => mode::CAR,
            WalkCarPolicy::Drive => mode::DRIVE,
        }
    }
}

/// derives a trip's realized mode from the modes of its legs. empty leg
/// modes (left by matching misses) are discarded first; the first matching
/// rule wins:
///
/// 1. walk, car and a bus-like mode together label as drive_transit
/// 2. car and a bus-like mode label as drive_transit
/// 3. walk and a bus-like mode label as walk_transit
/// 4. exactly walk and car resolve through the configured policy
/// 5. exactly car labels as car
/// 6. any ride hail leg labels as ride_hail
/// 7. exactly walk labels as walk
/// 8. anything else is unclassified
pub fn label_realized_mode(leg_modes: &[&str], policy: WalkCarPolicy) -> String {
    let modes: HashSet<&str> = leg_modes
        .iter()
        .copied()
        .filter(|m| !m.is_empty())
        .collect();
    let has_walk = modes.contains(mode::WALK);
    let has_car = modes.contains(mode::CAR);
    let has_bus_like = modes.iter().any(|m| mode::is_bus_like(m));
    let has_ride_hail = modes.contains(mode::RIDE_HAIL);

    let label = if has_car && has_bus_like {
        mode::DRIVE_TRANSIT
    } else if has_walk && has_bus_like {
        mode::WALK_TRANSIT
    } else if has_walk && has_car && modes.len() == 2 {
        policy.label()
    } else if has_car && modes.len() == 1 {
        mode::CAR
    } else if has_ride_hail {
        mode::RIDE_HAIL
    } else if has_walk && modes.len() == 1 {
        mode::WALK
    } else {
        mode::UNCLASSIFIED
    };
    label.to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    fn label(leg_modes: &[&str]) -> String {
        label_realized_mode(leg_modes, WalkCarPolicy::Car)
    }

    #[test]
    fn test_transit_labels() {
        assert_eq!(label(&["walk", "car", "bus"]), "drive_transit");
        assert_eq!(label(&["car", "bus"]), "drive_transit");
        assert_eq!(label(&["walk", "bus"]), "walk_transit");
        assert_eq!(label(&["walk", "tram", "walk"]), "walk_transit");
        assert_eq!(label(&["walk", "subway"]), "walk_transit");
        assert_eq!(label(&["walk", "cable_car"]), "walk_transit");
    }

    #[test]
    fn test_single_mode_labels() {
        assert_eq!(label(&["car"]), "car");
        assert_eq!(label(&["car", "car"]), "car");
        assert_eq!(label(&["walk"]), "walk");
        assert_eq!(label(&["ride_hail"]), "ride_hail");
        assert_eq!(label(&["walk", "ride_hail", "walk"]), "ride_hail");
    }

    #[test]
    fn test_walk_car_policy() {
        assert_eq!(
            label_realized_mode(&["walk", "car"], WalkCarPolicy::Car),
            "car"
        );
        assert_eq!(
            label_realized_mode(&["walk", "car"], WalkCarPolicy::Drive),
            "drive"
        );
    }

    #[test]
    fn test_empty_modes_are_discarded() {
        // a matching miss leaves an empty leg mode behind
        assert_eq!(label(&["car", ""]), "car");
        assert_eq!(label(&["", "walk", ""]), "walk");
    }

    #[test]
    fn test_unclassified_sets() {
        assert_eq!(label(&[]), "unclassified");
        assert_eq!(label(&[""]), "unclassified");
        assert_eq!(label(&["bus"]), "unclassified");
        assert_eq!(label(&["car", "motorcycle"]), "unclassified");
    }
}
