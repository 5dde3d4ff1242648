use std::fmt::Display;

/// the event types consumed by trip reconstruction. the simulator emits
/// further types which decode to [`EventKind::Other`] so that matching over
/// kinds stays exhaustive without enumerating the whole simulator surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventKind {
    ModeChoice,
    ActivityEnd,
    ActivityStart,
    PathTraversal,
    PersonEntersVehicle,
    PersonLeavesVehicle,
    PersonCost,
    /// any event type with no role in reconstruction
    #[default]
    Other,
}

impl EventKind {
    /// `type` column tokens as written by the simulator
    pub const MODE_CHOICE: &'static str = "ModeChoice";
    pub const ACTIVITY_END: &'static str = "actend";
    pub const ACTIVITY_START: &'static str = "actstart";
    pub const PATH_TRAVERSAL: &'static str = "PathTraversal";
    pub const PERSON_ENTERS_VEHICLE: &'static str = "PersonEntersVehicle";
    pub const PERSON_LEAVES_VEHICLE: &'static str = "PersonLeavesVehicle";
    pub const PERSON_COST: &'static str = "PersonCost";
}

impl From<&str> for EventKind {
    fn from(token: &str) -> EventKind {
        match token {
            EventKind::MODE_CHOICE => EventKind::ModeChoice,
            EventKind::ACTIVITY_END => EventKind::ActivityEnd,
            EventKind::ACTIVITY_START => EventKind::ActivityStart,
            EventKind::PATH_TRAVERSAL => EventKind::PathTraversal,
            EventKind::PERSON_ENTERS_VEHICLE => EventKind::PersonEntersVehicle,
            EventKind::PERSON_LEAVES_VEHICLE => EventKind::PersonLeavesVehicle,
            EventKind::PERSON_COST => EventKind::PersonCost,
            _ => EventKind::Other,
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            EventKind::ModeChoice => EventKind::MODE_CHOICE,
            EventKind::ActivityEnd => EventKind::ACTIVITY_END,
            EventKind::ActivityStart => EventKind::ACTIVITY_START,
            EventKind::PathTraversal => EventKind::PATH_TRAVERSAL,
            EventKind::PersonEntersVehicle => EventKind::PERSON_ENTERS_VEHICLE,
            EventKind::PersonLeavesVehicle => EventKind::PERSON_LEAVES_VEHICLE,
            EventKind::PersonCost => EventKind::PERSON_COST,
            EventKind::Other => "Other",
        };
        write!(f, "{}", token)
    }
}
