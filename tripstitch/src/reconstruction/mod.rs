mod day_state;
pub mod event_grouping;
pub mod reconstruct_ops;

pub use day_state::DayState;
pub use event_grouping::PersonEvents;
