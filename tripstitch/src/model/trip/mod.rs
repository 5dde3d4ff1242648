mod leg;
pub mod mode_label;
mod person_day;
mod trip_record;

pub use leg::Leg;
pub use mode_label::WalkCarPolicy;
pub use person_day::PersonDay;
pub use trip_record::Trip;
