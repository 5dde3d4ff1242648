pub mod event;
pub mod mode;
pub mod trip;
pub mod vehicle;
