mod operation;
mod tripstitch_app;

pub use operation::TripstitchOperation;
pub use tripstitch_app::TripstitchApp;
