pub mod decode_ops;
mod event;
mod event_error;
mod event_kind;

pub use event::Event;
pub use event_error::EventError;
pub use event_kind::EventKind;
