pub mod emit_ops;
mod output_error;
pub mod rows;
pub mod write_ops;

pub use emit_ops::RowSets;
pub use output_error::OutputError;
