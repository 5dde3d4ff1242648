//! trip and leg reconstruction from transportation micro-simulation
//! event logs. decodes the raw event table, folds each person's events
//! into trips and legs, matches vehicle legs to the physical path
//! traversals that realized them, prices the result against reference
//! tables, and emits relational row sets for bulk load.
pub mod app;
pub mod cost;
pub mod model;
pub mod output;
pub mod reconstruction;
