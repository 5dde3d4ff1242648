use super::TripstitchOperation;
use clap::Parser;

/// command line tool for reconstructing traveler trips and legs from a
/// micro-simulation event log
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TripstitchApp {
    #[command(subcommand)]
    pub op: TripstitchOperation,
}
