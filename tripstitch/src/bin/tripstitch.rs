//! reconstructs traveler trips and legs from a transportation
//! micro-simulation event log and prices them against reference tables.
use clap::Parser;
use tripstitch::app::TripstitchApp;

fn main() {
    env_logger::init();
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    let args = TripstitchApp::parse();
    args.op.run()
}
