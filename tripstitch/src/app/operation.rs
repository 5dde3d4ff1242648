use crate::cost::{CostConfig, CostModel, FuelPriceTable};
use crate::model::event::decode_ops;
use crate::model::trip::PersonDay;
use crate::model::vehicle::VehiclePathIndex;
use crate::output::{emit_ops, write_ops};
use crate::reconstruction::{event_grouping, reconstruct_ops};
use clap::Subcommand;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TripstitchOperation {
    /// reconstruct trips and legs from an event log and write the row sets
    Reconstruct {
        /// simulator event log, CSV with headers, optionally gzipped
        #[arg(long)]
        events_file: String,
        /// person attributes table (person_id, age, income)
        #[arg(long)]
        person_attributes_file: String,
        /// transit fare table (agency_id, route_id, age, amount)
        #[arg(long)]
        transit_fares_file: String,
        /// incentive table (mode, age, income, amount)
        #[arg(long)]
        incentives_file: String,
        /// fuel price table (fuel_type, price_per_joule)
        #[arg(long)]
        fuel_prices_file: String,
        /// transit trip to route mapping (route_id, trip_id)
        #[arg(long)]
        trip_to_route_file: String,
        /// optional .toml or .json file of ride hail rates and labeling policy
        #[arg(long)]
        cost_config_file: Option<String>,
        /// stamped into every output row
        #[arg(long)]
        run_id: String,
        /// scenario name stamped into link and vehicle rows
        #[arg(long)]
        scenario: String,
        #[arg(long)]
        output_directory: String,
        /// write .csv.gz instead of .csv
        #[arg(long, default_value_t = true)]
        compress: bool,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
        /// worker count for per-person reconstruction, 0 for one per core
        #[arg(long, default_value_t = 0)]
        parallelism: usize,
    },
    /// reconstruct without writing row sets and print run statistics
    Summarize {
        /// simulator event log, CSV with headers, optionally gzipped
        #[arg(long)]
        events_file: String,
        /// optional .toml or .json file of ride hail rates and labeling policy
        #[arg(long)]
        cost_config_file: Option<String>,
        /// worker count for per-person reconstruction, 0 for one per core
        #[arg(long, default_value_t = 0)]
        parallelism: usize,
    },
}

impl TripstitchOperation {
    pub fn run(&self) {
        match self {
            TripstitchOperation::Reconstruct {
                events_file,
                person_attributes_file,
                transit_fares_file,
                incentives_file,
                fuel_prices_file,
                trip_to_route_file,
                cost_config_file,
                run_id,
                scenario,
                output_directory,
                compress,
                overwrite,
                parallelism,
            } => {
                set_parallelism(*parallelism);
                let config = load_cost_config(cost_config_file.as_ref());
                let policy = config.walk_car_policy;
                let fuel_prices = FuelPriceTable::from_file(fuel_prices_file)
                    .expect("failed reading fuel price table");
                let cost_model = CostModel::from_files(
                    person_attributes_file,
                    transit_fares_file,
                    incentives_file,
                    trip_to_route_file,
                    config,
                )
                .expect("failed reading cost reference tables");
                let events =
                    decode_ops::read_events(events_file).expect("failed decoding event log");
                log::info!("decoded {} events from {}", events.len(), events_file);

                let paths = VehiclePathIndex::from_events(&events, &fuel_prices);
                log::info!(
                    "indexed {} traversals of {} vehicles",
                    paths.n_traversals(),
                    paths.n_vehicles()
                );
                let grouped = event_grouping::group_by_person(&events);
                let mut days = reconstruct_ops::reconstruct_all(&grouped, &paths, policy);
                cost_model.price_all(&mut days);

                let rows = emit_ops::emit_row_sets(run_id, scenario, &days, &paths);
                log::info!("writing {} rows to {}", rows.total(), output_directory);
                write_ops::write_row_sets(
                    &rows,
                    Path::new(output_directory),
                    *compress,
                    *overwrite,
                )
                .unwrap_or_else(|e| panic!("failed writing row sets to {output_directory}: {e}"));
            }
            TripstitchOperation::Summarize {
                events_file,
                cost_config_file,
                parallelism,
            } => {
                set_parallelism(*parallelism);
                let config = load_cost_config(cost_config_file.as_ref());
                let events =
                    decode_ops::read_events(events_file).expect("failed decoding event log");
                log::info!("decoded {} events from {}", events.len(), events_file);

                let paths = VehiclePathIndex::from_events(&events, &FuelPriceTable::default());
                let grouped = event_grouping::group_by_person(&events);
                let days =
                    reconstruct_ops::reconstruct_all(&grouped, &paths, config.walk_car_policy);
                summarize(&days);
            }
        }
    }
}

fn set_parallelism(parallelism: usize) {
    // 0 keeps rayon's default of one worker per core
    if parallelism == 0 {
        return;
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .build_global()
        .expect("failed building the reconstruction worker pool");
}

fn load_cost_config(cost_config_file: Option<&String>) -> CostConfig {
    match cost_config_file {
        Some(f) => CostConfig::try_from(f).expect("failed reading cost configuration"),
        None => CostConfig::default(),
    }
}

fn summarize(days: &[PersonDay]) {
    let trips = days.iter().flat_map(|day| day.trips.iter()).collect_vec();
    let n_legs: usize = trips.iter().map(|trip| trip.legs.len()).sum();
    println!("persons: {}", days.len());
    println!("trips:   {}", trips.len());
    println!("legs:    {}", n_legs);

    println!("\ntrips by realized mode:");
    let by_mode = trips.iter().counts_by(|trip| trip.realized_mode.as_str());
    for (realized_mode, count) in by_mode.iter().sorted() {
        println!("  {realized_mode}: {count}");
    }

    println!("\ntrips by departure hour:");
    let by_hour = trips.iter().counts_by(|trip| trip.trip_start / 3600);
    for (hour, count) in by_hour.iter().sorted() {
        println!("  {hour:02}: {count}");
    }
}
