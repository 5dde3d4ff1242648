mod bracket;
mod cost_config;
mod cost_error;
mod cost_model;
mod fuel_prices;
mod incentives;
mod person_attributes;
mod ride_hail_rates;
mod route_index;
pub mod table_ops;
mod transit_fares;

pub use bracket::Bracket;
pub use cost_config::CostConfig;
pub use cost_error::CostError;
pub use cost_model::CostModel;
pub use fuel_prices::{FuelPriceRow, FuelPriceTable};
pub use incentives::{IncentiveRow, IncentiveTable};
pub use person_attributes::{PersonAttributeTable, PersonAttributes};
pub use ride_hail_rates::RideHailRates;
pub use route_index::{RouteIndex, TripRouteRow};
pub use transit_fares::{TransitFareRow, TransitFareTable};
