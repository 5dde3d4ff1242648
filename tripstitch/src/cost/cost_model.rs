use super::{
    CostConfig, CostError, IncentiveTable, PersonAttributeTable, PersonAttributes, RouteIndex,
    TransitFareTable,
};
use crate::model::{
    mode,
    trip::{Leg, PersonDay, Trip},
};
use rayon::prelude::*;

/// prices reconstructed trips against the reference tables: transit fares,
/// ride hail fares, incentives, and the fuel cost and toll rollups. lookup
/// misses recover as zero with a warning; pricing never fails a run.
pub struct CostModel {
    pub person_attributes: PersonAttributeTable,
    pub transit_fares: TransitFareTable,
    pub incentives: IncentiveTable,
    pub routes: RouteIndex,
    pub config: CostConfig,
}

impl CostModel {
    pub fn from_files(
        person_attributes_file: &str,
        transit_fares_file: &str,
        incentives_file: &str,
        trip_to_route_file: &str,
        config: CostConfig,
    ) -> Result<CostModel, CostError> {
        Ok(CostModel {
            person_attributes: PersonAttributeTable::from_file(person_attributes_file)?,
            transit_fares: TransitFareTable::from_file(transit_fares_file)?,
            incentives: IncentiveTable::from_file(incentives_file)?,
            routes: RouteIndex::from_file(trip_to_route_file)?,
            config,
        })
    }

    /// prices every person day in parallel. each day touches only its own
    /// trips plus the shared read-only tables.
    pub fn price_all(&self, days: &mut [PersonDay]) {
        days.par_iter_mut().for_each(|day| self.price_person_day(day));
    }

    pub fn price_person_day(&self, day: &mut PersonDay) {
        let attributes = self.person_attributes.get(&day.person_id);
        for trip in day.trips.iter_mut() {
            self.price_trip(&day.person_id, attributes, trip);
        }
    }

    fn price_trip(&self, person_id: &str, attributes: Option<&PersonAttributes>, trip: &mut Trip) {
        for leg in trip.legs.iter_mut() {
            if mode::is_bus_like(&leg.leg_mode) {
                leg.fare = self.transit_fare(person_id, attributes, leg);
            } else if leg.leg_mode == mode::RIDE_HAIL {
                leg.fare = self
                    .config
                    .ride_hail_rates
                    .fare(leg.duration() as f64, leg.distance);
            }
        }
        trip.fare = trip.legs.iter().map(|leg| leg.fare).sum();
        trip.toll = trip.legs.iter().map(|leg| leg.toll).sum();
        trip.fuel_cost = trip
            .legs
            .iter()
            .filter(|leg| leg.leg_mode == mode::CAR)
            .map(|leg| leg.fuel_cost)
            .sum();
        if mode::is_incentive_eligible(&trip.realized_mode) {
            trip.incentives = self.incentive(person_id, attributes, &trip.realized_mode);
        }
    }

    /// the fare for one bus-like leg, resolved vehicle → transit trip →
    /// route → fare row. any miss along the chain recovers as zero.
    fn transit_fare(
        &self,
        person_id: &str,
        attributes: Option<&PersonAttributes>,
        leg: &Leg,
    ) -> f64 {
        let attrs = match attributes {
            Some(a) => a,
            None => {
                log::warn!(
                    "person '{person_id}' missing from attributes table, transit fare defaults to zero"
                );
                return 0.0;
            }
        };
        let route = match self.routes.route_for_vehicle(&leg.vehicle) {
            Some(r) => r,
            None => {
                log::warn!(
                    "no transit route known for vehicle '{}', fare defaults to zero",
                    leg.vehicle
                );
                return 0.0;
            }
        };
        match self.transit_fares.fare(route, attrs.age) {
            Some(amount) => amount,
            None => {
                log::warn!(
                    "no fare row for route '{route}' at age {}, fare defaults to zero",
                    attrs.age
                );
                0.0
            }
        }
    }

    /// the incentive for one priced trip. trips whose demographics match no
    /// row simply earn nothing; only an unknown person warrants a warning.
    fn incentive(
        &self,
        person_id: &str,
        attributes: Option<&PersonAttributes>,
        realized_mode: &str,
    ) -> f64 {
        match attributes {
            Some(attrs) => self
                .incentives
                .amount(realized_mode, attrs.age, attrs.income)
                .unwrap_or_default(),
            None => {
                log::warn!(
                    "person '{person_id}' missing from attributes table, incentive defaults to zero"
                );
                0.0
            }
        }
    }
}
