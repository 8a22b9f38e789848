//! Driver-centric queries over a [`crate::types::TaxiPark`].

use std::collections::{BTreeSet, HashMap};

use crate::error::QueryResult;
use crate::types::{Driver, TaxiPark};

use super::options::ParetoOptions;

/// Drivers who performed no trips.
pub fn find_fake_drivers(park: &TaxiPark) -> BTreeSet<Driver> {
    let active: BTreeSet<&Driver> = park.trips.iter().map(|trip| &trip.driver).collect();
    park.all_drivers
        .iter()
        .filter(|driver| !active.contains(driver))
        .cloned()
        .collect()
}

/// Check whether 20% of the drivers earn at least 80% of the income.
///
/// See [`check_pareto_principle_with`] for the exact rule.
pub fn check_pareto_principle(park: &TaxiPark) -> bool {
    pareto_holds(park, &ParetoOptions::default())
}

/// Check the Pareto principle with custom shares.
///
/// The top group has `floor(top_driver_share * all_drivers.len())` drivers, picked by descending
/// income (sum of trip costs). Returns `false` when that group is empty or there are no trips;
/// otherwise `true` iff the top group earns at least `top_to_rest_ratio` times the income of
/// everyone else. Drivers without trips earn nothing.
pub fn check_pareto_principle_with(park: &TaxiPark, options: &ParetoOptions) -> QueryResult<bool> {
    options.validate()?;
    Ok(pareto_holds(park, options))
}

pub(crate) fn pareto_holds(park: &TaxiPark, options: &ParetoOptions) -> bool {
    let top_count = options.top_group_size(park.all_drivers.len());
    if top_count == 0 || park.trips.is_empty() {
        return false;
    }

    let mut income_per_driver: HashMap<&Driver, f64> = HashMap::new();
    for trip in &park.trips {
        *income_per_driver.entry(&trip.driver).or_insert(0.0) += trip.cost;
    }

    let mut incomes: Vec<f64> = income_per_driver.into_values().collect();
    incomes.sort_by(|a, b| b.total_cmp(a));

    let top: f64 = incomes.iter().take(top_count).sum();
    let rest: f64 = incomes.iter().skip(top_count).sum();
    top >= options.top_to_rest_ratio * rest
}
