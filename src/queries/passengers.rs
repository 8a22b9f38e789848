//! Passenger-centric queries over a [`crate::types::TaxiPark`].

use std::collections::{BTreeSet, HashMap};

use crate::types::{Driver, Passenger, TaxiPark, Trip};

/// Passengers who completed at least `min_trips` trips.
///
/// A passenger is counted once per trip, however many others shared the ride. When
/// `min_trips <= 0` every registered passenger qualifies, so `all_passengers` is returned as-is
/// (including passengers without any trip).
pub fn find_faithful_passengers(park: &TaxiPark, min_trips: i64) -> BTreeSet<Passenger> {
    if min_trips <= 0 {
        return park.all_passengers.clone();
    }
    trips_per_passenger(park.trips.iter())
        .into_iter()
        .filter(|(_, count)| (*count as i64) >= min_trips)
        .map(|(passenger, _)| passenger.clone())
        .collect()
}

/// Passengers who were taken by `driver` more than once.
pub fn find_frequent_passengers(park: &TaxiPark, driver: &Driver) -> BTreeSet<Passenger> {
    trips_per_passenger(park.trips.iter().filter(|trip| &trip.driver == driver))
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(passenger, _)| passenger.clone())
        .collect()
}

/// Passengers who had a discount on the strict majority of their trips.
///
/// Passengers without trips never qualify.
pub fn find_smart_passengers(park: &TaxiPark) -> BTreeSet<Passenger> {
    // passenger -> (total trips, discounted trips)
    let mut stats: HashMap<&Passenger, (usize, usize)> = HashMap::new();
    for trip in &park.trips {
        let discounted = trip.is_discounted();
        for passenger in &trip.passengers {
            let entry = stats.entry(passenger).or_default();
            entry.0 += 1;
            if discounted {
                entry.1 += 1;
            }
        }
    }

    stats
        .into_iter()
        .filter(|(_, (total, discounted))| 2 * *discounted > *total)
        .map(|(passenger, _)| passenger.clone())
        .collect()
}

fn trips_per_passenger<'a>(trips: impl Iterator<Item = &'a Trip>) -> HashMap<&'a Passenger, usize> {
    let mut counts = HashMap::new();
    for passenger in trips.flat_map(|trip| trip.passengers.iter()) {
        *counts.entry(passenger).or_insert(0) += 1;
    }
    counts
}
