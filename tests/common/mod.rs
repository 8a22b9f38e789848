//! Builders for sample parks shared by the integration tests.
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::ops::RangeInclusive;

use taxi_park::types::{Driver, Passenger, TaxiPark, Trip};

pub fn driver(i: u32) -> Driver {
    Driver::new(format!("D-{i}"))
}

pub fn passenger(i: u32) -> Passenger {
    Passenger::new(format!("P-{i}"))
}

pub fn drivers(ids: impl IntoIterator<Item = u32>) -> BTreeSet<Driver> {
    ids.into_iter().map(driver).collect()
}

pub fn passengers(ids: impl IntoIterator<Item = u32>) -> BTreeSet<Passenger> {
    ids.into_iter().map(passenger).collect()
}

/// A 10 minute trip costing 10.0.
pub fn trip(driver_id: u32, passenger_ids: impl IntoIterator<Item = u32>) -> Trip {
    trip_with(driver_id, passenger_ids, 10, 10.0)
}

pub fn trip_with(
    driver_id: u32,
    passenger_ids: impl IntoIterator<Item = u32>,
    duration: u32,
    cost: f64,
) -> Trip {
    Trip::new(
        driver(driver_id),
        passenger_ids.into_iter().map(passenger),
        duration,
        cost,
    )
}

pub fn taxi_park(
    driver_ids: RangeInclusive<u32>,
    passenger_ids: RangeInclusive<u32>,
    trips: Vec<Trip>,
) -> TaxiPark {
    TaxiPark::new(driver_ids.map(driver), passenger_ids.map(passenger), trips)
}

pub fn load_fixture(name: &str) -> TaxiPark {
    let text = fs::read_to_string(format!("tests/fixtures/{name}")).unwrap();
    serde_json::from_str(&text).unwrap()
}
