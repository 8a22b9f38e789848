//! Core data model for the taxi park.
//!
//! A [`TaxiPark`] is an immutable snapshot of drivers, passengers and the [`Trip`]s they took.
//! Query functions in [`crate::queries`] read it and never modify it.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A driver, identified only by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Driver {
    /// Unique driver name, e.g. `D-1`.
    pub name: String,
}

impl Driver {
    /// Create a driver with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A passenger, identified only by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passenger {
    /// Unique passenger name, e.g. `P-1`.
    pub name: String,
}

impl Passenger {
    /// Create a passenger with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Driver who performed the trip.
    pub driver: Driver,
    /// Everyone who rode along. Usually non-empty, but that is not enforced.
    pub passengers: BTreeSet<Passenger>,
    /// Duration in minutes.
    pub duration: u32,
    /// Price of the trip.
    pub cost: f64,
    /// Discount in `(0, 1]`. `None` (or zero) means no discount was applied.
    #[serde(default)]
    pub discount: Option<f64>,
}

impl Trip {
    /// Create an undiscounted trip.
    pub fn new(
        driver: Driver,
        passengers: impl IntoIterator<Item = Passenger>,
        duration: u32,
        cost: f64,
    ) -> Self {
        Self {
            driver,
            passengers: passengers.into_iter().collect(),
            duration,
            cost,
            discount: None,
        }
    }

    /// Return a copy of this trip with `discount` applied.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Whether a non-zero discount was applied to this trip.
    pub fn is_discounted(&self) -> bool {
        self.discount.unwrap_or(0.0) > 0.0
    }
}

/// Immutable snapshot of the whole taxi park.
///
/// Trips may reference drivers or passengers that are missing from `all_drivers` /
/// `all_passengers`; keeping the snapshot consistent is the caller's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxiPark {
    /// Every driver employed by the park, including ones that never drove.
    pub all_drivers: BTreeSet<Driver>,
    /// Every registered passenger, including ones that never rode.
    pub all_passengers: BTreeSet<Passenger>,
    /// Trips in the order they were recorded.
    pub trips: Vec<Trip>,
}

impl TaxiPark {
    /// Create a snapshot from its parts.
    pub fn new(
        all_drivers: impl IntoIterator<Item = Driver>,
        all_passengers: impl IntoIterator<Item = Passenger>,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            all_drivers: all_drivers.into_iter().collect(),
            all_passengers: all_passengers.into_iter().collect(),
            trips,
        }
    }

    /// Number of recorded trips.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }
}

/// Multi-line rendering used in assertion messages and logs.
impl fmt::Display for TaxiPark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Taxi park:")?;
        writeln!(f, "Drivers: {}", join(&self.all_drivers))?;
        writeln!(f, "Passengers: {}", join(&self.all_passengers))?;
        write!(f, "Trips:")?;
        for trip in &self.trips {
            write!(
                f,
                "\n  {} -> [{}], {} min, {:.1}",
                trip.driver,
                join(&trip.passengers),
                trip.duration,
                trip.cost
            )?;
            if let Some(discount) = trip.discount {
                write!(f, ", discount {discount}")?;
            }
        }
        Ok(())
    }
}

fn join<T: fmt::Display>(items: &BTreeSet<T>) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A fixed-width bucket of trip durations, e.g. `30..39`.
///
/// The bucket is fully determined by its lower bound and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DurationPeriod {
    /// First minute covered by the bucket (a multiple of `width`).
    pub start: u32,
    /// Number of minutes covered by the bucket; always > 0.
    pub width: u32,
}

impl DurationPeriod {
    /// The default bucket width, in minutes.
    pub const DEFAULT_WIDTH: u32 = 10;

    /// The bucket of width `width` that contains `duration`.
    ///
    /// # Panics
    ///
    /// Panics if `width == 0`.
    pub fn containing(duration: u32, width: u32) -> Self {
        assert!(width > 0, "period width must be > 0");
        Self {
            start: duration / width * width,
            width,
        }
    }

    /// Last minute covered by the bucket.
    ///
    /// Widened to `u64`: the bucket holding the longest `u32` durations ends past `u32::MAX`.
    pub fn end(&self) -> u64 {
        u64::from(self.start) + u64::from(self.width) - 1
    }

    /// The bucket as an inclusive range.
    pub fn range(&self) -> RangeInclusive<u64> {
        u64::from(self.start)..=self.end()
    }

    /// Whether `duration` falls into this bucket.
    pub fn contains(&self, duration: u32) -> bool {
        self.range().contains(&u64::from(duration))
    }
}

impl fmt::Display for DurationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_containing_rounds_down_to_width() {
        assert_eq!(DurationPeriod::containing(0, 10).range(), 0..=9);
        assert_eq!(DurationPeriod::containing(9, 10).range(), 0..=9);
        assert_eq!(DurationPeriod::containing(35, 10).range(), 30..=39);
        assert_eq!(DurationPeriod::containing(35, 15).range(), 30..=44);
        assert_eq!(DurationPeriod::containing(35, 10).to_string(), "30..39");
    }

    #[test]
    fn period_at_the_top_of_the_duration_range_keeps_its_width() {
        let p = DurationPeriod::containing(u32::MAX, 10);
        assert_eq!(p.start, 4_294_967_290);
        assert_eq!(p.end(), 4_294_967_299);
        assert_eq!(p.range().count(), 10);
        assert!(p.contains(u32::MAX));
        assert_eq!(p.to_string(), "4294967290..4294967299");
    }

    #[test]
    fn period_contains_only_its_minutes() {
        let p = DurationPeriod::containing(20, 10);
        assert!(p.contains(20));
        assert!(p.contains(29));
        assert!(!p.contains(19));
        assert!(!p.contains(30));
    }

    #[test]
    #[should_panic(expected = "period width must be > 0")]
    fn period_containing_panics_on_zero_width() {
        let _ = DurationPeriod::containing(5, 0);
    }

    #[test]
    fn zero_discount_is_not_a_discount() {
        let trip = Trip::new(Driver::new("D-1"), [Passenger::new("P-1")], 10, 5.0);
        assert!(!trip.is_discounted());
        assert!(!trip.clone().with_discount(0.0).is_discounted());
        assert!(trip.with_discount(0.1).is_discounted());
    }

    #[test]
    fn display_lists_drivers_passengers_and_trips() {
        let park = TaxiPark::new(
            [Driver::new("D-1"), Driver::new("D-2")],
            [Passenger::new("P-1")],
            vec![Trip::new(Driver::new("D-1"), [Passenger::new("P-1")], 12, 20.0).with_discount(0.2)],
        );

        assert_eq!(
            park.to_string(),
            "Taxi park:\nDrivers: D-1, D-2\nPassengers: P-1\nTrips:\n  D-1 -> [P-1], 12 min, 20.0, discount 0.2"
        );
    }
}
