//! Read-only analytical queries over a [`crate::types::TaxiPark`].
//!
//! Every query is a pure function: it borrows the park, builds its own local accumulators and
//! returns a freshly allocated result. Calling a query twice on the same snapshot yields the same
//! answer, and any number of threads may query a shared snapshot.
//!
//! - [`find_fake_drivers`]: drivers without trips
//! - [`find_faithful_passengers`]: passengers with at least `n` trips
//! - [`find_frequent_passengers`]: passengers a given driver took more than once
//! - [`find_smart_passengers`]: passengers with a discount on most of their trips
//! - [`find_the_most_frequent_trip_duration_period`]: the busiest 10-minute duration bucket
//! - [`check_pareto_principle`]: do 20% of the drivers earn 80% of the income?
//!
//! ## Example
//!
//! ```rust
//! use taxi_park::queries::{check_pareto_principle, find_fake_drivers};
//! use taxi_park::types::{Driver, Passenger, TaxiPark, Trip};
//!
//! let d1 = Driver::new("D-1");
//! let park = TaxiPark::new(
//!     [d1.clone(), Driver::new("D-2")],
//!     [Passenger::new("P-1")],
//!     vec![Trip::new(d1, [Passenger::new("P-1")], 12, 20.0)],
//! );
//!
//! assert_eq!(find_fake_drivers(&park).len(), 1);
//! // floor(0.2 * 2) == 0 drivers in the top group.
//! assert!(!check_pareto_principle(&park));
//! ```

pub mod drivers;
pub mod options;
pub mod passengers;
pub mod periods;

pub use drivers::{check_pareto_principle, check_pareto_principle_with, find_fake_drivers};
pub use options::{ParetoOptions, QueryOptions};
pub use passengers::{find_faithful_passengers, find_frequent_passengers, find_smart_passengers};
pub use periods::{
    find_the_most_frequent_trip_duration_period, find_the_most_frequent_trip_duration_period_with,
};
