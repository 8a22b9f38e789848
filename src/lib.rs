//! `taxi-park` answers a handful of analytical questions about an immutable, in-memory snapshot
//! of a taxi service ([`types::TaxiPark`]): who never drove, who rides often, who rides on
//! discounts, how long trips usually take and whether income follows the 80/20 rule.
//!
//! It also ships a small, unrelated string predicate, [`nice::is_nice`].
//!
//! ## Quick example: query a park
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use taxi_park::queries::{find_faithful_passengers, find_the_most_frequent_trip_duration_period};
//! use taxi_park::types::{Driver, Passenger, TaxiPark, Trip};
//!
//! let (d1, d2) = (Driver::new("D-1"), Driver::new("D-2"));
//! let (p1, p2) = (Passenger::new("P-1"), Passenger::new("P-2"));
//! let park = TaxiPark::new(
//!     [d1.clone(), d2.clone()],
//!     [p1.clone(), p2.clone()],
//!     vec![
//!         Trip::new(d1.clone(), [p1.clone()], 12, 20.0),
//!         Trip::new(d2, [p1.clone(), p2], 17, 31.5).with_discount(0.1),
//!         Trip::new(d1, [p1.clone()], 41, 50.0),
//!     ],
//! );
//!
//! assert_eq!(find_faithful_passengers(&park, 3), BTreeSet::from([p1]));
//! let period = find_the_most_frequent_trip_duration_period(&park).unwrap();
//! assert_eq!(period.range(), 10..=19);
//! ```
//!
//! ## Quick example: nice strings
//!
//! ```rust
//! use taxi_park::nice::is_nice;
//!
//! assert!(is_nice("baaa"));
//! assert!(!is_nice("aza"));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: drivers, passengers, trips and the park snapshot
//! - [`queries`]: the pure query functions and their [`queries::QueryOptions`]
//! - [`engine`]: validated options, observer hooks and metrics around the queries
//! - [`nice`]: the string predicate
//! - [`error`]: error type for rejected options

pub mod engine;
pub mod error;
pub mod nice;
pub mod queries;
pub mod types;

pub use error::{QueryError, QueryResult};
