//! Observed query execution.
//!
//! [`QueryEngine`] sits "above" [`crate::queries`] and provides:
//!
//! - validated, reusable [`QueryOptions`] (bucket width, Pareto shares)
//! - observer hooks for logging each query
//! - running metrics
//!
//! The engine never changes query results; it only wraps them.
//!
//! ```rust
//! use std::sync::Arc;
//! use taxi_park::engine::{QueryEngine, TracingQueryObserver};
//! use taxi_park::queries::QueryOptions;
//! use taxi_park::types::TaxiPark;
//!
//! # fn main() -> Result<(), taxi_park::QueryError> {
//! let engine = QueryEngine::new(QueryOptions::default())?
//!     .with_observer(Arc::new(TracingQueryObserver));
//! let park = TaxiPark::default();
//! assert_eq!(engine.find_the_most_frequent_trip_duration_period(&park), None);
//! assert_eq!(engine.metrics().snapshot().queries_finished, 1);
//! # Ok(())
//! # }
//! ```

mod observer;

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use crate::error::QueryResult;
use crate::queries::{self, drivers, periods, QueryOptions};
use crate::types::{Driver, DurationPeriod, Passenger, TaxiPark};

pub use observer::{
    CompositeObserver, QueryEvent, QueryKind, QueryMetrics, QueryMetricsSnapshot, QueryObserver,
    QueryOutcome, StdErrQueryObserver, TracingQueryObserver,
};

/// Runs taxi park queries with a fixed set of options, reporting each run to an observer.
pub struct QueryEngine {
    opts: QueryOptions,
    metrics: Arc<QueryMetrics>,
}

impl QueryEngine {
    /// Create an engine, rejecting invalid options.
    pub fn new(opts: QueryOptions) -> QueryResult<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            metrics: Arc::new(QueryMetrics::new()),
        })
    }

    /// Attach an observer for query events, replacing any observer set in the options.
    pub fn with_observer(mut self, observer: Arc<dyn QueryObserver>) -> Self {
        self.opts.observer = Some(observer);
        self
    }

    /// Options this engine was built with.
    pub fn options(&self) -> &QueryOptions {
        &self.opts
    }

    /// Get a handle to the running metrics.
    pub fn metrics(&self) -> Arc<QueryMetrics> {
        Arc::clone(&self.metrics)
    }

    /// See [`queries::find_fake_drivers`].
    pub fn find_fake_drivers(&self, park: &TaxiPark) -> BTreeSet<Driver> {
        self.run(
            QueryKind::FakeDrivers,
            park,
            queries::find_fake_drivers,
            |r: &BTreeSet<Driver>| QueryOutcome::Size(r.len()),
        )
    }

    /// See [`queries::find_faithful_passengers`].
    pub fn find_faithful_passengers(&self, park: &TaxiPark, min_trips: i64) -> BTreeSet<Passenger> {
        self.run(
            QueryKind::FaithfulPassengers,
            park,
            |p| queries::find_faithful_passengers(p, min_trips),
            |r: &BTreeSet<Passenger>| QueryOutcome::Size(r.len()),
        )
    }

    /// See [`queries::find_frequent_passengers`].
    pub fn find_frequent_passengers(&self, park: &TaxiPark, driver: &Driver) -> BTreeSet<Passenger> {
        self.run(
            QueryKind::FrequentPassengers,
            park,
            |p| queries::find_frequent_passengers(p, driver),
            |r: &BTreeSet<Passenger>| QueryOutcome::Size(r.len()),
        )
    }

    /// See [`queries::find_smart_passengers`].
    pub fn find_smart_passengers(&self, park: &TaxiPark) -> BTreeSet<Passenger> {
        self.run(
            QueryKind::SmartPassengers,
            park,
            queries::find_smart_passengers,
            |r: &BTreeSet<Passenger>| QueryOutcome::Size(r.len()),
        )
    }

    /// Busiest duration period, using the configured bucket width.
    pub fn find_the_most_frequent_trip_duration_period(
        &self,
        park: &TaxiPark,
    ) -> Option<DurationPeriod> {
        self.run(
            QueryKind::MostFrequentTripDurationPeriod,
            park,
            |p| periods::most_frequent_period(p, self.opts.period_width),
            |r: &Option<DurationPeriod>| QueryOutcome::Period(*r),
        )
    }

    /// Pareto check, using the configured shares.
    pub fn check_pareto_principle(&self, park: &TaxiPark) -> bool {
        self.run(
            QueryKind::ParetoPrinciple,
            park,
            |p| drivers::pareto_holds(p, &self.opts.pareto),
            |r: &bool| QueryOutcome::Flag(*r),
        )
    }

    fn run<T>(
        &self,
        query: QueryKind,
        park: &TaxiPark,
        exec: impl FnOnce(&TaxiPark) -> T,
        summarize: impl FnOnce(&T) -> QueryOutcome,
    ) -> T {
        let start = Instant::now();
        let trips = park.trip_count();
        self.metrics.on_query_start(trips);
        self.emit(QueryEvent::QueryStarted { query, trips });

        let out = exec(park);

        let elapsed = start.elapsed();
        self.metrics.on_query_end(elapsed);
        self.emit(QueryEvent::QueryFinished {
            query,
            elapsed,
            outcome: summarize(&out),
        });
        out
    }

    fn emit(&self, event: QueryEvent) {
        if let Some(o) = &self.opts.observer {
            o.on_event(&event);
        }
    }
}
