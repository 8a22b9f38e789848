use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::types::DurationPeriod;

/// Identifies one of the taxi park queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    FakeDrivers,
    FaithfulPassengers,
    FrequentPassengers,
    SmartPassengers,
    MostFrequentTripDurationPeriod,
    ParetoPrinciple,
}

impl QueryKind {
    /// Stable snake_case name, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FakeDrivers => "fake_drivers",
            Self::FaithfulPassengers => "faithful_passengers",
            Self::FrequentPassengers => "frequent_passengers",
            Self::SmartPassengers => "smart_passengers",
            Self::MostFrequentTripDurationPeriod => "most_frequent_trip_duration_period",
            Self::ParetoPrinciple => "pareto_principle",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary of a query result, small enough to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Number of drivers/passengers returned.
    Size(usize),
    /// The busiest duration period, if any.
    Period(Option<DurationPeriod>),
    /// A yes/no answer.
    Flag(bool),
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(n) => write!(f, "size={n}"),
            Self::Period(Some(p)) => write!(f, "period={p}"),
            Self::Period(None) => f.write_str("period=none"),
            Self::Flag(b) => write!(f, "flag={b}"),
        }
    }
}

/// Events emitted by [`super::QueryEngine`].
#[derive(Debug, Clone)]
pub enum QueryEvent {
    QueryStarted {
        query: QueryKind,
        trips: usize,
    },
    QueryFinished {
        query: QueryKind,
        elapsed: Duration,
        outcome: QueryOutcome,
    },
}

/// Observer hook for query events.
pub trait QueryObserver: Send + Sync {
    fn on_event(&self, event: &QueryEvent);
}

/// A simple stderr logger for query events.
#[derive(Debug, Default)]
pub struct StdErrQueryObserver;

impl QueryObserver for StdErrQueryObserver {
    fn on_event(&self, event: &QueryEvent) {
        match event {
            QueryEvent::QueryStarted { query, trips } => {
                eprintln!("[query][start] {query} trips={trips}");
            }
            QueryEvent::QueryFinished {
                query,
                elapsed,
                outcome,
            } => {
                eprintln!("[query][done] {query} {outcome} elapsed={elapsed:?}");
            }
        }
    }
}

/// Forwards query events to `tracing`.
///
/// Starts are logged at `debug`, completions at `info`. Install a subscriber to see them.
#[derive(Debug, Default)]
pub struct TracingQueryObserver;

impl QueryObserver for TracingQueryObserver {
    fn on_event(&self, event: &QueryEvent) {
        match event {
            QueryEvent::QueryStarted { query, trips } => {
                tracing::debug!(query = query.name(), trips, "query started");
            }
            QueryEvent::QueryFinished {
                query,
                elapsed,
                outcome,
            } => {
                tracing::info!(
                    query = query.name(),
                    outcome = %outcome,
                    elapsed_us = elapsed.as_micros() as u64,
                    "query finished"
                );
            }
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn QueryObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn QueryObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl QueryObserver for CompositeObserver {
    fn on_event(&self, event: &QueryEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Running counters for an engine.
///
/// The engine updates these as queries run; callers can snapshot them at any time.
#[derive(Debug, Default)]
pub struct QueryMetrics {
    queries_started: AtomicU64,
    queries_finished: AtomicU64,
    trips_in_snapshot: AtomicU64,
    elapsed_ns: AtomicU64,
}

impl QueryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_query_start(&self, trips: usize) {
        let _ = self.queries_started.fetch_add(1, Ordering::SeqCst);
        let _ = self.trips_in_snapshot.fetch_add(trips as u64, Ordering::SeqCst);
    }

    pub fn on_query_end(&self, elapsed: Duration) {
        let _ = self.queries_finished.fetch_add(1, Ordering::SeqCst);
        let add = elapsed.as_nanos().min(u64::MAX as u128) as u64;
        let _ = self.elapsed_ns.fetch_add(add, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> QueryMetricsSnapshot {
        QueryMetricsSnapshot {
            queries_started: self.queries_started.load(Ordering::SeqCst),
            queries_finished: self.queries_finished.load(Ordering::SeqCst),
            trips_in_snapshot: self.trips_in_snapshot.load(Ordering::SeqCst),
            elapsed: Duration::from_nanos(self.elapsed_ns.load(Ordering::SeqCst)),
        }
    }
}

/// Immutable snapshot of [`QueryMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMetricsSnapshot {
    pub queries_started: u64,
    pub queries_finished: u64,
    /// Sum of `TaxiPark::trip_count` over every queried snapshot. Queries that answer without
    /// reading trips still add the full count.
    pub trips_in_snapshot: u64,
    /// Total time spent inside queries.
    pub elapsed: Duration,
}

impl fmt::Display for QueryMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "queries={}/{}, trips_in_snapshot={}, elapsed={:?}",
            self.queries_finished, self.queries_started, self.trips_in_snapshot, self.elapsed
        )
    }
}
