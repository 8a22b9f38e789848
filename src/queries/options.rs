//! Tunable knobs for the taxi park queries.

use std::fmt;
use std::sync::Arc;

use crate::engine::QueryObserver;
use crate::error::{QueryError, QueryResult};
use crate::types::DurationPeriod;

/// Parameters of the Pareto ("20% of drivers earn 80% of the income") check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParetoOptions {
    /// Share of drivers that form the top group, in `[0, 1]`.
    ///
    /// The group size is `floor(top_driver_share * all_drivers.len())`.
    pub top_driver_share: f64,
    /// The top group must earn at least this many times what everyone else earns.
    ///
    /// `4.0` corresponds to an 80/20 income split.
    pub top_to_rest_ratio: f64,
}

impl Default for ParetoOptions {
    fn default() -> Self {
        Self {
            top_driver_share: 0.2,
            top_to_rest_ratio: 4.0,
        }
    }
}

impl ParetoOptions {
    /// Check that the shares and ratios are usable.
    pub fn validate(&self) -> QueryResult<()> {
        if !self.top_driver_share.is_finite() || !(0.0..=1.0).contains(&self.top_driver_share) {
            return Err(QueryError::invalid_options(format!(
                "top_driver_share must be within [0, 1], got {}",
                self.top_driver_share
            )));
        }
        if !self.top_to_rest_ratio.is_finite() || self.top_to_rest_ratio < 0.0 {
            return Err(QueryError::invalid_options(format!(
                "top_to_rest_ratio must be a non-negative number, got {}",
                self.top_to_rest_ratio
            )));
        }
        Ok(())
    }

    /// Size of the top group for a park with `driver_count` drivers.
    pub(crate) fn top_group_size(&self, driver_count: usize) -> usize {
        (driver_count as f64 * self.top_driver_share) as usize
    }
}

/// Options controlling [`crate::engine::QueryEngine`].
///
/// Use [`Default`] for the standard 10-minute buckets and the 80/20 Pareto split.
#[derive(Clone)]
pub struct QueryOptions {
    /// Width of a trip duration bucket, in minutes. Must be > 0.
    pub period_width: u32,
    /// Pareto check parameters.
    pub pareto: ParetoOptions,
    /// Optional observer for query events.
    pub observer: Option<Arc<dyn QueryObserver>>,
}

impl fmt::Debug for QueryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOptions")
            .field("period_width", &self.period_width)
            .field("pareto", &self.pareto)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            period_width: DurationPeriod::DEFAULT_WIDTH,
            pareto: ParetoOptions::default(),
            observer: None,
        }
    }
}

impl QueryOptions {
    /// Check every option, returning the first problem found.
    pub fn validate(&self) -> QueryResult<()> {
        if self.period_width == 0 {
            return Err(QueryError::invalid_options("period_width must be > 0"));
        }
        self.pareto.validate()
    }
}
