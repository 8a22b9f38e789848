//! Trip duration bucketing.

use std::collections::BTreeMap;

use crate::error::{QueryError, QueryResult};
use crate::types::{DurationPeriod, TaxiPark};

/// The 10-minute period (`0..9`, `10..19`, ...) containing the most trips.
///
/// Returns `None` when there are no trips. If several periods tie, any of them may be returned.
pub fn find_the_most_frequent_trip_duration_period(park: &TaxiPark) -> Option<DurationPeriod> {
    most_frequent_period(park, DurationPeriod::DEFAULT_WIDTH)
}

/// Like [`find_the_most_frequent_trip_duration_period`], with buckets `width` minutes wide.
pub fn find_the_most_frequent_trip_duration_period_with(
    park: &TaxiPark,
    width: u32,
) -> QueryResult<Option<DurationPeriod>> {
    if width == 0 {
        return Err(QueryError::invalid_options("period_width must be > 0"));
    }
    Ok(most_frequent_period(park, width))
}

/// `width` must be > 0.
pub(crate) fn most_frequent_period(park: &TaxiPark, width: u32) -> Option<DurationPeriod> {
    let mut trips_per_period: BTreeMap<DurationPeriod, usize> = BTreeMap::new();
    for trip in &park.trips {
        *trips_per_period
            .entry(DurationPeriod::containing(trip.duration, width))
            .or_insert(0) += 1;
    }

    trips_per_period
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(period, _)| period)
}
