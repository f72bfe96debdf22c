//! Shared helpers for backend series normalization.

use nexus_types::Observation;

use crate::InstrumentId;

/// Order a series ascending by timestamp.
///
/// The sort is stable: records sharing a timestamp keep their source order.
pub fn sort_by_timestamp<T: Observation>(series: &mut [T]) {
    series.sort_by_key(Observation::timestamp);
}

/// Copy the records belonging to `instrument`, ordered ascending by timestamp.
///
/// Matching is exact on the identifier string; an unknown instrument yields an
/// empty vector.
#[must_use]
pub fn select_instrument<T: Observation + Clone>(rows: &[T], instrument: &InstrumentId) -> Vec<T> {
    let mut out: Vec<T> = rows
        .iter()
        .filter(|r| r.instrument_id() == instrument.as_str())
        .cloned()
        .collect();
    sort_by_timestamp(&mut out);
    out
}
