use crate::models::arrival::ArrivalStatus;
use chrono::NaiveTime;

/// Classify an arrival against a threshold time of day.
///
/// Arriving exactly at the threshold still counts as on time; only a
/// strictly later arrival is late. The threshold comes from configuration
/// and is supplied by the caller, never read here.
pub fn classify_arrival(arrival: NaiveTime, threshold: NaiveTime) -> ArrivalStatus {
    if arrival <= threshold {
        ArrivalStatus::OnTime
    } else {
        ArrivalStatus::Late
    }
}
