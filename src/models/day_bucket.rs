use crate::models::arrival::ArrivalLog;
use crate::models::teaching::TeachingLog;

/// The set of logs associated with one calendar date: at most one arrival
/// and an ordered sequence of teaching sessions.
///
/// Buckets are a read-only projection over store state, rebuilt on every
/// aggregation call and owned by that call alone; they are never persisted.
#[derive(Debug, Clone, Default)]
pub struct DayBucket {
    pub arrival: Option<ArrivalLog>,
    pub teaching: Vec<TeachingLog>,
}

impl DayBucket {
    pub fn has_logs(&self) -> bool {
        self.arrival.is_some() || !self.teaching.is_empty()
    }
}
