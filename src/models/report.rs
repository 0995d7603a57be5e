use crate::models::arrival::ArrivalLog;
use crate::models::teaching::TeachingLog;

/// The filtered, date/staff-scoped set of logs used for tabular reporting.
/// The two sequences are independent; they are never merged or correlated
/// by date at this layer.
#[derive(Debug, Clone, Default)]
pub struct ReportSelection {
    pub arrivals: Vec<ArrivalLog>,
    pub teaching: Vec<TeachingLog>,
}

impl ReportSelection {
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty() && self.teaching.is_empty()
    }
}
