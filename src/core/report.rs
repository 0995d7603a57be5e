use crate::models::arrival::ArrivalLog;
use crate::models::report::ReportSelection;
use crate::models::teaching::TeachingLog;
use chrono::NaiveDate;

/// Optional inclusive date bounds; a missing side leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Select the logs matching an optional date range and an optional staff
/// scope (absent scope = all staff). The arrival and teaching sequences
/// are filtered independently and keep the order the store delivered them
/// in; nothing is re-sorted or correlated by date here.
pub fn filter_report(
    arrivals: &[ArrivalLog],
    teaching: &[TeachingLog],
    range: DateRange,
    staff_id: Option<i64>,
) -> ReportSelection {
    let arrivals = arrivals
        .iter()
        .filter(|log| range.contains(log.date))
        .filter(|log| staff_id.is_none_or(|id| log.staff_id == id))
        .cloned()
        .collect();

    let teaching = teaching
        .iter()
        .filter(|log| range.contains(log.date))
        .filter(|log| staff_id.is_none_or(|id| log.staff_id == id))
        .cloned()
        .collect();

    ReportSelection { arrivals, teaching }
}
