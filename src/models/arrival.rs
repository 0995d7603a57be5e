use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A single recorded arrival time for one staff member on one date.
/// At most one arrival exists per (staff, date); a second submission
/// updates the existing record.
#[derive(Debug, Clone, Serialize)]
pub struct ArrivalLog {
    pub id: i64,
    pub staff_id: i64,
    pub staff_name: String, // joined from staff.full_name
    pub date: NaiveDate,    // stored as TEXT "YYYY-MM-DD"
    pub arrival_time: NaiveTime, // stored as TEXT "HH:MM"
    pub notes: Option<String>,
}

impl ArrivalLog {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.arrival_time.format("%H:%M").to_string()
    }
}

/// Classification of an arrival against the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArrivalStatus {
    OnTime,
    Late,
}

impl ArrivalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrivalStatus::OnTime => "on time",
            ArrivalStatus::Late => "late",
        }
    }

    pub fn is_late(&self) -> bool {
        matches!(self, ArrivalStatus::Late)
    }
}
