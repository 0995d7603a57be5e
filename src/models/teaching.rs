use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A single recorded teaching session (class, start/end time) for one staff
/// member on one date. Several sessions per day are allowed; the end time
/// must be strictly after the start time on the same date (no overnight
/// sessions), which is enforced before the record reaches the database.
#[derive(Debug, Clone, Serialize)]
pub struct TeachingLog {
    pub id: i64,
    pub staff_id: i64,
    pub staff_name: String, // joined from staff.full_name
    pub class_id: i64,
    pub class_name: String, // joined from classes.name
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
}

impl TeachingLog {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }
}
