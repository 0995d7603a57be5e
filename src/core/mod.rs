pub mod bucket;
pub mod calculator;
pub mod calendar;
pub mod report;
