pub mod arrival;
pub mod class;
pub mod day_bucket;
pub mod report;
pub mod staff;
pub mod teaching;
