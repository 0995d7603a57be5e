pub mod arrival;
pub mod calendar;
pub mod class;
pub mod export;
pub mod init;
pub mod log;
pub mod report;
pub mod staff;
pub mod teaching;
