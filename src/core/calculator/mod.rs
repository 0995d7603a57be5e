pub mod arrival;
pub mod duration;
