pub mod date;
pub mod table;
pub mod time;
