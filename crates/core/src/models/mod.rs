pub mod holiday;
pub mod hours;
pub mod requests;
pub mod status;
pub mod time_of_day;
