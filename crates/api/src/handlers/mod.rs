pub mod content;
pub mod holidays;
pub mod store_hours;
