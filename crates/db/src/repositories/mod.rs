pub mod holiday;
pub mod store_hours;
