pub mod store_override;
pub mod store_time;
pub mod time_of_day;

pub use time_of_day::TimeParseError;
