mod upcoming;
pub mod types;

pub use upcoming::{format_long_date, upcoming_dates, DEFAULT_UPCOMING_DAYS};
