mod scheduled_notification;
mod store_override;
mod store_time;

pub use scheduled_notification::*;
pub use store_override::*;
pub use store_time::*;
