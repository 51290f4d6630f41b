mod cancel;
mod list;
mod schedule;
pub mod types;
mod zoned_time;

pub use cancel::cancel_appointment;
pub use list::list_scheduled_notifications;
pub use schedule::{schedule_appointment, REMINDER_LEAD_MINUTES, REMINDER_TITLE};
pub use zoned_time::wall_clock_to_instant;
