pub mod custom_methods;
pub mod scheduled_notification;
pub mod store_override;
pub mod store_time;
