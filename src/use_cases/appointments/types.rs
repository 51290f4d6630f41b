use chrono::{DateTime, TimeZone, Utc};
use entities::scheduled_notification;
use serde::Serialize;

/// Everything scheduling needs to know about "where" and "when".
///
/// Slot times are wall-clock values in `reference_timezone`. Confirmations are
/// rendered in `local_timezone`, the viewer's zone.
#[derive(Clone, Debug)]
pub struct SchedulingContext<R: TimeZone, L: TimeZone> {
    pub reference_timezone: R,
    /// Shown next to reference times, e.g. `NYC`.
    pub reference_timezone_label: String,
    pub local_timezone: L,
    pub now: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppointmentConfirmation {
    pub nyc_time: String,
    pub local_time: String,
    pub date: String,
    /// `None` when the reminder would have fired in the past.
    pub reminder: Option<scheduled_notification::Model>,
}
