use chrono::NaiveDate;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub id: String,
    pub hour: u32,
    pub minute: u32,
    /// HH:MM in the reference timezone.
    pub time: String,
    pub is_available: bool,
}

/// A reference-zone slot as seen from the viewer's timezone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocalTimeSlot {
    pub id: String,
    /// HH:MM in the reference timezone, the value to book with.
    pub time: String,
    pub local_date: NaiveDate,
    /// HH:MM in the viewer's timezone.
    pub local_time: String,
    pub is_available: bool,
}
