use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OpenHours {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AvailabilityResult {
    pub is_open: bool,
    pub hours: Vec<OpenHours>,
    /// Set when a date override decided the result.
    pub is_override: bool,
}

impl AvailabilityResult {
    pub fn closed(is_override: bool) -> Self {
        Self {
            is_open: false,
            hours: vec![],
            is_override,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    pub is_open: bool,
    pub is_override: bool,
    pub status_text: &'static str,
}
