use serde::{Deserialize, Serialize};

/// Regular weekly opening hours for one weekday, in the store's reference timezone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    /// 0 = Sunday ... 6 = Saturday.
    pub day_of_week: u8,
    pub is_open: bool,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateParams {
    pub day_of_week: u8,
    pub is_open: bool,
    pub start_time: String,
    pub end_time: String,
}
