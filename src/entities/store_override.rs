use serde::{Deserialize, Serialize};

/// Hours for a specific day of the year. Recurs every year and beats any
/// weekly rule for the same date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub month: u8,
    pub day: u8,
    pub is_open: bool,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateParams {
    pub month: u8,
    pub day: u8,
    pub is_open: bool,
    pub start_time: String,
    pub end_time: String,
}
