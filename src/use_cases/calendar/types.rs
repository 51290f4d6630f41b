use chrono::NaiveDate;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpcomingDate {
    pub id: String,
    pub date: NaiveDate,
    pub formatted_date: String,
    pub short_date: String,
    pub day_name: String,
    pub is_today: bool,
}
