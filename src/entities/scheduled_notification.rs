use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    /// YYYY-MM-DD in the viewer's timezone.
    pub scheduled_date: String,
    /// HH:MM in the viewer's timezone.
    pub scheduled_time: String,
    pub notification_id: String,
    pub created_at: DateTime<Utc>,
}
