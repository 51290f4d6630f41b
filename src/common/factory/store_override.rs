use entities::store_override;
use uuid::Uuid;

pub fn store_override(month: u8, day: u8) -> store_override::Model {
    store_override::Model {
        id: Uuid::now_v7().to_string(),
        month,
        day,
        is_open: false,
        start_time: "09:00".to_string(),
        end_time: "17:00".to_string(),
    }
}

pub trait StoreOverrideFactory {
    fn id(self, id: &str) -> store_override::Model;
    fn is_open(self, is_open: bool) -> store_override::Model;
    fn hours(self, start_time: &str, end_time: &str) -> store_override::Model;
}

impl StoreOverrideFactory for store_override::Model {
    fn id(mut self, id: &str) -> store_override::Model {
        self.id = id.to_string();
        self
    }

    fn is_open(mut self, is_open: bool) -> store_override::Model {
        self.is_open = is_open;
        self
    }

    fn hours(mut self, start_time: &str, end_time: &str) -> store_override::Model {
        self.start_time = start_time.to_string();
        self.end_time = end_time.to_string();
        self
    }
}
