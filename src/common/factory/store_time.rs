use entities::store_time;
use uuid::Uuid;

pub fn store_time(day_of_week: u8) -> store_time::Model {
    store_time::Model {
        id: Uuid::now_v7().to_string(),
        day_of_week,
        is_open: true,
        start_time: "09:00".to_string(),
        end_time: "17:00".to_string(),
    }
}

pub trait StoreTimeFactory {
    fn id(self, id: &str) -> store_time::Model;
    fn is_open(self, is_open: bool) -> store_time::Model;
    fn hours(self, start_time: &str, end_time: &str) -> store_time::Model;
}

impl StoreTimeFactory for store_time::Model {
    fn id(mut self, id: &str) -> store_time::Model {
        self.id = id.to_string();
        self
    }

    fn is_open(mut self, is_open: bool) -> store_time::Model {
        self.is_open = is_open;
        self
    }

    fn hours(mut self, start_time: &str, end_time: &str) -> store_time::Model {
        self.start_time = start_time.to_string();
        self.end_time = end_time.to_string();
        self
    }
}
