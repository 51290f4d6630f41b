use std::sync::{Arc, Mutex};

use api_adapters::{
    store_override_adapter::{StoreOverrideMutation, StoreOverrideQuery},
    store_time_adapter::{StoreTimeMutation, StoreTimeQuery},
    ApiError,
};
use entities::{store_override, store_time};
use uuid::Uuid;

/// Shared rule sets standing in for the remote store API.
#[derive(Clone, Default)]
pub struct InMemoryStoreApi {
    pub store_times: Arc<Mutex<Vec<store_time::Model>>>,
    pub store_overrides: Arc<Mutex<Vec<store_override::Model>>>,
    pub unavailable: bool,
}

impl InMemoryStoreApi {
    pub fn new(
        store_times: Vec<store_time::Model>,
        store_overrides: Vec<store_override::Model>,
    ) -> Self {
        Self {
            store_times: Arc::new(Mutex::new(store_times)),
            store_overrides: Arc::new(Mutex::new(store_overrides)),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    pub fn store_times(&self) -> StoreTimeFake {
        StoreTimeFake { api: self.clone() }
    }

    pub fn store_overrides(&self) -> StoreOverrideFake {
        StoreOverrideFake { api: self.clone() }
    }

    fn check_available(&self) -> Result<(), ApiError> {
        match self.unavailable {
            true => Err(ApiError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                url: "memory://store-api".to_string(),
            }),
            false => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct StoreTimeFake {
    api: InMemoryStoreApi,
}

impl StoreTimeQuery for StoreTimeFake {
    async fn get_all(self) -> Result<Vec<store_time::Model>, ApiError> {
        self.api.check_available()?;
        Ok(self.api.store_times.lock().unwrap().clone())
    }

    async fn get_by_day(self, day_of_week: u8) -> Result<Vec<store_time::Model>, ApiError> {
        self.api.check_available()?;
        Ok(self
            .api
            .store_times
            .lock()
            .unwrap()
            .iter()
            .filter(|store_time| store_time.day_of_week == day_of_week)
            .cloned()
            .collect())
    }
}

impl StoreTimeMutation for StoreTimeFake {
    async fn create(self, params: store_time::CreateParams) -> Result<store_time::Model, ApiError> {
        self.api.check_available()?;
        let store_time = store_time::Model {
            id: Uuid::now_v7().to_string(),
            day_of_week: params.day_of_week,
            is_open: params.is_open,
            start_time: params.start_time,
            end_time: params.end_time,
        };
        self.api
            .store_times
            .lock()
            .unwrap()
            .push(store_time.clone());
        Ok(store_time)
    }

    async fn delete(self, id: &str) -> Result<(), ApiError> {
        self.api.check_available()?;
        self.api
            .store_times
            .lock()
            .unwrap()
            .retain(|store_time| store_time.id != id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct StoreOverrideFake {
    api: InMemoryStoreApi,
}

impl StoreOverrideQuery for StoreOverrideFake {
    async fn get_all(self) -> Result<Vec<store_override::Model>, ApiError> {
        self.api.check_available()?;
        Ok(self.api.store_overrides.lock().unwrap().clone())
    }

    async fn get_by_date(
        self,
        month: u8,
        day: u8,
    ) -> Result<Vec<store_override::Model>, ApiError> {
        self.api.check_available()?;
        Ok(self
            .api
            .store_overrides
            .lock()
            .unwrap()
            .iter()
            .filter(|store_override| store_override.month == month && store_override.day == day)
            .cloned()
            .collect())
    }
}

impl StoreOverrideMutation for StoreOverrideFake {
    async fn create(
        self,
        params: store_override::CreateParams,
    ) -> Result<store_override::Model, ApiError> {
        self.api.check_available()?;
        let store_override = store_override::Model {
            id: Uuid::now_v7().to_string(),
            month: params.month,
            day: params.day,
            is_open: params.is_open,
            start_time: params.start_time,
            end_time: params.end_time,
        };
        self.api
            .store_overrides
            .lock()
            .unwrap()
            .push(store_override.clone());
        Ok(store_override)
    }

    async fn delete(self, id: &str) -> Result<(), ApiError> {
        self.api.check_available()?;
        self.api
            .store_overrides
            .lock()
            .unwrap()
            .retain(|store_override| store_override.id != id);
        Ok(())
    }
}
