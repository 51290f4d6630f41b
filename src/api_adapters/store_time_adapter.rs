use std::future::Future;

use entities::store_time::{CreateParams, Model};

use crate::{ApiClient, ApiError};

#[derive(Clone)]
pub struct StoreTimeAdapter<'a> {
    pub client: &'a ApiClient,
}

impl<'a> StoreTimeAdapter<'a> {
    pub fn init(client: &'a ApiClient) -> Self {
        Self { client }
    }
}

pub trait StoreTimeQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, ApiError>>;
    fn get_by_day(self, day_of_week: u8) -> impl Future<Output = Result<Vec<Model>, ApiError>>;
}

impl StoreTimeQuery for StoreTimeAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, ApiError> {
        self.client.get("/store-times").await
    }

    async fn get_by_day(self, day_of_week: u8) -> Result<Vec<Model>, ApiError> {
        self.client
            .get(&format!("/store-times/day/{}", day_of_week))
            .await
    }
}

pub trait StoreTimeMutation {
    fn create(self, params: CreateParams) -> impl Future<Output = Result<Model, ApiError>>;
    fn delete(self, id: &str) -> impl Future<Output = Result<(), ApiError>>;
}

impl StoreTimeMutation for StoreTimeAdapter<'_> {
    async fn create(self, params: CreateParams) -> Result<Model, ApiError> {
        self.client.post("/store-times", &params).await
    }

    async fn delete(self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/store-times/{}", id)).await
    }
}
