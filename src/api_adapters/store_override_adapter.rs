use std::future::Future;

use entities::store_override::{CreateParams, Model};

use crate::{ApiClient, ApiError};

#[derive(Clone)]
pub struct StoreOverrideAdapter<'a> {
    pub client: &'a ApiClient,
}

impl<'a> StoreOverrideAdapter<'a> {
    pub fn init(client: &'a ApiClient) -> Self {
        Self { client }
    }
}

pub trait StoreOverrideQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, ApiError>>;
    fn get_by_date(self, month: u8, day: u8)
        -> impl Future<Output = Result<Vec<Model>, ApiError>>;
}

impl StoreOverrideQuery for StoreOverrideAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, ApiError> {
        self.client.get("/store-overrides").await
    }

    async fn get_by_date(self, month: u8, day: u8) -> Result<Vec<Model>, ApiError> {
        self.client
            .get(&format!("/store-overrides/date/{}/{}", month, day))
            .await
    }
}

pub trait StoreOverrideMutation {
    fn create(self, params: CreateParams) -> impl Future<Output = Result<Model, ApiError>>;
    fn delete(self, id: &str) -> impl Future<Output = Result<(), ApiError>>;
}

impl StoreOverrideMutation for StoreOverrideAdapter<'_> {
    async fn create(self, params: CreateParams) -> Result<Model, ApiError> {
        self.client.post("/store-overrides", &params).await
    }

    async fn delete(self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/store-overrides/{}", id))
            .await
    }
}
