use api_adapters::store_time_adapter::StoreTimeMutation;

use crate::{error_500, UseCaseError};

#[tracing::instrument(name = "Deleting a store time", skip(store_time_adapter))]
pub async fn delete_store_time<A: StoreTimeMutation>(
    store_time_adapter: A,
    id: &str,
) -> Result<(), UseCaseError> {
    store_time_adapter.delete(id).await.map_err(error_500)
}
