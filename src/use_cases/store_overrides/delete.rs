use api_adapters::store_override_adapter::StoreOverrideMutation;

use crate::{error_500, UseCaseError};

#[tracing::instrument(name = "Deleting a store override", skip(store_override_adapter))]
pub async fn delete_store_override<A: StoreOverrideMutation>(
    store_override_adapter: A,
    id: &str,
) -> Result<(), UseCaseError> {
    store_override_adapter.delete(id).await.map_err(error_500)
}
