use api_adapters::store_override_adapter::StoreOverrideQuery;
use entities::store_override;

use crate::{error_500, UseCaseError};

pub async fn list_store_overrides<A: StoreOverrideQuery>(
    store_override_adapter: A,
) -> Result<Vec<store_override::Model>, UseCaseError> {
    store_override_adapter.get_all().await.map_err(error_500)
}
