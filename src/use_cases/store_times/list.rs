use api_adapters::store_time_adapter::StoreTimeQuery;
use entities::store_time;

use crate::{error_500, UseCaseError};

pub async fn list_store_times<A: StoreTimeQuery>(
    store_time_adapter: A,
) -> Result<Vec<store_time::Model>, UseCaseError> {
    store_time_adapter.get_all().await.map_err(error_500)
}
