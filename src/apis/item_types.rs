//! Item types API.

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `itemtypes` resource family.
#[derive(Debug, Clone)]
pub struct ItemTypesApi {
    client: JamaClient,
}

impl ItemTypesApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All item types defined on the instance, across every page.
    pub async fn get_item_types(&self, page_size: u32) -> Result<Envelope> {
        self.client.get_all("itemtypes", NO_PARAMS, page_size).await
    }

    /// A single item type by id.
    pub async fn get_item_type(&self, item_type_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("itemtypes/{item_type_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }
}
