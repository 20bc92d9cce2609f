//! Pick lists API.

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `picklists` resource family.
#[derive(Debug, Clone)]
pub struct PickListsApi {
    client: JamaClient,
}

impl PickListsApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All pick lists on the instance, across every page.
    pub async fn get_pick_lists(&self, page_size: u32) -> Result<Envelope> {
        self.client.get_all("picklists", NO_PARAMS, page_size).await
    }

    /// A single pick list by id.
    pub async fn get_pick_list(&self, pick_list_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("picklists/{pick_list_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// All options of the pick list, across every page.
    pub async fn get_pick_list_options(
        &self,
        pick_list_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("picklists/{pick_list_id}/options"),
                NO_PARAMS,
                page_size,
            )
            .await
    }
}
