//! Pick list options API.

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `picklistoptions` resource family.
#[derive(Debug, Clone)]
pub struct PickListOptionsApi {
    client: JamaClient,
}

impl PickListOptionsApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// A single pick list option by id.
    pub async fn get_pick_list_option(&self, pick_list_option_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("picklistoptions/{pick_list_option_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }
}
