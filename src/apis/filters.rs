//! Filters API.

use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `filters` resource family.
#[derive(Debug, Clone)]
pub struct FiltersApi {
    client: JamaClient,
}

impl FiltersApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All result items for the filter, across every page. `project_id`
    /// is only needed for filters whose project scope is `CURRENT`.
    pub async fn get_filter_results(
        &self,
        filter_id: u64,
        project_id: Option<u64>,
        page_size: u32,
    ) -> Result<Envelope> {
        let mut params = Vec::new();
        if let Some(project_id) = project_id {
            params.push(("project".to_string(), project_id.to_string()));
        }
        self.client
            .get_all(&format!("filters/{filter_id}/results"), &params, page_size)
            .await
    }
}
