//! Baselines API.

use reqwest::StatusCode;
use serde_json::json;

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `baselines` resource family.
#[derive(Debug, Clone)]
pub struct BaselinesApi {
    client: JamaClient,
}

impl BaselinesApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All baselines in the given project, across every page.
    pub async fn get_baselines(&self, project_id: u64, page_size: u32) -> Result<Envelope> {
        let params = [("project".to_string(), project_id.to_string())];
        self.client.get_all("baselines", &params, page_size).await
    }

    /// A single baseline by id.
    pub async fn get_baseline(&self, baseline_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("baselines/{baseline_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Update a baseline.
    #[allow(clippy::too_many_arguments)]
    pub async fn put_baseline(
        &self,
        baseline_id: u64,
        source: u64,
        baseline_origin_type: &str,
        baseline_origin_id: &str,
        name: &str,
        description: &str,
        baseline_status_pick_list_option: u64,
    ) -> Result<Envelope> {
        let body = json!({
            "source": source,
            "baselineOriginType": baseline_origin_type,
            "baselineOriginId": baseline_origin_id,
            "name": name,
            "description": description,
            "baselineStatusPickListOption": baseline_status_pick_list_option,
        });
        let response = self
            .client
            .put(&format!("baselines/{baseline_id}"), NO_PARAMS, Some(&body))
            .await?;
        Envelope::from_response(response).await
    }

    /// Delete a baseline.
    pub async fn delete_baseline(&self, baseline_id: u64) -> Result<StatusCode> {
        let response = self
            .client
            .delete(&format!("baselines/{baseline_id}"))
            .await?;
        Ok(response.status())
    }

    /// The review linked to a baseline, when one exists.
    pub async fn get_baseline_review_link(&self, baseline_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("baselines/{baseline_id}/reviewlink"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// All versioned items captured by the baseline.
    pub async fn get_baseline_versioned_items(
        &self,
        baseline_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("baselines/{baseline_id}/versioneditems"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// One versioned item inside the baseline.
    pub async fn get_baseline_versioned_item(
        &self,
        baseline_id: u64,
        item_id: u64,
    ) -> Result<Envelope> {
        let response = self
            .client
            .get(
                &format!("baselines/{baseline_id}/versioneditems/{item_id}"),
                NO_PARAMS,
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// Versioned relationships of an item inside the baseline.
    pub async fn get_baseline_versioned_item_relationships(
        &self,
        baseline_id: u64,
        item_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("baselines/{baseline_id}/versioneditems/{item_id}/versionedrelationships"),
                NO_PARAMS,
                page_size,
            )
            .await
    }
}
