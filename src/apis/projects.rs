//! Projects API.

use reqwest::StatusCode;
use serde_json::json;

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `projects` resource family.
#[derive(Debug, Clone)]
pub struct ProjectsApi {
    client: JamaClient,
}

impl ProjectsApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// Every project visible to the caller, across all pages.
    pub async fn get_projects(&self, page_size: u32) -> Result<Envelope> {
        self.client.get_all("projects", NO_PARAMS, page_size).await
    }

    /// A single project by id.
    pub async fn get_project(&self, project_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("projects/{project_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Projects that have the given relationship rule set assigned.
    pub async fn get_relationship_rule_set_projects(
        &self,
        rule_set_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("relationshiprulesets/{rule_set_id}/projects"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// Create an attachment object in the project. The returned envelope
    /// carries the id of the new attachment; the file itself is uploaded
    /// separately through the attachments API.
    pub async fn post_project_attachment(
        &self,
        project_id: u64,
        name: &str,
        description: &str,
    ) -> Result<Envelope> {
        let body = json!({ "fields": { "name": name, "description": description } });
        let response = self
            .client
            .post(
                &format!("projects/{project_id}/attachments"),
                NO_PARAMS,
                Some(&body),
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// Add an item type to the project.
    pub async fn put_project_item_type(
        &self,
        project_id: u64,
        item_type_id: u64,
    ) -> Result<StatusCode> {
        let response = self
            .client
            .put(
                &format!("projects/{project_id}/itemtypes/{item_type_id}"),
                NO_PARAMS,
                None,
            )
            .await?;
        Ok(response.status())
    }
}
