//! Tags API.

use reqwest::StatusCode;
use serde_json::json;

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `tags` resource family.
#[derive(Debug, Clone)]
pub struct TagsApi {
    client: JamaClient,
}

impl TagsApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All tags in the given project, across every page.
    pub async fn get_tags(&self, project_id: u64, page_size: u32) -> Result<Envelope> {
        let params = [("project".to_string(), project_id.to_string())];
        self.client.get_all("tags", &params, page_size).await
    }

    /// Create a tag in the given project.
    pub async fn post_tag(&self, name: &str, project_id: u64) -> Result<Envelope> {
        let body = json!({ "name": name, "project": project_id });
        let response = self.client.post("tags", NO_PARAMS, Some(&body)).await?;
        Envelope::from_response(response).await
    }

    /// A single tag by id.
    pub async fn get_tag(&self, tag_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("tags/{tag_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Rename or move an existing tag.
    pub async fn put_tag(&self, tag_id: u64, name: &str, project_id: u64) -> Result<Envelope> {
        let body = json!({ "name": name, "project": project_id });
        let response = self
            .client
            .put(&format!("tags/{tag_id}"), NO_PARAMS, Some(&body))
            .await?;
        Envelope::from_response(response).await
    }

    /// Delete a tag.
    pub async fn delete_tag(&self, tag_id: u64) -> Result<StatusCode> {
        let response = self.client.delete(&format!("tags/{tag_id}")).await?;
        Ok(response.status())
    }

    /// All items carrying the tag.
    pub async fn get_tag_items(&self, tag_id: u64, page_size: u32) -> Result<Envelope> {
        self.client
            .get_all(&format!("tags/{tag_id}/items"), NO_PARAMS, page_size)
            .await
    }
}
