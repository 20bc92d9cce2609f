//! Relationships API.
//!
//! Covers relationships between items plus the instance-wide
//! relationship types and rule sets.

use reqwest::StatusCode;
use serde_json::json;

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `relationships` resource family.
#[derive(Debug, Clone)]
pub struct RelationshipsApi {
    client: JamaClient,
}

impl RelationshipsApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All relationships in the given project, across every page.
    pub async fn get_relationships(&self, project_id: u64, page_size: u32) -> Result<Envelope> {
        let params = [("project".to_string(), project_id.to_string())];
        self.client.get_all("relationships", &params, page_size).await
    }

    /// A single relationship by id.
    pub async fn get_relationship(&self, relationship_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("relationships/{relationship_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Create a relationship between two items. The relationship type
    /// defaults server-side when not given.
    pub async fn post_relationship(
        &self,
        from_item: u64,
        to_item: u64,
        relationship_type: Option<u64>,
    ) -> Result<Envelope> {
        let mut body = json!({ "fromItem": from_item, "toItem": to_item });
        if let Some(relationship_type) = relationship_type {
            body["relationshipType"] = json!(relationship_type);
        }
        let response = self
            .client
            .post("relationships", NO_PARAMS, Some(&body))
            .await?;
        Envelope::from_response(response).await
    }

    /// Replace an existing relationship.
    pub async fn put_relationship(
        &self,
        relationship_id: u64,
        from_item: u64,
        to_item: u64,
        relationship_type: Option<u64>,
    ) -> Result<Envelope> {
        let mut body = json!({ "fromItem": from_item, "toItem": to_item });
        if let Some(relationship_type) = relationship_type {
            body["relationshipType"] = json!(relationship_type);
        }
        let response = self
            .client
            .put(
                &format!("relationships/{relationship_id}"),
                NO_PARAMS,
                Some(&body),
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// Delete a relationship.
    pub async fn delete_relationship(&self, relationship_id: u64) -> Result<StatusCode> {
        let response = self
            .client
            .delete(&format!("relationships/{relationship_id}"))
            .await?;
        Ok(response.status())
    }

    /// Clear the suspect flag on a relationship.
    pub async fn delete_relationship_suspect(&self, relationship_id: u64) -> Result<StatusCode> {
        let response = self
            .client
            .delete(&format!("relationships/{relationship_id}/suspect"))
            .await?;
        Ok(response.status())
    }

    /// All relationship rule sets defined on the instance.
    pub async fn get_relationship_rule_sets(&self, page_size: u32) -> Result<Envelope> {
        self.client
            .get_all("relationshiprulesets", NO_PARAMS, page_size)
            .await
    }

    /// A single rule set and its rules.
    pub async fn get_relationship_rule_set(&self, rule_set_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("relationshiprulesets/{rule_set_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// All relationship types defined on the instance.
    pub async fn get_relationship_types(&self, page_size: u32) -> Result<Envelope> {
        self.client
            .get_all("relationshiptypes", NO_PARAMS, page_size)
            .await
    }

    /// A single relationship type by id.
    pub async fn get_relationship_type(&self, relationship_type_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(
                &format!("relationshiptypes/{relationship_type_id}"),
                NO_PARAMS,
            )
            .await?;
        Envelope::from_response(response).await
    }
}
