//! Items API.
//!
//! CRUD on items plus the item-scoped sub-resources: tags, attachments,
//! relationship traversal, global-id sync, versions, children, workflow
//! transitions, and lock state.

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Parent location for a new or moved item: nested under another item,
/// or at the root of a project.
#[derive(Debug, Clone, Copy)]
pub enum ItemParent {
    Item(u64),
    Project(u64),
}

impl ItemParent {
    fn to_json(self) -> Value {
        match self {
            Self::Item(id) => json!({ "item": id }),
            Self::Project(id) => json!({ "project": id }),
        }
    }
}

/// Operations on the `items` resource family.
#[derive(Debug, Clone)]
pub struct ItemsApi {
    client: JamaClient,
}

impl ItemsApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All items in the given project, across every page.
    pub async fn get_items(&self, project_id: u64, page_size: u32) -> Result<Envelope> {
        let params = [("project".to_string(), project_id.to_string())];
        self.client.get_all("items", &params, page_size).await
    }

    /// A single item by id.
    pub async fn get_item(&self, item_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("items/{item_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Create a new item. When `global_id` is supplied the server is told
    /// to accept it verbatim instead of assigning one.
    pub async fn post_item(
        &self,
        project_id: u64,
        item_type_id: u64,
        child_item_type_id: u64,
        parent: ItemParent,
        fields: Value,
        global_id: Option<u64>,
    ) -> Result<Envelope> {
        let mut body = json!({
            "project": project_id,
            "itemType": item_type_id,
            "childItemType": child_item_type_id,
            "location": { "parent": parent.to_json() },
            "fields": fields,
        });

        let mut params = Vec::new();
        if let Some(global_id) = global_id {
            body["globalId"] = json!(global_id);
            params.push(("setGlobalIdManually".to_string(), "true".to_string()));
        }

        let response = self.client.post("items", &params, Some(&body)).await?;
        Envelope::from_response(response).await
    }

    /// Add an existing tag to the item. Returns the response status
    /// (201 on success).
    pub async fn post_item_tag(&self, item_id: u64, tag_id: u64) -> Result<StatusCode> {
        let body = json!({ "tag": tag_id });
        let response = self
            .client
            .post(&format!("items/{item_id}/tags"), NO_PARAMS, Some(&body))
            .await?;
        Ok(response.status())
    }

    /// Add `source_item` to the global-id pool of `pool_item`.
    pub async fn post_item_sync(&self, source_item: u64, pool_item: u64) -> Result<Envelope> {
        let body = json!({ "item": source_item });
        let response = self
            .client
            .post(
                &format!("items/{pool_item}/synceditems"),
                NO_PARAMS,
                Some(&body),
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// Attach an existing attachment to the item.
    pub async fn post_item_attachment(
        &self,
        item_id: u64,
        attachment_id: u64,
    ) -> Result<StatusCode> {
        let body = json!({ "attachment": attachment_id });
        let response = self
            .client
            .post(
                &format!("items/{item_id}/attachments"),
                NO_PARAMS,
                Some(&body),
            )
            .await?;
        Ok(response.status())
    }

    /// Replace an item wholesale.
    pub async fn put_item(
        &self,
        project_id: u64,
        item_id: u64,
        item_type_id: u64,
        child_item_type_id: u64,
        parent: ItemParent,
        fields: Value,
    ) -> Result<StatusCode> {
        let body = json!({
            "project": project_id,
            "itemType": item_type_id,
            "childItemType": child_item_type_id,
            "location": { "parent": parent.to_json() },
            "fields": fields,
        });
        let response = self
            .client
            .put(&format!("items/{item_id}"), NO_PARAMS, Some(&body))
            .await?;
        Ok(response.status())
    }

    /// Apply JSON-patch style operations to an item. Each patch is an
    /// object with `op`, `path`, and `value` entries.
    pub async fn patch_item(&self, item_id: u64, patches: &[Value]) -> Result<StatusCode> {
        let body = Value::Array(patches.to_vec());
        let response = self
            .client
            .patch(&format!("items/{item_id}"), NO_PARAMS, &body)
            .await?;
        Ok(response.status())
    }

    /// Delete an item.
    pub async fn delete_item(&self, item_id: u64) -> Result<StatusCode> {
        let response = self.client.delete(&format!("items/{item_id}")).await?;
        Ok(response.status())
    }

    /// All items carrying the given tag.
    pub async fn get_tagged_items(&self, tag_id: u64, page_size: u32) -> Result<Envelope> {
        self.client
            .get_all(&format!("tags/{tag_id}/items"), NO_PARAMS, page_size)
            .await
    }

    /// Upstream relationships of the item.
    pub async fn get_item_upstream_relationships(
        &self,
        item_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("items/{item_id}/upstreamrelationships"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// Downstream relationships of the item.
    pub async fn get_item_downstream_relationships(
        &self,
        item_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("items/{item_id}/downstreamrelationships"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// Items directly upstream of the item.
    pub async fn get_item_upstream_related(
        &self,
        item_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("items/{item_id}/upstreamrelated"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// Items directly downstream of the item.
    pub async fn get_item_downstream_related(
        &self,
        item_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("items/{item_id}/downstreamrelated"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// Workflow transitions currently available for the item.
    pub async fn get_item_workflow_transitions(
        &self,
        item_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("items/{item_id}/workflowtransitionoptions"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// Direct children of the item.
    pub async fn get_item_children(&self, item_id: u64, page_size: u32) -> Result<Envelope> {
        self.client
            .get_all(&format!("items/{item_id}/children"), NO_PARAMS, page_size)
            .await
    }

    /// Items in the same synchronization group as the item.
    pub async fn get_item_synced_items(&self, item_id: u64, page_size: u32) -> Result<Envelope> {
        self.client
            .get_all(&format!("items/{item_id}/synceditems"), NO_PARAMS, page_size)
            .await
    }

    /// Whether `synced_item_id` is in sync with `item_id`. The payload
    /// carries a single boolean `inSync` field.
    pub async fn get_item_sync_status(
        &self,
        item_id: u64,
        synced_item_id: u64,
    ) -> Result<Envelope> {
        let response = self
            .client
            .get(
                &format!("items/{item_id}/synceditems/{synced_item_id}/syncstatus"),
                NO_PARAMS,
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// All versions of the item.
    pub async fn get_item_versions(&self, item_id: u64, page_size: u32) -> Result<Envelope> {
        self.client
            .get_all(&format!("items/{item_id}/versions"), NO_PARAMS, page_size)
            .await
    }

    /// One numbered version of the item.
    pub async fn get_item_version(&self, item_id: u64, version_num: u32) -> Result<Envelope> {
        let response = self
            .client
            .get(
                &format!("items/{item_id}/versions/{version_num}"),
                NO_PARAMS,
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// The full item snapshot at a numbered version.
    pub async fn get_versioned_item(&self, item_id: u64, version_num: u32) -> Result<Envelope> {
        let response = self
            .client
            .get(
                &format!("items/{item_id}/versions/{version_num}/versioneditem"),
                NO_PARAMS,
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// Lock state of the item: locked flag, last locked date, and user.
    pub async fn get_item_lock(&self, item_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("items/{item_id}/lock"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Lock or unlock the item.
    pub async fn put_item_lock(&self, item_id: u64, locked: bool) -> Result<StatusCode> {
        let body = json!({ "locked": locked });
        let response = self
            .client
            .put(&format!("items/{item_id}/lock"), NO_PARAMS, Some(&body))
            .await?;
        Ok(response.status())
    }

    /// All tags on the item.
    pub async fn get_item_tags(&self, item_id: u64, page_size: u32) -> Result<Envelope> {
        self.client
            .get_all(&format!("items/{item_id}/tags"), NO_PARAMS, page_size)
            .await
    }
}
