//! Attachments API.
//!
//! Attachment objects are created through the projects API; this module
//! covers metadata, lock state, versions, and the file content itself.
//! File bytes are passed in and out as buffers; callers own any on-disk
//! I/O.

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::json;

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::{JamaError, Result};
use crate::response::Envelope;

/// Operations on the `attachments` resource family.
#[derive(Debug, Clone)]
pub struct AttachmentsApi {
    client: JamaClient,
}

impl AttachmentsApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// Attachment metadata by id.
    pub async fn get_attachment(&self, attachment_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("attachments/{attachment_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Download the attachment's file content.
    pub async fn get_attachment_file(&self, attachment_id: u64) -> Result<Vec<u8>> {
        let params = [("url".to_string(), attachment_id.to_string())];
        let response = self.client.get("files", &params).await?;
        let bytes = response.bytes().await.map_err(JamaError::Http)?;
        Ok(bytes.to_vec())
    }

    /// Upload file content to the attachment.
    pub async fn put_attachment_file(
        &self,
        attachment_id: u64,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<StatusCode> {
        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let response = self
            .client
            .put_multipart(&format!("attachments/{attachment_id}/file"), NO_PARAMS, form)
            .await?;
        Ok(response.status())
    }

    /// Lock state of the attachment.
    pub async fn get_attachment_lock(&self, attachment_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("attachments/{attachment_id}/lock"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Lock or unlock the attachment.
    pub async fn put_attachment_lock(
        &self,
        attachment_id: u64,
        locked: bool,
    ) -> Result<Envelope> {
        let body = json!({ "locked": locked });
        let response = self
            .client
            .put(
                &format!("attachments/{attachment_id}/lock"),
                NO_PARAMS,
                Some(&body),
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// All versions of the attachment.
    pub async fn get_attachment_versions(
        &self,
        attachment_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("attachments/{attachment_id}/versions"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// One numbered version of the attachment.
    pub async fn get_attachment_version(
        &self,
        attachment_id: u64,
        version_num: u32,
    ) -> Result<Envelope> {
        let response = self
            .client
            .get(
                &format!("attachments/{attachment_id}/versions/{version_num}"),
                NO_PARAMS,
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// The attachment snapshot at a numbered version.
    pub async fn get_attachment_version_item(
        &self,
        attachment_id: u64,
        version_num: u32,
    ) -> Result<Envelope> {
        let response = self
            .client
            .get(
                &format!("attachments/{attachment_id}/versions/{version_num}/versionedItem"),
                NO_PARAMS,
            )
            .await?;
        Envelope::from_response(response).await
    }
}
