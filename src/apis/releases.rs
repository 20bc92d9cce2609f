//! Releases API.

use chrono::NaiveDate;
use serde_json::json;

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Date format the vendor expects for release dates.
const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Operations on the `releases` resource family.
#[derive(Debug, Clone)]
pub struct ReleasesApi {
    client: JamaClient,
}

impl ReleasesApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All releases in the given project, across every page.
    pub async fn get_releases(&self, project_id: u64, page_size: u32) -> Result<Envelope> {
        let params = [("project".to_string(), project_id.to_string())];
        self.client.get_all("releases", &params, page_size).await
    }

    /// A single release by id.
    pub async fn get_release(&self, release_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("releases/{release_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Create a release.
    pub async fn post_release(
        &self,
        name: &str,
        release_date: NaiveDate,
        project_id: u64,
        description: &str,
    ) -> Result<Envelope> {
        let body = json!({
            "name": name,
            "description": description,
            "releaseDate": release_date.format(RELEASE_DATE_FORMAT).to_string(),
            "project": project_id,
        });
        let response = self.client.post("releases", NO_PARAMS, Some(&body)).await?;
        Envelope::from_response(response).await
    }

    /// Replace an existing release.
    pub async fn put_release(
        &self,
        release_id: u64,
        name: &str,
        release_date: NaiveDate,
        project_id: u64,
        description: &str,
    ) -> Result<Envelope> {
        let body = json!({
            "name": name,
            "description": description,
            "releaseDate": release_date.format(RELEASE_DATE_FORMAT).to_string(),
            "project": project_id,
        });
        let response = self
            .client
            .put(&format!("releases/{release_id}"), NO_PARAMS, Some(&body))
            .await?;
        Envelope::from_response(response).await
    }
}
