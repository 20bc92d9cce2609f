//! Test runs API.

use reqwest::StatusCode;
use serde_json::Value;

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;

/// Operations on the `testruns` resource family.
#[derive(Debug, Clone)]
pub struct TestRunsApi {
    client: JamaClient,
}

impl TestRunsApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// Replace a test run. The body carries the vendor's test-run shape,
    /// typically a `fields` object with result rows.
    pub async fn put_test_run(&self, test_run_id: u64, body: &Value) -> Result<StatusCode> {
        let response = self
            .client
            .put(&format!("testruns/{test_run_id}"), NO_PARAMS, Some(body))
            .await?;
        Ok(response.status())
    }
}
