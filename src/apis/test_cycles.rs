//! Test cycles API.

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `testcycles` resource family.
#[derive(Debug, Clone)]
pub struct TestCyclesApi {
    client: JamaClient,
}

impl TestCyclesApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// A single test cycle by id.
    pub async fn get_test_cycle(&self, test_cycle_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("testcycles/{test_cycle_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// All test runs in the test cycle, across every page.
    pub async fn get_test_cycle_runs(
        &self,
        test_cycle_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("testcycles/{test_cycle_id}/testruns"),
                NO_PARAMS,
                page_size,
            )
            .await
    }
}
