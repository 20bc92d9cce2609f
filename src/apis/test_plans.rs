//! Test plans API.

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Operations on the `testplans` resource family.
#[derive(Debug, Clone)]
pub struct TestPlansApi {
    client: JamaClient,
}

impl TestPlansApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// Generate a new test cycle from the test plan.
    ///
    /// `test_groups_to_include` restricts generation to the given test
    /// groups. `test_run_status_to_include` is only valid once a first
    /// cycle exists and restricts generation to runs that had one of the
    /// given statuses in the previous cycle; leave it empty to include
    /// all statuses.
    pub async fn post_test_plan_test_cycle(
        &self,
        test_plan_id: u64,
        test_cycle_name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        test_groups_to_include: Option<&[u64]>,
        test_run_status_to_include: Option<&[String]>,
    ) -> Result<Envelope> {
        let mut generation_config = json!({});
        if let Some(groups) = test_groups_to_include {
            generation_config["testGroupsToInclude"] = json!(groups);
        }
        if let Some(statuses) = test_run_status_to_include {
            generation_config["testRunStatusesToInclude"] = json!(statuses);
        }

        let body: Value = json!({
            "fields": {
                "name": test_cycle_name,
                "startDate": start_date.format("%Y-%m-%d").to_string(),
                "endDate": end_date.format("%Y-%m-%d").to_string(),
            },
            "testRunGenerationConfig": generation_config,
        });

        let response = self
            .client
            .post(
                &format!("testplans/{test_plan_id}/testcycles"),
                NO_PARAMS,
                Some(&body),
            )
            .await?;
        Envelope::from_response(response).await
    }
}
