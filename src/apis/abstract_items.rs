//! Abstract items API.
//!
//! The `abstractitems` endpoint searches across items, test plans, test
//! cycles, test runs, and attachments in one namespace.

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Search filters for [`AbstractItemsApi::get_abstract_items`].
///
/// Every field may carry multiple values; multi-valued filters are sent
/// as repeated query keys. Date filters take one value (after) or two
/// (range) in ISO8601 format. `contains` values are ORed together.
/// `sort_by` entries are field names suffixed with `.asc` or `.desc`.
#[derive(Debug, Clone, Default)]
pub struct AbstractItemsQuery {
    pub project: Vec<u64>,
    pub item_type: Vec<u64>,
    pub document_key: Vec<String>,
    pub release: Vec<u64>,
    pub created_date: Vec<String>,
    pub modified_date: Vec<String>,
    pub last_activity_date: Vec<String>,
    pub contains: Vec<String>,
    pub sort_by: Vec<String>,
}

impl AbstractItemsQuery {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        let mut push_all = |key: &str, values: &[String]| {
            for value in values {
                params.push((key.to_string(), value.clone()));
            }
        };
        push_all("project", &to_strings(&self.project));
        push_all("itemType", &to_strings(&self.item_type));
        push_all("documentKey", &self.document_key);
        push_all("release", &to_strings(&self.release));
        push_all("createdDate", &self.created_date);
        push_all("modifiedDate", &self.modified_date);
        push_all("lastActivityDate", &self.last_activity_date);
        push_all("contains", &self.contains);
        push_all("sortBy", &self.sort_by);
        params
    }
}

fn to_strings(values: &[u64]) -> Vec<String> {
    values.iter().map(u64::to_string).collect()
}

/// Operations on the `abstractitems` resource family.
#[derive(Debug, Clone)]
pub struct AbstractItemsApi {
    client: JamaClient,
}

impl AbstractItemsApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// Search across all abstract item kinds, across every page.
    pub async fn get_abstract_items(
        &self,
        query: &AbstractItemsQuery,
        page_size: u32,
    ) -> Result<Envelope> {
        let params = query.to_params();
        self.client.get_all("abstractitems", &params, page_size).await
    }

    /// A single abstract item by id.
    pub async fn get_abstract_item(&self, item_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("abstractitems/{item_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Relationships associated with the item at a point in time
    /// (ISO8601 timestamp).
    pub async fn get_abstract_versioned_relationships(
        &self,
        item_id: u64,
        timestamp: &str,
        page_size: u32,
    ) -> Result<Envelope> {
        let params = [("timestamp".to_string(), timestamp.to_string())];
        self.client
            .get_all(
                &format!("abstractitems/{item_id}/versionedrelationships"),
                &params,
                page_size,
            )
            .await
    }

    /// All versions of the abstract item.
    pub async fn get_abstract_item_versions(
        &self,
        item_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("abstractitems/{item_id}/versions"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// One numbered version of the abstract item.
    pub async fn get_abstract_item_version(
        &self,
        item_id: u64,
        version_num: u32,
    ) -> Result<Envelope> {
        let response = self
            .client
            .get(
                &format!("abstractitems/{item_id}/versions/{version_num}"),
                NO_PARAMS,
            )
            .await?;
        Envelope::from_response(response).await
    }

    /// The item snapshot at a numbered version.
    pub async fn get_abstract_versioned_item(
        &self,
        item_id: u64,
        version_num: u32,
    ) -> Result<Envelope> {
        let response = self
            .client
            .get(
                &format!("abstractitems/{item_id}/versions/{version_num}/versioneditem"),
                NO_PARAMS,
            )
            .await?;
        Envelope::from_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_valued_filters_become_repeated_keys() {
        let query = AbstractItemsQuery {
            project: vec![1, 2],
            contains: vec!["motor".to_string()],
            ..Default::default()
        };
        let params = query.to_params();
        assert_eq!(
            params,
            vec![
                ("project".to_string(), "1".to_string()),
                ("project".to_string(), "2".to_string()),
                ("contains".to_string(), "motor".to_string()),
            ]
        );
    }

    #[test]
    fn empty_query_adds_no_params() {
        assert!(AbstractItemsQuery::default().to_params().is_empty());
    }
}
