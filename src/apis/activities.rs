//! Activities API.

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::Result;
use crate::response::Envelope;

/// Filters for [`ActivitiesApi::get_activities`].
///
/// `event_type` and `object_type` take the vendor's enum strings (e.g.
/// `CREATE`, `UPDATE`, `DELETE`; `PROJECT`, `ITEM`, `TAG`). `date` takes
/// one ISO8601 value (after) or two (range).
#[derive(Debug, Clone, Default)]
pub struct ActivitiesQuery {
    pub event_type: Vec<String>,
    pub object_type: Vec<String>,
    pub item_type: Vec<u64>,
    pub date: Vec<String>,
    /// Restrict to item delete events only.
    pub delete_events: Option<bool>,
}

impl ActivitiesQuery {
    fn to_params(&self, project_id: u64) -> Vec<(String, String)> {
        let mut params = vec![("project".to_string(), project_id.to_string())];
        for value in &self.event_type {
            params.push(("eventType".to_string(), value.clone()));
        }
        for value in &self.object_type {
            params.push(("objectType".to_string(), value.clone()));
        }
        for value in &self.item_type {
            params.push(("itemType".to_string(), value.to_string()));
        }
        for value in &self.date {
            params.push(("date".to_string(), value.clone()));
        }
        if let Some(delete_events) = self.delete_events {
            params.push(("deleteEvents".to_string(), delete_events.to_string()));
        }
        params
    }
}

/// Operations on the `activities` resource family.
#[derive(Debug, Clone)]
pub struct ActivitiesApi {
    client: JamaClient,
}

impl ActivitiesApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All activities in the given project matching the filters, across
    /// every page.
    pub async fn get_activities(
        &self,
        project_id: u64,
        query: &ActivitiesQuery,
        page_size: u32,
    ) -> Result<Envelope> {
        let params = query.to_params(project_id);
        self.client.get_all("activities", &params, page_size).await
    }

    /// A single activity by id.
    pub async fn get_activity(&self, activity_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("activities/{activity_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// Items affected by the activity.
    pub async fn get_activity_affected_items(
        &self,
        activity_id: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        self.client
            .get_all(
                &format!("activities/{activity_id}/affecteditems"),
                NO_PARAMS,
                page_size,
            )
            .await
    }

    /// Restore the items removed by a delete activity.
    pub async fn restore_activity_items(&self, activity_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .post(&format!("activities/{activity_id}/restore"), NO_PARAMS, None)
            .await?;
        Envelope::from_response(response).await
    }

    /// Admin-level activities across the instance.
    pub async fn get_admin_activities(
        &self,
        filter_term: Option<&str>,
        project_id: Option<u64>,
        page_size: u32,
    ) -> Result<Envelope> {
        let mut params = Vec::new();
        if let Some(filter_term) = filter_term {
            params.push(("filterTerm".to_string(), filter_term.to_string()));
        }
        if let Some(project_id) = project_id {
            params.push(("projectId".to_string(), project_id.to_string()));
        }
        self.client
            .get_all("activities/adminActivity", &params, page_size)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_map_to_their_own_query_keys() {
        let query = ActivitiesQuery {
            event_type: vec!["CREATE".into(), "DELETE".into()],
            object_type: vec!["ITEM".into()],
            item_type: vec![30],
            date: vec![],
            delete_events: Some(true),
        };
        let params = query.to_params(82);
        assert_eq!(
            params,
            vec![
                ("project".to_string(), "82".to_string()),
                ("eventType".to_string(), "CREATE".to_string()),
                ("eventType".to_string(), "DELETE".to_string()),
                ("objectType".to_string(), "ITEM".to_string()),
                ("itemType".to_string(), "30".to_string()),
                ("deleteEvents".to_string(), "true".to_string()),
            ]
        );
    }
}
