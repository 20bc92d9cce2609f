//! Users API.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;

use crate::apis::NO_PARAMS;
use crate::client::JamaClient;
use crate::error::{JamaError, Result};
use crate::response::Envelope;

/// Fields for creating a user.
///
/// `license_type` is one of the vendor's license enums, e.g. `NAMED`,
/// `FLOATING`, `STAKEHOLDER`, `TEST_RUNNER`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub license_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Fields for replacing an existing user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Operations on the `users` resource family.
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: JamaClient,
}

impl UsersApi {
    pub fn new(client: JamaClient) -> Self {
        Self { client }
    }

    /// All active users visible to the caller, across every page.
    pub async fn get_users(&self, page_size: u32) -> Result<Envelope> {
        self.client.get_all("users", NO_PARAMS, page_size).await
    }

    /// A single user by id.
    pub async fn get_user(&self, user_id: u64) -> Result<Envelope> {
        let response = self
            .client
            .get(&format!("users/{user_id}"), NO_PARAMS)
            .await?;
        Envelope::from_response(response).await
    }

    /// The authenticated user.
    pub async fn get_current_user(&self) -> Result<Envelope> {
        let response = self.client.get("users/current", NO_PARAMS).await?;
        Envelope::from_response(response).await
    }

    /// Favorite filters of the authenticated user.
    pub async fn get_current_user_favorite_filters(&self, page_size: u32) -> Result<Envelope> {
        self.client
            .get_all("users/current/favoritefilters", NO_PARAMS, page_size)
            .await
    }

    /// Create a user.
    pub async fn post_user(&self, user: &NewUser) -> Result<Envelope> {
        let body = serde_json::to_value(user).map_err(JamaError::Parse)?;
        let response = self.client.post("users", NO_PARAMS, Some(&body)).await?;
        Envelope::from_response(response).await
    }

    /// Replace an existing user.
    pub async fn put_user(&self, user_id: u64, user: &UserUpdate) -> Result<StatusCode> {
        let body = serde_json::to_value(user).map_err(JamaError::Parse)?;
        let response = self
            .client
            .put(&format!("users/{user_id}"), NO_PARAMS, Some(&body))
            .await?;
        Ok(response.status())
    }

    /// Activate or deactivate a user.
    pub async fn put_user_active(&self, user_id: u64, is_active: bool) -> Result<StatusCode> {
        let body = json!({ "active": is_active });
        let response = self
            .client
            .put(&format!("users/{user_id}/active"), NO_PARAMS, Some(&body))
            .await?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_serializes_camel_case_and_skips_empty_optionals() {
        let user = NewUser {
            username: "jdoe".into(),
            password: "pw".into(),
            first_name: "J".into(),
            last_name: "Doe".into(),
            email: "jdoe@example.com".into(),
            license_type: "NAMED".into(),
            phone: None,
            title: Some("Engineer".into()),
            location: None,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["firstName"], "J");
        assert_eq!(value["licenseType"], "NAMED");
        assert_eq!(value["title"], "Engineer");
        assert!(value.get("phone").is_none());
    }
}
