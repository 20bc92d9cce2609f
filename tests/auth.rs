//! Execution tests for the authentication modes and the OAuth token
//! lifecycle.

use jamapi::{Credentials, JamaClient, JamaError};
use serde_json::json;
use wiremock::matchers::{basic_auth, bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn oauth() -> Credentials {
    Credentials::ClientCredentials {
        client_id: "cid".into(),
        client_secret: "shh".into(),
    }
}

fn item_body() -> serde_json::Value {
    json!({"meta": {"status": "OK"}, "data": {"id": 1}})
}

#[tokio::test]
async fn basic_mode_attaches_the_pair_to_every_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items/1"))
        .and(basic_auth("user", "pass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JamaClient::builder(&mock_server.uri())
        .credentials(Credentials::Basic {
            username: "user".into(),
            password: "pass".into(),
        })
        .build()
        .await
        .unwrap();

    client.get("items/1", &[]).await.unwrap();
}

#[tokio::test]
async fn oauth_token_is_acquired_at_construction_and_reused() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/oauth/token"))
        .and(basic_auth("cid", "shh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items/1"))
        .and(bearer_token("tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_body()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = JamaClient::builder(&mock_server.uri())
        .credentials(oauth())
        .build()
        .await
        .unwrap();

    // Two calls, still only one token request.
    client.get("items/1", &[]).await.unwrap();
    client.get("items/1", &[]).await.unwrap();
}

#[tokio::test]
async fn expiring_token_is_replaced_before_the_next_request() {
    let mock_server = MockServer::start().await;

    // First grant is already inside the refresh margin, so the first
    // resource call must mint a replacement.
    Mock::given(method("POST"))
        .and(path("/rest/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-stale",
            "expires_in": 30
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-fresh",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items/1"))
        .and(bearer_token("tok-fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JamaClient::builder(&mock_server.uri())
        .credentials(oauth())
        .build()
        .await
        .unwrap();

    client.get("items/1", &[]).await.unwrap();
}

#[tokio::test]
async fn construction_fails_when_the_token_endpoint_rejects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = JamaClient::builder(&mock_server.uri())
        .credentials(oauth())
        .build()
        .await;

    assert!(matches!(result, Err(JamaError::TokenUnauthorized(_))));
}

#[tokio::test]
async fn resource_401_is_distinct_from_token_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items/1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "meta": {"message": "Session expired"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JamaClient::builder(&mock_server.uri())
        .credentials(Credentials::Basic {
            username: "user".into(),
            password: "wrong".into(),
        })
        .build()
        .await
        .unwrap();

    let err = client.get("items/1", &[]).await.unwrap_err();
    match err {
        JamaError::Unauthorized {
            status_code,
            reason,
        } => {
            assert_eq!(status_code, 401);
            assert_eq!(reason, "Session expired");
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn basic_mode_never_touches_the_token_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/oauth/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JamaClient::builder(&mock_server.uri())
        .credentials(Credentials::Basic {
            username: "user".into(),
            password: "pass".into(),
        })
        .build()
        .await
        .unwrap();

    client.get("users/current", &[]).await.unwrap();
}
