//! Execution tests for transparent pagination.
//!
//! Uses wiremock to mock the Jama REST API and verify how `get_all`
//! walks, merges, and terminates page sequences.

use jamapi::{Credentials, JamaClient, JamaError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer) -> JamaClient {
    JamaClient::builder(&server.uri())
        .credentials(Credentials::Basic {
            username: "user".into(),
            password: "pass".into(),
        })
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn aggregates_all_pages_into_one_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "0"))
        .and(query_param("maxResults", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 0, "resultCount": 2, "totalResults": 3}},
            "data": [{"id": 1}, {"id": 2}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "2"))
        .and(query_param("maxResults", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 2, "resultCount": 1, "totalResults": 3}},
            "data": [{"id": 3}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).await;
    let all = client.get_all("items", &[], 2).await.unwrap();

    assert_eq!(all.data_len(), 3);
    assert_eq!(all.items()[0], json!({"id": 1}));
    assert_eq!(all.items()[2], json!({"id": 3}));
}

#[tokio::test]
async fn empty_collection_still_costs_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 0, "resultCount": 0, "totalResults": 0}},
            "data": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).await;
    let all = client.get_all("items", &[], 20).await.unwrap();

    assert_eq!(all.data_len(), 0);
}

#[tokio::test]
async fn full_single_page_stops_after_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 0, "resultCount": 2, "totalResults": 2}},
            "data": [{"id": 1}, {"id": 2}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).await;
    let all = client.get_all("items", &[], 2).await.unwrap();

    assert_eq!(all.data_len(), 2);
}

#[tokio::test]
async fn cursor_advances_by_page_size_not_result_count() {
    let mock_server = MockServer::start().await;

    // First page comes back short (2 of 3 requested). The next request
    // must still start at 0 + 3, not 0 + 2.
    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "0"))
        .and(query_param("maxResults", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 0, "resultCount": 2, "totalResults": 4}},
            "data": [{"id": 1}, {"id": 2}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "3"))
        .and(query_param("maxResults", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 3, "resultCount": 2, "totalResults": 4}},
            "data": [{"id": 3}, {"id": 4}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).await;
    let all = client.get_all("items", &[], 3).await.unwrap();

    assert_eq!(all.data_len(), 4);
}

#[tokio::test]
async fn invalid_page_size_fails_before_any_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).await;

    let zero = client.get_all("items", &[], 0).await;
    assert!(matches!(zero, Err(JamaError::InvalidPageSize(0))));

    let oversized = client.get_all("items", &[], 51).await;
    assert!(matches!(oversized, Err(JamaError::InvalidPageSize(51))));
}

#[tokio::test]
async fn caller_params_survive_but_pagination_pair_is_overridden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/abstractitems"))
        .and(query_param("project", "42"))
        .and(query_param("startAt", "0"))
        .and(query_param("maxResults", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 0, "resultCount": 1, "totalResults": 1}},
            "data": [{"id": 7}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).await;
    let params = vec![
        ("project".to_string(), "42".to_string()),
        // Caller's own pagination attempt must be dropped.
        ("startAt".to_string(), "500".to_string()),
    ];
    let all = client.get_all("abstractitems", &params, 10).await.unwrap();

    assert_eq!(all.data_len(), 1);
}

#[tokio::test]
async fn linked_entities_accumulate_across_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 0, "resultCount": 1, "totalResults": 2}},
            "linked": {"users": {"1": {"id": 1, "username": "alice"}}},
            "data": [{"id": 10}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 1, "resultCount": 1, "totalResults": 2}},
            "linked": {"users": {"2": {"id": 2, "username": "bob"}}},
            "data": [{"id": 11}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).await;
    let all = client.get_all("items", &[], 1).await.unwrap();

    let users = all.linked.get("users").unwrap();
    assert!(users.get("1").is_some());
    assert!(users.get("2").is_some());
}

#[tokio::test]
async fn response_without_page_info_terminates_after_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"status": "OK"},
            "data": [{"id": 1}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).await;
    let all = client.get_all("items", &[], 20).await.unwrap();

    assert_eq!(all.data_len(), 1);
}

#[tokio::test]
async fn failure_on_a_later_page_discards_the_aggregate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pageInfo": {"startIndex": 0, "resultCount": 1, "totalResults": 2}},
            "data": [{"id": 1}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("startAt", "1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).await;
    let result = client.get_all("items", &[], 1).await;

    assert!(matches!(result, Err(JamaError::ServerError { .. })));
}
