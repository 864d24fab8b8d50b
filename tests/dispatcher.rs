//! Dispatcher behaviour against a mock HTTP server.

mod common;

use common::{api, config_for, received, setup, PASSWORD, USERNAME};
use jira_servicedesk::{ApiRequest, JiraServiceDesk, MultipartField, Service};
use pretty_assertions::assert_eq;
use reqwest::Method;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{
    basic_auth, body_json, body_string_contains, header, header_regex, method, path,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_each_verb_issues_exactly_one_call() {
    let server = MockServer::start().await;
    let service = Service::new(&config_for(&server)).unwrap();

    for verb in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        server.reset().await;
        Mock::given(method(verb.as_str()))
            .and(path(api("info")))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::builder()
            .method(verb.clone())
            .path("info")
            .build()
            .unwrap();
        let response = assert_ok!(service.execute(request).await);
        assert_eq!(response.status(), 200);

        let requests = received(&server).await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method.as_str(), verb.as_str());
        server.verify().await;
    }
}

#[tokio::test]
async fn test_url_is_host_prefix_and_literal_path() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api("organization")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"values": []})))
        .mount(&server)
        .await;

    let request = ApiRequest::get("organization?start=10&limit=5").build().unwrap();
    assert_ok!(client.service().execute(request).await);

    let requests = received(&server).await;
    assert_eq!(
        requests[0].url.as_str(),
        format!("{}/rest/servicedeskapi/organization?start=10&limit=5", server.uri())
    );
}

#[tokio::test]
async fn test_basic_auth_and_json_body_are_sent() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(api("organization")))
        .and(basic_auth(USERNAME, PASSWORD))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Acme"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "1", "name": "Acme"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::post("organization")
        .json(json!({"name": "Acme"}))
        .build()
        .unwrap();
    let response = client.service().execute(request).await.unwrap();

    assert_eq!(response.status(), 201);
    assert_eq!(response.message(), "Created");
    assert_eq!(response.body(), Some(&json!({"id": "1", "name": "Acme"})));
}

#[tokio::test]
async fn test_rotated_credentials_apply_to_next_call() {
    let (server, mut client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api("info")))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("info")))
        .and(basic_auth("other-agent", "rotated"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.info().get_info().await.unwrap().status(), 200);
    client.set_credentials("other-agent", "rotated");
    assert_eq!(client.info().get_info().await.unwrap().status(), 200);
}

#[tokio::test]
async fn test_multipart_takes_precedence_over_json() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(api("servicedesk/1/attachTemporaryFile")))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("hello upload"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::post("servicedesk/1/attachTemporaryFile")
        .json(json!({"ignored": true}))
        .multipart(vec![
            MultipartField::new("file", b"hello upload".to_vec()).with_filename("a.txt")
        ])
        .build()
        .unwrap();
    let response = client.service().execute(request).await.unwrap();
    assert_eq!(response.status(), 201);

    let requests = received(&server).await;
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("ignored"));
}

#[tokio::test]
async fn test_accumulated_headers_reach_the_server() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api("info")))
        .and(header("X-ExperimentalApi", "opt-in"))
        .and(header("X-Atlassian-Token", "no-check"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::get("info")
        .experimental()
        .header("X-Atlassian-Token", "no-check")
        .build()
        .unwrap();
    assert_ok!(client.service().execute(request).await);
}

#[tokio::test]
async fn test_http_error_status_is_an_envelope_not_an_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api("request/SD-404")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errorMessage": "not found"})))
        .mount(&server)
        .await;

    let response = client
        .request()
        .get_customer_request("SD-404", &[])
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(response.message(), "Not Found");
    assert_eq!(response.body(), Some(&json!({"errorMessage": "not found"})));
    assert_eq!(response.error_message(), Some("not found"));
}

#[tokio::test]
async fn test_server_error_status_is_an_envelope() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api("info")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = client.info().get_info().await.unwrap();
    assert_eq!(response.status(), 500);
    assert_eq!(response.message(), "Internal Server Error");
    assert!(response.body().is_none());
}

#[tokio::test]
async fn test_non_json_body_becomes_none() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api("info")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let response = client.info().get_info().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.message(), "OK");
    assert!(response.body().is_none());
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_error() {
    let config = jira_servicedesk::Config::new("http://127.0.0.1:1", USERNAME, PASSWORD).unwrap();
    let client = JiraServiceDesk::new(&config).unwrap();

    let err = assert_err!(client.info().get_info().await);
    assert!(err.is_transport());
    assert!(!err.to_string().contains(PASSWORD));
}

#[tokio::test]
async fn test_connection_check_reports_error_status() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api("info")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.test_connection().await.unwrap_err();
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_connection_check_returns_info_from_one_call() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api("info")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "5.12.0"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = assert_ok!(client.test_connection().await);
    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), Some(&json!({"version": "5.12.0"})));
    assert_eq!(received(&server).await.len(), 1);
}

#[tokio::test]
async fn test_concurrent_calls_do_not_share_state() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api("organization/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("organization")))
        .and(body_json(json!({"name": "Acme"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "2"})))
        .mount(&server)
        .await;

    let other = client.clone();
    let first = client.organization();
    let second = other.organization();
    let (a, b) = tokio::join!(
        first.get_organization(1),
        second.create_organization("Acme"),
    );

    let a = a.unwrap();
    let b = b.unwrap();
    assert_eq!((a.status(), a.body()), (200, Some(&json!({"id": "1"}))));
    assert_eq!((b.status(), b.body()), (201, Some(&json!({"id": "2"}))));
}
