//! Backend client and sign-in flow against a wiremock stand-in for the external API

use cx_providers::auth::{self, LoginError};
use cx_providers::{BackendClient, BackendConfig, ProviderError, SessionConfig, SessionStore};
use cx_types::LoginCredentials;

use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(BackendConfig {
        host_url: server.uri(),
        weekly_summary_url: format!("{}/generate-weekly-summary", server.uri()),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap()
}

fn credentials(email: &str) -> LoginCredentials {
    LoginCredentials {
        rb_user_id: "4211".into(),
        email: email.into(),
        password: "correct-horse".into(),
    }
}

async fn mount_registered(server: &MockServer, emails: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/account/registered-users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(emails))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_cx_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cx-redbooth/connextar-users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "_id": "a1", "rbUserId": 1, "name": "Ada", "email": "ada@connextar.com" },
                { "_id": "a2", "rbUserId": "2", "name": "Alan", "email": "alan@connextar.com" },
                { "_id": "a3", "rbUserId": 3, "name": "Grace", "email": "grace@connextar.com" }
            ]
        })))
        .mount(&server)
        .await;

    let users = client_for(&server).fetch_cx_users().await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].id, "a1");
    assert_eq!(users[2].name, "Grace");
}

#[tokio::test]
async fn test_fetch_cx_users_null_data_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cx-redbooth/connextar-users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let users = client_for(&server).fetch_cx_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_fetch_cx_users_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cx-redbooth/connextar-users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_cx_users().await.unwrap_err();
    assert!(matches!(err, ProviderError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_fetch_weekly_summary_unwraps_double_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/generate-weekly-summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "data": [ { "Project": "Atlas", "Time (decimal)": "3.25" } ] }
        })))
        .mount(&server)
        .await;

    let entries = client_for(&server).fetch_weekly_summary().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["Project"], "Atlas");
}

#[tokio::test]
async fn test_fetch_weekly_summary_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/generate-weekly-summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_weekly_summary().await.unwrap_err();
    assert!(matches!(err, ProviderError::Decode { .. }));
}

#[tokio::test]
async fn test_dashboard_collect_sums_summary_hours() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/generate-weekly-summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "data": [
                { "Project": "Atlas", "Time (decimal)": 10.5 },
                { "Project": "Borealis", "Time (decimal)": 4.5 }
            ] }
        })))
        .mount(&server)
        .await;

    let snapshot = cx_providers::dashboard::collect(
        &client_for(&server),
        &cx_providers::DashboardDefaults::default(),
    )
    .await
    .unwrap();

    assert_eq!(snapshot.rows.len(), 2);
    assert_eq!(snapshot.clockify_hours, Some(15.0));
}

#[tokio::test]
async fn test_sign_in_sends_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/sign-in"))
        .and(body_json(json!({
            "rbUserId": "4211",
            "email": "ada@connextar.com",
            "password": "correct-horse"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .sign_in(&credentials("ada@connextar.com"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sign_in_rejection_carries_provider_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/sign-in"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid password" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .sign_in(&credentials("ada@connextar.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Rejected(ref m) if m == "Invalid password"));
}

#[tokio::test]
async fn test_login_flow_opens_session() {
    let server = MockServer::start().await;
    mount_registered(&server, json!(["ada@connextar.com"])).await;
    Mock::given(method("POST"))
        .and(path("/account/sign-in"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let sessions = SessionStore::new(SessionConfig::default());
    let session = auth::sign_in(&client_for(&server), &sessions, credentials("ada@connextar.com"))
        .await
        .unwrap();

    assert_eq!(session.rb_user_id, "4211");
    assert!(sessions.get(&session.token).await.is_some());
}

#[tokio::test]
async fn test_login_flow_refuses_unregistered_email_without_calling_provider() {
    let server = MockServer::start().await;
    mount_registered(&server, json!(["someone@connextar.com"])).await;
    Mock::given(method("POST"))
        .and(path("/account/sign-in"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sessions = SessionStore::new(SessionConfig::default());
    let err = auth::sign_in(&client_for(&server), &sessions, credentials("ada@connextar.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Unregistered(_)));
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn test_login_flow_rejects_invalid_form_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let sessions = SessionStore::new(SessionConfig::default());
    let mut bad = credentials("not-an-email");
    bad.password = "short".into();

    let err = auth::sign_in(&client_for(&server), &sessions, bad)
        .await
        .unwrap_err();

    match err {
        LoginError::Invalid(fields) => {
            assert!(fields.email.is_some());
            assert!(fields.password.is_some());
            assert!(fields.rb_user_id.is_none());
        }
        other => panic!("expected invalid form, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_flow_provider_outage_is_network_error() {
    let server = MockServer::start().await;
    mount_registered(&server, json!(["ada@connextar.com"])).await;
    Mock::given(method("POST"))
        .and(path("/account/sign-in"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let sessions = SessionStore::new(SessionConfig::default());
    let err = auth::sign_in(&client_for(&server), &sessions, credentials("ada@connextar.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Network(ProviderError::Status { status: 503, .. })));
}
