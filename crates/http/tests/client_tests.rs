//! Integration tests for the TalentHub HTTP client

use serde_json::json;
use talenthub_core::{
    ApiError, AuthContext, AuthStatus, MemoryStorage, Role, RestoreOutcome, Session, UserRecord,
};
use talenthub_http::{ClientError, TalentHubClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn user_json() -> serde_json::Value {
    json!({
        "id": "u-7",
        "email": "hr@example.com",
        "role": "HR_MANAGER",
        "firstName": "Hana",
        "emailVerified": true
    })
}

#[tokio::test]
async fn test_client_builder() {
    let client = TalentHubClient::builder()
        .base_url("http://localhost:8080")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = TalentHubClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "hr@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "at-1",
            "refreshToken": "rt-1",
            "user": user_json()
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TalentHubClient::new(mock_server.uri()).unwrap();
    let response = client.login("hr@example.com", "hunter2").await.unwrap();

    assert_eq!(response.access_token, "at-1");
    assert_eq!(response.refresh_token, "rt-1");
    assert_eq!(response.user.role, Role::HrManager);
    assert_eq!(response.user.first_name.as_deref(), Some("Hana"));
}

#[tokio::test]
async fn test_bad_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid email or password"})),
        )
        .mount(&mock_server)
        .await;

    let client = TalentHubClient::new(mock_server.uri()).unwrap();
    let result = client.login("hr@example.com", "nope").await;
    match result {
        Err(ClientError::AuthenticationFailed(message)) => {
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn test_ping_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/ping"))
        .and(header("authorization", "Bearer at-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TalentHubClient::new(mock_server.uri()).unwrap();
    assert!(client.ping("at-1").await.is_ok());
}

#[tokio::test]
async fn test_error_mapping() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/ping"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Token expired"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = TalentHubClient::new(mock_server.uri()).unwrap();

    let err = client.ping("stale").await.unwrap_err();
    assert!(err.is_auth_expired());
    assert_eq!(
        ApiError::from(err),
        ApiError::Unauthorized("Token expired".to_string())
    );

    let err = client.refresh("rt-1").await.unwrap_err();
    assert!(matches!(
        ApiError::from(err),
        ApiError::Status { status: 503, .. }
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // nothing listens on the discard port
    let client = TalentHubClient::new("http://127.0.0.1:9").unwrap();
    let err = client.ping("at-1").await.unwrap_err();
    assert!(matches!(ApiError::from(err), ApiError::Network(_)));
}

#[tokio::test]
async fn test_account_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/forgot-password"))
        .and(body_json(json!({"email": "c@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "sent"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-email"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Token expired"})),
        )
        .mount(&mock_server)
        .await;

    let client = TalentHubClient::new(mock_server.uri()).unwrap();
    assert_eq!(client.forgot_password("c@example.com").await.unwrap().message, "sent");

    let err = client.verify_email("old").await.unwrap_err();
    assert!(matches!(err, ClientError::BadRequest(ref m) if m == "Token expired"));
}

#[tokio::test]
async fn test_restore_through_refresh_against_backend() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/ping"))
        .and(header("authorization", "Bearer at-old"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refreshToken": "rt-old"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "at-new",
            "refreshToken": "rt-new"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TalentHubClient::new(mock_server.uri()).unwrap();
    let ctx = AuthContext::new(MemoryStorage::new(), client);
    let user: UserRecord = serde_json::from_value(user_json()).unwrap();
    ctx.store()
        .save(&Session {
            access_token: "at-old".into(),
            refresh_token: "rt-old".into(),
            user,
            last_activity_ms: ctx.now_ms(),
        })
        .unwrap();

    assert_eq!(ctx.try_restore().await, RestoreOutcome::Restored);
    assert_eq!(ctx.snapshot().status, AuthStatus::Authenticated);
    assert_eq!(ctx.store().load().unwrap().access_token, "at-new");
}
