use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use yourroute_api::{create_app, AppState};
use yourroute_application::{
    AlertRelayService, AuthenticationService, NotificationDispatchService, TokenCache,
};
use yourroute_config::{MailConfig, ServerConfig};
use yourroute_domain::entities::AlertEmail;
use yourroute_domain::ports::{MailTransport, TokenExchange};
use yourroute_errors::{YourRouteError, YourRouteResult};
use yourroute_infrastructure::{DatabaseStatus, InMemoryProfileRepository};

#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<AlertEmail>>,
    fail: bool,
    delay: Option<Duration>,
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &AlertEmail) -> YourRouteResult<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(YourRouteError::Network("535 authentication rejected".into()));
        }
        Ok(())
    }
}

struct StaticExchange;

#[async_trait]
impl TokenExchange for StaticExchange {
    async fn exchange(&self) -> YourRouteResult<String> {
        Ok("mappls-token".to_string())
    }
}

struct TestApp {
    router: Router,
    transport: Arc<RecordingTransport>,
    token_cache: Arc<TokenCache>,
}

fn mail_config() -> MailConfig {
    MailConfig {
        sender_email: Some("alerts@example.com".to_string()),
        sender_password: Some("app-password".to_string()),
        receiver_email: Some("ops@example.com".to_string()),
        ..MailConfig::default()
    }
}

fn build_app(mail: MailConfig, fail: bool, strict: bool) -> TestApp {
    let transport = RecordingTransport {
        fail,
        ..Default::default()
    };
    build_app_with(mail, transport, strict, &ServerConfig::default())
}

fn build_app_with(
    mail: MailConfig,
    transport: RecordingTransport,
    strict: bool,
    server: &ServerConfig,
) -> TestApp {
    let transport = Arc::new(transport);
    let dispatcher = Arc::new(NotificationDispatchService::new(transport.clone(), mail));
    let token_cache = Arc::new(TokenCache::new(Arc::new(StaticExchange)));

    let state = AppState {
        relay: Arc::new(AlertRelayService::new(dispatcher, true, strict)),
        auth: Arc::new(AuthenticationService::new()),
        profiles: Arc::new(InMemoryProfileRepository::with_default_profiles()),
        token_cache: Some(token_cache.clone()),
        database_status: DatabaseStatus::Degraded,
    };

    TestApp {
        router: create_app(state, server),
        transport,
        token_cache,
    }
}

fn default_app() -> TestApp {
    build_app(mail_config(), false, false)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn fire_batch() -> Value {
    json!([{
        "emergency_type": "fire",
        "location": "Block A",
        "timestamp": "2025-01-01T00:00:00Z"
    }])
}

#[tokio::test]
async fn test_emergency_alert_scenario() {
    let app = default_app();

    let (status, body) = send(app.router, post_json("/emergency_alert", fire_batch())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Emergency data processed and forwarded internally."})
    );

    let sent = app.transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ops@example.com");
    assert!(sent[0].body.contains("Type: fire"));
    assert!(sent[0].body.contains("Location: Block A"));
    assert!(sent[0].body.contains("Timestamp: 2025-01-01T00:00:00Z"));
}

#[tokio::test]
async fn test_internal_data_receiver_message() {
    let app = default_app();

    let (status, body) = send(app.router, post_json("/internal_data_receiver", fire_batch())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Data received and processed successfully."})
    );
    assert_eq!(app.transport.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_batch_is_accepted() {
    let app = default_app();

    let (status, _) = send(app.router, post_json("/emergency_alert", json!([]))).await;

    assert_eq!(status, StatusCode::OK);
    let sent = app.transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].body,
        "The following emergency data has been received:\n\n"
    );
}

#[tokio::test]
async fn test_missing_field_rejects_whole_batch() {
    let app = default_app();
    let body = json!([
        {"emergency_type": "fire", "location": "Block A", "timestamp": "2025-01-01T00:00:00Z"},
        {"emergency_type": "flood", "timestamp": "2025-01-01T00:00:00Z"}
    ]);

    let (status, body) = send(app.router, post_json("/emergency_alert", body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["type"], "MALFORMED_INPUT");
    assert!(app.transport.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_field_rejected() {
    let app = default_app();
    let body = json!([{"emergency_type": "  ", "location": "Block A", "timestamp": "t"}]);

    let (status, _) = send(app.router, post_json("/internal_data_receiver", body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.transport.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_array_and_invalid_json_rejected() {
    let app = default_app();
    let (status, _) = send(
        app.router.clone(),
        post_json("/emergency_alert", json!({"emergency_type": "fire"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let request = Request::builder()
        .method("POST")
        .uri("/emergency_alert")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("[{not json"))
        .unwrap();
    let (status, _) = send(app.router.clone(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let request = Request::builder()
        .method("POST")
        .uri("/emergency_alert")
        .body(Body::from(fire_batch().to_string()))
        .unwrap();
    let (status, _) = send(app.router, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert!(app.transport.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_mail_config_still_reports_success() {
    let app = build_app(MailConfig::default(), false, false);

    let (status, body) = send(app.router, post_json("/emergency_alert", fire_batch())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Emergency data processed and forwarded internally."
    );
    assert!(app.transport.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_transport_failure_lenient_and_strict() {
    let lenient = build_app(mail_config(), true, false);
    let (status, _) = send(lenient.router, post_json("/emergency_alert", fire_batch())).await;
    assert_eq!(status, StatusCode::OK);

    let strict = build_app(mail_config(), true, true);
    let (status, body) = send(strict.router, post_json("/emergency_alert", fire_batch())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["type"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_corporate_profile() {
    let app = default_app();
    let request = Request::builder()
        .uri("/profile?user_type=corporate")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userType"], "corporate");
    assert_eq!(body["stats"]["activeEmployees"], 12);
}

#[tokio::test]
async fn test_profile_unknown_and_missing_user_type() {
    let app = default_app();

    let request = Request::builder()
        .uri("/profile?user_type=admin")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app.router.clone(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "NOT_FOUND");

    let request = Request::builder()
        .uri("/profile")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app.router, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login() {
    let app = default_app();

    let (status, body) = send(
        app.router.clone(),
        post_json("/login", json!({"email": "a@b.c", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, body) = send(
        app.router,
        post_json("/login", json!({"email": "a@b.c", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_signup() {
    let app = default_app();

    let (status, body) = send(
        app.router.clone(),
        post_json(
            "/signup",
            json!({"email": "a@b.c", "password": "pw", "userType": "general", "name": "Aarav"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "User registered successfully"})
    );

    let (status, _) = send(
        app.router,
        post_json("/signup", json!({"email": "a@b.c", "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_signup_accepts_unlisted_user_type() {
    let app = default_app();

    let (status, body) = send(
        app.router,
        post_json(
            "/signup",
            json!({"email": "d@b.c", "password": "pw", "userType": "driver"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "User registered successfully"})
    );
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let server = ServerConfig {
        max_request_size_kb: 1,
        ..ServerConfig::default()
    };
    let app = build_app_with(mail_config(), RecordingTransport::default(), false, &server);

    let batch = json!([{
        "emergency_type": "fire",
        "location": "x".repeat(4 * 1024),
        "timestamp": "2025-01-01T00:00:00Z"
    }]);
    let response = app
        .router
        .oneshot(post_json("/emergency_alert", batch))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(app.transport.sent.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_slow_dispatch_hits_request_timeout() {
    let server = ServerConfig {
        request_timeout_seconds: 1,
        ..ServerConfig::default()
    };
    let mail = MailConfig {
        send_timeout_seconds: 60,
        ..mail_config()
    };
    let transport = RecordingTransport {
        delay: Some(Duration::from_secs(30)),
        ..Default::default()
    };
    let app = build_app_with(mail, transport, false, &server);

    let response = app
        .router
        .oneshot(post_json("/emergency_alert", fire_batch()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert!(app.transport.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_reports_dependencies() {
    let app = default_app();
    let request = || Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(app.router.clone(), request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "degraded");
    assert_eq!(body["mapplsToken"], "pending");

    app.token_cache.get_or_fetch().await.unwrap();
    let (_, body) = send(app.router, request()).await;
    assert_eq!(body["mapplsToken"], "cached");
}
