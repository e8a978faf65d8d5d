//! End-to-end tests for the auth endpoints
//!
//! Exercises the full HTTP surface against the in-memory repository and
//! the mock mail gateway. Link tokens are minted directly with the same
//! token service the app uses, standing in for the token a real user
//! would pull out of their inbox.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{test, web};
use serde_json::{json, Value};
use uuid::Uuid;

use uv_api::app::{create_app, AppState};
use uv_core::domain::entities::token::TokenPurpose;
use uv_core::repositories::{MockUserRepository, UserRepository};
use uv_core::services::auth::{AuthService, AuthServiceConfig};
use uv_core::services::mail::MailTemplates;
use uv_core::services::password::PasswordEncoder;
use uv_core::services::token::{TokenService, TokenServiceConfig};
use uv_infra::mail::MockMailer;

const TEST_SECRET: &str = "integration-test-secret";

struct TestEnv {
    state: web::Data<AppState<MockUserRepository, MockMailer>>,
    repository: Arc<MockUserRepository>,
    tokens: Arc<TokenService>,
}

fn write_template_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("uv-api-tests-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("welcome.html"),
        "<p>Hi $fullname,</p><a href=\"$link\">Verify</a>",
    )
    .unwrap();
    fs::write(
        dir.join("reset.html"),
        "<p>Hi $fullname,</p><a href=\"$link\">Reset</a><p>Help: $emailId</p>",
    )
    .unwrap();
    dir
}

fn test_env() -> TestEnv {
    let repository = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        ..Default::default()
    }));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&repository),
        mailer,
        Arc::clone(&tokens),
        PasswordEncoder::new(4),
        MailTemplates::new(write_template_dir()),
        AuthServiceConfig::default(),
    ));

    TestEnv {
        state: web::Data::new(AppState { auth_service }),
        repository,
        tokens,
    }
}

fn register_payload(email: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": "correct-horse",
        "address": "12 Analytical Row",
        "mobile_number": "+61400000000"
    })
}

#[actix_web::test]
async fn test_health_endpoint() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_register_returns_success_envelope() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("ada@example.com"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["code"], "SUCCESS");
    assert_eq!(body["data"]["verification_email_sent"], true);
    assert!(body["data"]["user_id"].is_string());
    assert!(body.get("token").is_none());
}

#[actix_web::test]
async fn test_register_malformed_email_is_generic_failure() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("not-an-email"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["code"], "INVALID_DETAILS");
    assert_eq!(body["message"], "Invalid details provided");
    assert!(env.repository.is_empty().await);
}

#[actix_web::test]
async fn test_register_duplicate_email_is_generic_failure() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let first = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("ada@example.com"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, first).await;

    let second = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("ada@example.com"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, second).await;

    assert_eq!(body["code"], "INVALID_DETAILS");
    assert_eq!(env.repository.len().await, 1);
}

#[actix_web::test]
async fn test_login_failures_are_indistinguishable() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let register = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("ada@example.com"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, register).await;

    let unknown_req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ghost@example.com", "password": "correct-horse"}))
        .to_request();
    let unknown: Value = test::call_and_read_body_json(&app, unknown_req).await;

    let wrong_req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ada@example.com", "password": "wrong-password"}))
        .to_request();
    let wrong: Value = test::call_and_read_body_json(&app, wrong_req).await;

    assert_eq!(unknown["code"], "INVALID_DETAILS");
    assert_eq!(unknown["code"], wrong["code"]);
    assert_eq!(unknown["message"], wrong["message"]);
    assert_eq!(unknown["message"], "Invalid login details");
}

#[actix_web::test]
async fn test_login_requires_verified_email() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let register = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("ada@example.com"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, register).await;

    let login = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ada@example.com", "password": "correct-horse"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, login).await;

    assert_eq!(body["code"], "INVALID_DETAILS");
    assert_eq!(body["message"], "Please verify your email address");
}

#[actix_web::test]
async fn test_verify_email_then_login_sets_auth_header() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let register = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("ada@example.com"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, register).await;

    // Mint the same link token the verification email carries
    let token = env
        .tokens
        .issue_link_token("ada@example.com", TokenPurpose::EmailVerification)
        .unwrap();
    let verify = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/auth/verify-email/{}",
            env.tokens.encode_for_link(&token)
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, verify).await;
    assert_eq!(body["code"], "SUCCESS");

    let login = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ada@example.com", "password": "correct-horse"}))
        .to_request();
    let resp = test::call_service(&app, login).await;
    assert!(resp.headers().contains_key("auth"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "SUCCESS");
    assert!(body["token"].is_string());
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert!(body["data"].get("password_hash").is_none());
}

#[actix_web::test]
async fn test_verify_email_expired_link() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let register = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("ada@example.com"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, register).await;

    // Same secret, already-expired window
    let expired_issuer = TokenService::new(TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        link_token_expiry_seconds: -60,
        ..Default::default()
    });
    let token = expired_issuer
        .issue_link_token("ada@example.com", TokenPurpose::EmailVerification)
        .unwrap();

    let verify = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/auth/verify-email/{}",
            env.tokens.encode_for_link(&token)
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, verify).await;

    assert_eq!(body["code"], "SESSION_EXPIRED");
    assert_eq!(body["message"], "This link has expired");
}

#[actix_web::test]
async fn test_change_password_requires_session() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/change-password")
        .set_json(json!({"current_password": "correct-horse", "new_password": "new-password"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["code"], "INVALID_DETAILS");
    assert_eq!(body["message"], "Invalid session");
}

#[actix_web::test]
async fn test_change_password_with_session_token() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let register = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("ada@example.com"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, register).await;
    env.repository
        .mark_email_verified("ada@example.com")
        .await
        .unwrap();

    let login = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ada@example.com", "password": "correct-horse"}))
        .to_request();
    let login_body: Value = test::call_and_read_body_json(&app, login).await;
    let session_token = login_body["token"].as_str().unwrap().to_string();

    let change = test::TestRequest::post()
        .uri("/api/v1/auth/change-password")
        .insert_header(("auth", session_token))
        .set_json(json!({"current_password": "correct-horse", "new_password": "new-password-1"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, change).await;
    assert_eq!(body["code"], "SUCCESS");

    let relogin = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ada@example.com", "password": "new-password-1"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, relogin).await;
    assert_eq!(body["code"], "SUCCESS");
}

#[actix_web::test]
async fn test_forgot_password_unknown_email() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/forgot-password")
        .set_json(json!({"email": "ghost@example.com"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["code"], "INVALID_DETAILS");
    assert_eq!(body["message"], "Invalid email address");
}

#[actix_web::test]
async fn test_reset_password_round_trip() {
    let env = test_env();
    let app = test::init_service(create_app(env.state.clone(), Arc::clone(&env.tokens))).await;

    let register = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_payload("ada@example.com"))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, register).await;
    env.repository
        .mark_email_verified("ada@example.com")
        .await
        .unwrap();

    // Garbage token gives the generic failure
    let garbage = test::TestRequest::post()
        .uri("/api/v1/auth/reset-password")
        .set_json(json!({"token": "zz-not-hex", "new_password": "new-password-1"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, garbage).await;
    assert_eq!(body["code"], "INVALID_DETAILS");

    // Mint the same link token the reset email carries
    let token = env
        .tokens
        .issue_link_token("ada@example.com", TokenPurpose::PasswordReset)
        .unwrap();
    let reset = test::TestRequest::post()
        .uri("/api/v1/auth/reset-password")
        .set_json(json!({
            "token": env.tokens.encode_for_link(&token),
            "new_password": "new-password-1"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, reset).await;
    assert_eq!(body["code"], "SUCCESS");

    let login = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ada@example.com", "password": "new-password-1"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, login).await;
    assert_eq!(body["code"], "SUCCESS");
}
