//! Registration, login and password reset over HTTP against a migrated
//! SQLite database.

use actix_web::{http::StatusCode, test, web, App};
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::auth::adapter::incoming::web::routes::{
    fetch_user_handler, forgot_password_handler, login_user_handler, register_user_handler,
    reset_password_handler,
};
use crate::auth::adapter::outgoing::{Argon2Hasher, UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::password_reset::reset_token_digest;
use crate::auth::application::ports::outgoing::{TokenProvider, UserRepository};
use crate::auth::application::services::{
    FetchUserService, LoginUserService, RegisterUserService, RequestPasswordResetService,
    ResetPasswordService,
};
use crate::email::adapter::outgoing::LogEmailSender;
use crate::email::application::services::UserEmailService;
use crate::shared::api::custom_json_config;
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::auth_helper::{create_test_jwt_service, test_token_provider_data};
use crate::tests::support::sqlite::migrated_db;
use crate::AppState;

fn account_state(db: &Arc<DatabaseConnection>) -> web::Data<AppState> {
    let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    let hasher = Argon2Hasher::with_params(1024, 1, 1).expect("argon2 params are valid");
    let query = UserQueryPostgres::new(db.clone());
    let repo = UserRepositoryPostgres::new(db.clone());
    let notifier = UserEmailService::new(Arc::new(LogEmailSender), "http://localhost:3000");

    TestAppStateBuilder::default()
        .with_register_user(Arc::new(RegisterUserService::new(
            repo.clone(),
            hasher.clone(),
            tokens.clone(),
        )))
        .with_login_user(Arc::new(LoginUserService::new(
            query.clone(),
            hasher.clone(),
            tokens,
        )))
        .with_request_password_reset(Arc::new(RequestPasswordResetService::new(
            query.clone(),
            repo.clone(),
            Arc::new(notifier),
        )))
        .with_reset_password(Arc::new(ResetPasswordService::new(repo, hasher)))
        .with_fetch_user(Arc::new(FetchUserService::new(query)))
        .with_expose_reset_token(true)
        .build()
}

fn account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register_user_handler)
        .service(login_user_handler)
        .service(forgot_password_handler)
        .service(reset_password_handler)
        .service(fetch_user_handler);
}

#[actix_web::test]
async fn register_then_reset_password_then_login() {
    let db = migrated_db().await;
    let app = test::init_service(
        App::new()
            .app_data(account_state(&db))
            .app_data(test_token_provider_data())
            .app_data(custom_json_config())
            .configure(account_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Rahim Uddin",
            "email": "Rahim@Example.com",
            "password": "secret1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let registered: Value = test::read_body_json(resp).await;
    assert_eq!(registered["user"]["wallet_balance"], 0);
    assert_eq!(registered["user"]["email"], "rahim@example.com");
    assert!(registered["user"].get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Someone Else",
            "email": "rahim@example.com",
            "password": "another1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let dup: Value = test::read_body_json(resp).await;
    assert_eq!(dup["code"], "DUPLICATE_EMAIL");

    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({ "email": "rahim@example.com" }))
        .to_request();
    let forgot: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(forgot["success"], true);
    let token = forgot["debugToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({ "token": token, "password": "fresh-secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Tokens are single use
    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({ "token": token, "password": "third-secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "rahim@example.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "rahim@example.com", "password": "fresh-secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let session: Value = test::read_body_json(resp).await;
    let user_id = session["user"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/user/{}", user_id))
        .insert_header((
            "Authorization",
            format!("Bearer {}", session["access_token"].as_str().unwrap()),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn expired_reset_token_leaves_password_alone() {
    let db = migrated_db().await;
    let app = test::init_service(
        App::new()
            .app_data(account_state(&db))
            .app_data(test_token_provider_data())
            .configure(account_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Karim",
            "email": "karim@example.com",
            "password": "secret1"
        }))
        .to_request();
    let registered: Value = test::call_and_read_body_json(&app, req).await;
    let user_id: UserId = serde_json::from_value(registered["user"]["id"].clone()).unwrap();

    UserRepositoryPostgres::new(db.clone())
        .store_reset_token(
            user_id,
            reset_token_digest("stale-token"),
            Utc::now() - Duration::minutes(5),
        )
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({ "token": "stale-token", "password": "fresh-secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["code"], "INVALID_TOKEN");

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "karim@example.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn forgot_password_for_unknown_email_is_not_found() {
    let db = migrated_db().await;
    let app = test::init_service(
        App::new()
            .app_data(account_state(&db))
            .configure(account_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({ "email": "nobody@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
