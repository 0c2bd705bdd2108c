use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "topup-store-test".to_string(),
        access_token_expiry: 3600,
        oauth_state_expiry: 600,
    })
}

/// Same shape the server registers with `app_data`, so extractors find it.
pub fn test_token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(create_test_jwt_service()) as Arc<dyn TokenProvider + Send + Sync>)
}

/// `Authorization` header value for a freshly signed access token.
pub fn bearer(user_id: UserId, role: Role) -> String {
    let token = create_test_jwt_service()
        .generate_access_token(user_id, role)
        .expect("test token should sign");
    format!("Bearer {}", token)
}
