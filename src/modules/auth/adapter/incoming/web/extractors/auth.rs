use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Caller identified by a valid bearer access token.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Self-or-admin check used by per-user resources.
    pub fn can_access(&self, owner: UserId) -> bool {
        self.user_id == owner || self.is_admin()
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
}

fn authenticate(req: &HttpRequest, token: &str) -> Result<AuthenticatedUser, ActixError> {
    let Some(tokens) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() else {
        tracing::error!("TokenProvider missing from app data");
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    tokens
        .verify_access_token(token)
        .map(|claims| AuthenticatedUser {
            user_id: UserId::from(claims.sub),
            role: claims.role,
        })
        .map_err(|_| {
            create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            ))
        })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        ready(authenticate(req, &token))
    }
}

/// Bearer token is optional (guest checkout), but when one is sent it must
/// be valid: a broken token is rejected, not downgraded to a guest.
#[derive(Debug, Clone, Copy)]
pub struct MaybeAuthenticatedUser(pub Option<AuthenticatedUser>);

impl FromRequest for MaybeAuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match extract_token_from_header(req) {
            None => ready(Ok(MaybeAuthenticatedUser(None))),
            Some(token) => ready(authenticate(req, &token).map(|u| MaybeAuthenticatedUser(Some(u)))),
        }
    }
}

/// Caller holding the admin role.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub user_id: UserId,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) if user.is_admin() => ready(Ok(AdminUser {
                user_id: user.user_id,
            })),
            Ok(user) => {
                tracing::warn!(user_id = %user.user_id, "Non-admin tried an admin endpoint");
                ready(Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Administrator access required",
                ))))
            }
            Err(e) => ready(Err(e)),
        }
    }
}
