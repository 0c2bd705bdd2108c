use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::{PublicUser, UserId};
use crate::auth::application::ports::incoming::use_cases::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public projection of one account
///
/// Callers may read their own account; admins may read any.
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = "auth",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = PublicUser),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not this user", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/user/{id}")]
pub async fn fetch_user_handler(
    caller: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());
    if !caller.can_access(user_id) {
        return ApiResponse::forbidden("FORBIDDEN", "You may only view your own account");
    }

    match data.auth.fetch_user.execute(user_id).await {
        Ok(user) => actix_web::HttpResponse::Ok().json(user),
        Err(FetchUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchUserError::QueryError(e)) => {
            error!(user_id = %user_id, error = %e, "Database error fetching user");
            ApiResponse::internal_error()
        }
    }
}
