use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::OrderView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Order history of one account, newest first
#[utoipa::path(
    get,
    path = "/api/orders/{user_id}",
    tag = "orders",
    params(("user_id" = Uuid, Path, description = "Owner of the orders")),
    responses(
        (status = 200, description = "Orders of the user", body = [OrderView]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not this user", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/orders/{user_id}")]
pub async fn list_user_orders_handler(
    caller: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());
    if !caller.can_access(user_id) {
        return ApiResponse::forbidden("FORBIDDEN", "You may only view your own orders");
    }

    match data.orders.list_for_user.execute(user_id).await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Failed to list user orders");
            ApiResponse::internal_error()
        }
    }
}
