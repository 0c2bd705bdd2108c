use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::order::application::domain::OrderView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every order with owner and package names, newest first
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "admin",
    responses(
        (status = 200, description = "All orders, guest orders included", body = [OrderView]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/orders")]
pub async fn admin_orders_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.orders.list_all.execute().await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => {
            error!(admin_id = %admin.user_id, error = %e, "Failed to list all orders");
            ApiResponse::internal_error()
        }
    }
}
