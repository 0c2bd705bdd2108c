use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::order::application::ports::incoming::use_cases::TransitionOrderStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusDto {
    #[schema(example = 42)]
    pub order_id: i32,
    #[schema(example = "complete")]
    pub status: String,
}

/// Move an order to `complete` or `cancelled`
///
/// Only pending orders can move; completion time is stamped on the way to
/// `complete`.
#[utoipa::path(
    post,
    path = "/api/admin/orders/status",
    tag = "admin",
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Unknown status label", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 409, description = "Order is not pending", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/orders/status")]
pub async fn update_order_status_handler(
    admin: AdminUser,
    req: web::Json<UpdateOrderStatusDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .orders
        .transition_status
        .execute(dto.order_id, &dto.status)
        .await
    {
        Ok(()) => {
            info!(admin_id = %admin.user_id, order_id = dto.order_id, status = %dto.status, "Admin updated order");
            ApiResponse::ok()
        }
        Err(e @ TransitionOrderStatusError::InvalidStatus(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(TransitionOrderStatusError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(e @ TransitionOrderStatusError::IllegalTransition { .. }) => {
            ApiResponse::conflict("ILLEGAL_TRANSITION", &e.to_string())
        }
        Err(TransitionOrderStatusError::RepositoryError(e)) => {
            error!(order_id = dto.order_id, error = %e, "Failed to update order status");
            ApiResponse::internal_error()
        }
    }
}
