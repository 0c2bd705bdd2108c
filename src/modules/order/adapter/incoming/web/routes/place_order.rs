use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::MaybeAuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::order::application::ports::incoming::use_cases::{PlaceOrderError, PlaceOrderRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderDto {
    /// Ignored for guests; must match the token otherwise.
    pub user_id: Option<Uuid>,
    #[schema(example = 1)]
    pub package_id: i32,
    #[schema(example = "123456789")]
    pub player_uid: String,
    #[schema(example = "bkash")]
    pub payment_method: String,
    pub transaction_id: Option<String>,
    #[schema(example = "01712345678")]
    pub contact_number: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceOrderResponse {
    #[schema(example = "TP04718263")]
    pub order_id_string: String,
    pub id: i32,
}

/// Place an order
///
/// Wallet orders need a bearer token and are debited immediately. Manual
/// payments (bkash, nagad, rocket) are stored pending until an admin
/// verifies the transaction.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = PlaceOrderDto,
    responses(
        (status = 200, description = "Order stored", body = PlaceOrderResponse),
        (status = 400, description = "Validation failure, login required or insufficient balance", body = ErrorResponse),
        (status = 403, description = "Body user_id does not match the token", body = ErrorResponse),
        (status = 404, description = "Unknown package", body = ErrorResponse),
    ),
    security((), ("bearer_auth" = []))
)]
#[post("/api/orders")]
pub async fn place_order_handler(
    caller: MaybeAuthenticatedUser,
    req: web::Json<PlaceOrderDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let owner = caller.0.map(|u| u.user_id);
    if let (Some(owner), Some(claimed)) = (owner, dto.user_id) {
        if owner.value() != claimed {
            warn!(user_id = %owner, claimed = %claimed, "Order placed for another user");
            return ApiResponse::forbidden("FORBIDDEN", "You may only order for your own account");
        }
    }

    let request = match PlaceOrderRequest::new(
        owner,
        dto.package_id,
        &dto.player_uid,
        &dto.payment_method,
        dto.transaction_id,
        dto.contact_number,
    ) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Rejected order submission");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.orders.place.execute(request).await {
        Ok(placed) => {
            let message = if placed.payment_method.is_wallet() {
                "Order placed successfully"
            } else {
                "Order submitted for verification"
            };
            ApiResponse::success_with_message(
                PlaceOrderResponse {
                    order_id_string: placed.order_code.into_inner(),
                    id: placed.id,
                },
                message,
            )
        }

        Err(PlaceOrderError::PackageNotFound) => {
            ApiResponse::not_found("PACKAGE_NOT_FOUND", "Package not found")
        }
        Err(PlaceOrderError::LoginRequired) => {
            ApiResponse::bad_request("LOGIN_REQUIRED", "Please log in to pay from your wallet")
        }
        Err(PlaceOrderError::InsufficientBalance) => {
            ApiResponse::bad_request("INSUFFICIENT_BALANCE", "Insufficient wallet balance")
        }
        Err(PlaceOrderError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(error = %e, "Failed to place order");
            ApiResponse::internal_error()
        }
    }
}
