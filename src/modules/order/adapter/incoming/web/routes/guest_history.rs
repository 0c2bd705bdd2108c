use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::order::application::domain::OrderView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestHistoryDto {
    /// Order codes remembered by the guest's browser
    #[schema(example = json!(["TP04718263"]))]
    pub order_ids: Vec<String>,
}

/// Orders for a list of guest order codes
#[utoipa::path(
    post,
    path = "/api/orders/guest-history",
    tag = "orders",
    request_body = GuestHistoryDto,
    responses(
        (status = 200, description = "Matching orders, newest first", body = [OrderView]),
        (status = 400, description = "Malformed body", body = ErrorResponse),
    )
)]
#[post("/api/orders/guest-history")]
pub async fn guest_history_handler(
    req: web::Json<GuestHistoryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.orders.guest_history.execute(req.into_inner().order_ids).await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => {
            error!(error = %e, "Failed to load guest order history");
            ApiResponse::internal_error()
        }
    }
}
