use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::order::application::domain::OrderView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Track orders by order code or contact number
///
/// Public: a guest only needs the code printed after checkout or the phone
/// number given with a manual payment.
#[utoipa::path(
    get,
    path = "/api/orders/track/{query}",
    tag = "orders",
    params(("query" = String, Path, description = "Order code (TP…) or contact number")),
    responses(
        (status = 200, description = "Matching orders, possibly empty", body = [OrderView]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/api/orders/track/{query}")]
pub async fn track_order_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.orders.track.execute(&path.into_inner()).await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => {
            error!(error = %e, "Failed to track orders");
            ApiResponse::internal_error()
        }
    }
}
