use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::catalog::application::domain::Package;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full catalog
///
/// Returned as a bare array in catalog order.
#[utoipa::path(
    get,
    path = "/api/packages",
    tag = "catalog",
    responses(
        (status = 200, description = "Every package", body = [Package]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/packages")]
pub async fn list_packages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list_packages.execute().await {
        Ok(packages) => HttpResponse::Ok().json(packages),
        Err(e) => {
            error!(error = %e, "Failed to list packages");
            ApiResponse::internal_error()
        }
    }
}
