use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::player::application::domain::player_uid::INVALID_UID_MESSAGE;
use crate::player::application::ports::incoming::use_cases::CheckPlayerNameError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerNameResponse {
    #[schema(example = "Player_6789")]
    pub name: String,
}

/// Resolve a player UID to its in-game name
#[utoipa::path(
    get,
    path = "/api/check-player/{uid}",
    tag = "player",
    params(("uid" = String, Path, description = "In-game player id")),
    responses(
        (status = 200, description = "Player found", body = PlayerNameResponse),
        (status = 404, description = "Malformed or unknown UID", body = ErrorResponse),
        (status = 502, description = "Lookup service unavailable", body = ErrorResponse),
    )
)]
#[get("/api/check-player/{uid}")]
pub async fn check_player_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let uid = path.into_inner();

    match data.check_player_name.execute(&uid).await {
        Ok(name) => ApiResponse::success(PlayerNameResponse { name }),

        Err(CheckPlayerNameError::InvalidUid(_)) | Err(CheckPlayerNameError::PlayerNotFound) => {
            warn!(player_uid = %uid, "Player lookup rejected");
            ApiResponse::not_found("INVALID_PLAYER_UID", INVALID_UID_MESSAGE)
        }

        Err(CheckPlayerNameError::DirectoryError(e)) => {
            error!(error = %e, "Player directory failed");
            ApiResponse::bad_gateway("PLAYER_LOOKUP_FAILED", "Player lookup is unavailable")
        }
    }
}
