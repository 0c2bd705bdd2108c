use serde::Serialize;
use utoipa::ToSchema;

/// Standard error envelope
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Error code for programmatic handling
    #[schema(example = "INSUFFICIENT_BALANCE")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Wallet balance is too low for this package")]
    pub message: String,
}
