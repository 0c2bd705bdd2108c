use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    AuthorizationUrlResponse, ForgotPasswordDto, ForgotPasswordResponse, LoginRequestDto,
    RegisterUserDto, ResetPasswordDto, SessionResponse,
};
use crate::auth::application::domain::entities::{OAuthProvider, PublicUser, Role};
use crate::catalog::application::domain::Package;
use crate::order::adapter::incoming::web::routes::{
    GuestHistoryDto, PlaceOrderDto, PlaceOrderResponse, UpdateOrderStatusDto,
};
use crate::order::application::domain::{OrderStatus, OrderView};
use crate::player::adapter::incoming::web::routes::PlayerNameResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Top-up Store API",
        version = "1.0.0",
        description = "Game currency top-up storefront: catalog, wallet and manual-payment orders, order tracking and administration",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,
        crate::auth::adapter::incoming::web::routes::oauth_url_handler,
        crate::auth::adapter::incoming::web::routes::oauth_callback_handler,
        crate::auth::adapter::incoming::web::routes::fetch_user_handler,

        // Catalog and player lookup
        crate::catalog::adapter::incoming::web::routes::list_packages_handler,
        crate::player::adapter::incoming::web::routes::check_player_handler,

        // Order endpoints
        crate::order::adapter::incoming::web::routes::place_order_handler,
        crate::order::adapter::incoming::web::routes::list_user_orders_handler,
        crate::order::adapter::incoming::web::routes::track_order_handler,
        crate::order::adapter::incoming::web::routes::guest_history_handler,

        // Admin endpoints
        crate::order::adapter::incoming::web::routes::admin_orders_handler,
        crate::order::adapter::incoming::web::routes::update_order_status_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            // Auth DTOs
            RegisterUserDto,
            LoginRequestDto,
            SessionResponse,
            ForgotPasswordDto,
            ForgotPasswordResponse,
            ResetPasswordDto,
            AuthorizationUrlResponse,
            PublicUser,
            Role,
            OAuthProvider,

            // Catalog
            Package,
            PlayerNameResponse,

            // Orders
            PlaceOrderDto,
            PlaceOrderResponse,
            GuestHistoryDto,
            UpdateOrderStatusDto,
            OrderView,
            OrderStatus
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login, password reset and social sign-in"),
        (name = "catalog", description = "Top-up package catalog"),
        (name = "player", description = "In-game player name lookup"),
        (name = "orders", description = "Placing, listing and tracking orders"),
        (name = "admin", description = "Order administration"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/login or /api/register"))
                        .build(),
                ),
            )
        }
    }
}
