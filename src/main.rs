pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, catalog, email, order, player};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::{
    Argon2Hasher, JwtConfig, JwtTokenService, OAuthClient, OAuthConfig, UserQueryPostgres,
    UserRepositoryPostgres,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::FederatedAuthenticateUseCase;
use crate::auth::application::ports::outgoing::{IdentityProvider, TokenProvider};
use crate::auth::application::services::{
    CompleteOAuthLoginService, FederatedAuthenticateService, FetchUserService, LoginUserService,
    RegisterUserService, RequestPasswordResetService, ResetPasswordService,
    StartOAuthLoginService,
};
use crate::catalog::adapter::outgoing::{
    CatalogCache, PackageQueryPostgres, PackageRepositoryPostgres,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::ports::incoming::use_cases::{SeedCatalogUseCase, SeedOutcome};
use crate::catalog::application::services::{ListPackagesService, SeedCatalogService};
use crate::email::adapter::outgoing::{LogEmailSender, SmtpEmailSender};
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::services::UserEmailService;
use crate::order::adapter::outgoing::{
    OrderQueryPostgres, OrderRepositoryPostgres, RandomOrderCodeGenerator,
};
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::services::{
    GuestOrderHistoryService, ListAllOrdersService, ListUserOrdersService, PlaceOrderService,
    TrackOrderService, TransitionOrderStatusService,
};
use crate::player::adapter::outgoing::SyntheticPlayerDirectory;
use crate::player::application::ports::incoming::use_cases::CheckPlayerNameUseCase;
use crate::player::application::services::CheckPlayerNameService;
use crate::shared::api::custom_json_config;
use crate::shared::config::{load_dotenv, AppConfig, RuntimeEnv};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub catalog: CatalogUseCases,
    pub orders: OrderUseCases,
    pub check_player_name: Arc<dyn CheckPlayerNameUseCase + Send + Sync>,
    /// Echo reset tokens back to the caller. Never set in production.
    pub expose_reset_token: bool,
    /// Origin of the storefront (`APP_URL`). The only window the OAuth
    /// callback page will post a session to.
    pub app_origin: String,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let runtime = RuntimeEnv::from_env();
    load_dotenv(runtime);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(runtime = runtime.as_str(), "Starting application...");

    let config = AppConfig::from_env(runtime)?;

    let db_arc = Arc::new(shared::database::connect(&config.database_url).await?);
    Migrator::up(db_arc.as_ref(), None).await?;
    info!("Database migrations applied");

    // Catalog: seed once, then serve reads from memory
    let seeder = SeedCatalogService::new(PackageRepositoryPostgres::new(Arc::clone(&db_arc)));
    match seeder.execute().await? {
        SeedOutcome::Seeded(count) => info!(count, "Catalog seeded"),
        SeedOutcome::AlreadyPresent(count) => info!(count, "Catalog already present, skipping seed"),
    }
    let catalog_cache = CatalogCache::load(&PackageQueryPostgres::new(Arc::clone(&db_arc))).await?;

    // Auth adapters
    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let hasher = Argon2Hasher::from_env()?;
    let identity: Arc<dyn IdentityProvider + Send + Sync> = Arc::new(OAuthClient::new(
        OAuthConfig::from_env(&config.server.app_url)?,
    )?);

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    // Email
    let email_sender: Arc<dyn EmailSender + Send + Sync> = match &config.smtp {
        Some(smtp) => Arc::new(SmtpEmailSender::from_config(smtp)?),
        None => {
            warn!("SMTP_SERVER not set, outgoing mail will only be logged");
            Arc::new(LogEmailSender)
        }
    };
    let user_email_service = UserEmailService::new(email_sender, &config.server.app_url);

    let federated: Arc<dyn FederatedAuthenticateUseCase + Send + Sync> = Arc::new(
        FederatedAuthenticateService::new(user_query.clone(), user_repo.clone()),
    );

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_repo.clone(),
            hasher.clone(),
            Arc::clone(&token_provider_arc),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            hasher.clone(),
            Arc::clone(&token_provider_arc),
        )),
        start_oauth: Arc::new(StartOAuthLoginService::new(
            Arc::clone(&identity),
            Arc::clone(&token_provider_arc),
        )),
        complete_oauth: Arc::new(CompleteOAuthLoginService::new(
            identity,
            Arc::clone(&token_provider_arc),
            federated,
        )),
        request_password_reset: Arc::new(RequestPasswordResetService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::new(user_email_service),
        )),
        reset_password: Arc::new(ResetPasswordService::new(user_repo, hasher)),
        fetch_user: Arc::new(FetchUserService::new(user_query)),
    };

    let catalog = CatalogUseCases {
        list_packages: Arc::new(ListPackagesService::new(catalog_cache.clone())),
    };

    // Orders
    let order_query = OrderQueryPostgres::new(Arc::clone(&db_arc));
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db_arc));

    let orders = OrderUseCases {
        place: Arc::new(PlaceOrderService::new(
            catalog_cache,
            order_repo.clone(),
            Arc::new(RandomOrderCodeGenerator),
        )),
        transition_status: Arc::new(TransitionOrderStatusService::new(
            order_query.clone(),
            order_repo,
        )),
        track: Arc::new(TrackOrderService::new(order_query.clone())),
        guest_history: Arc::new(GuestOrderHistoryService::new(order_query.clone())),
        list_for_user: Arc::new(ListUserOrdersService::new(order_query.clone())),
        list_all: Arc::new(ListAllOrdersService::new(order_query)),
    };

    let check_player_name = Arc::new(CheckPlayerNameService::new(SyntheticPlayerDirectory::new(
        Duration::from_millis(config.player_lookup_delay_ms),
    )));

    let state = AppState {
        auth,
        catalog,
        orders,
        check_player_name,
        expose_reset_token: !runtime.is_production(),
        app_origin: reqwest::Url::parse(&config.server.app_url)?
            .origin()
            .ascii_serialization(),
    };

    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();
    let bind_address = config.bind_address();

    info!(address = %bind_address, "HTTP server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::forgot_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::oauth_url_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::oauth_callback_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_user_handler);
    // Catalog and player lookup
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_packages_handler);
    cfg.service(crate::player::adapter::incoming::web::routes::check_player_handler);
    // Orders
    cfg.service(crate::order::adapter::incoming::web::routes::place_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::guest_history_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::track_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::list_user_orders_handler);
    // Admin
    cfg.service(crate::order::adapter::incoming::web::routes::admin_orders_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::update_order_status_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
