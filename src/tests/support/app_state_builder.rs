use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    CompleteOAuthLoginUseCase, FetchUserUseCase, LoginUserUseCase, RegisterUserUseCase,
    RequestPasswordResetUseCase, ResetPasswordUseCase, StartOAuthLoginUseCase,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::ports::incoming::use_cases::ListPackagesUseCase;
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::ports::incoming::use_cases::{
    GuestOrderHistoryUseCase, ListAllOrdersUseCase, ListUserOrdersUseCase, PlaceOrderUseCase,
    TrackOrderUseCase, TransitionOrderStatusUseCase,
};
use crate::player::application::ports::incoming::use_cases::CheckPlayerNameUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every slot starts as a stub that panics when called; tests swap in the
/// one use case the handler under test needs.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    catalog: CatalogUseCases,
    orders: OrderUseCases,
    check_player_name: Arc<dyn CheckPlayerNameUseCase + Send + Sync>,
    expose_reset_token: bool,
    app_origin: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                start_oauth: Arc::new(StubStartOAuthLoginUseCase),
                complete_oauth: Arc::new(StubCompleteOAuthLoginUseCase),
                request_password_reset: Arc::new(StubRequestPasswordResetUseCase),
                reset_password: Arc::new(StubResetPasswordUseCase),
                fetch_user: Arc::new(StubFetchUserUseCase),
            },
            catalog: CatalogUseCases {
                list_packages: Arc::new(StubListPackagesUseCase),
            },
            orders: OrderUseCases {
                place: Arc::new(StubPlaceOrderUseCase),
                transition_status: Arc::new(StubTransitionOrderStatusUseCase),
                track: Arc::new(StubTrackOrderUseCase),
                guest_history: Arc::new(StubGuestOrderHistoryUseCase),
                list_for_user: Arc::new(StubListUserOrdersUseCase),
                list_all: Arc::new(StubListAllOrdersUseCase),
            },
            check_player_name: Arc::new(StubCheckPlayerNameUseCase),
            expose_reset_token: false,
            app_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl TestAppStateBuilder {
    // ---- auth ----
    pub fn with_register_user(mut self, uc: Arc<dyn RegisterUserUseCase + Send + Sync>) -> Self {
        self.auth.register = uc;
        self
    }

    pub fn with_login_user(mut self, uc: Arc<dyn LoginUserUseCase + Send + Sync>) -> Self {
        self.auth.login = uc;
        self
    }

    pub fn with_start_oauth(mut self, uc: Arc<dyn StartOAuthLoginUseCase + Send + Sync>) -> Self {
        self.auth.start_oauth = uc;
        self
    }

    pub fn with_complete_oauth(
        mut self,
        uc: Arc<dyn CompleteOAuthLoginUseCase + Send + Sync>,
    ) -> Self {
        self.auth.complete_oauth = uc;
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: Arc<dyn RequestPasswordResetUseCase + Send + Sync>,
    ) -> Self {
        self.auth.request_password_reset = uc;
        self
    }

    pub fn with_expose_reset_token(mut self, expose: bool) -> Self {
        self.expose_reset_token = expose;
        self
    }

    pub fn with_app_origin(mut self, origin: &str) -> Self {
        self.app_origin = origin.to_string();
        self
    }

    pub fn with_reset_password(mut self, uc: Arc<dyn ResetPasswordUseCase + Send + Sync>) -> Self {
        self.auth.reset_password = uc;
        self
    }

    pub fn with_fetch_user(mut self, uc: Arc<dyn FetchUserUseCase + Send + Sync>) -> Self {
        self.auth.fetch_user = uc;
        self
    }

    // ---- catalog / player ----
    pub fn with_list_packages(mut self, uc: Arc<dyn ListPackagesUseCase + Send + Sync>) -> Self {
        self.catalog.list_packages = uc;
        self
    }

    pub fn with_check_player_name(
        mut self,
        uc: Arc<dyn CheckPlayerNameUseCase + Send + Sync>,
    ) -> Self {
        self.check_player_name = uc;
        self
    }

    // ---- orders ----
    pub fn with_place_order(mut self, uc: Arc<dyn PlaceOrderUseCase + Send + Sync>) -> Self {
        self.orders.place = uc;
        self
    }

    pub fn with_transition_status(
        mut self,
        uc: Arc<dyn TransitionOrderStatusUseCase + Send + Sync>,
    ) -> Self {
        self.orders.transition_status = uc;
        self
    }

    pub fn with_track_order(mut self, uc: Arc<dyn TrackOrderUseCase + Send + Sync>) -> Self {
        self.orders.track = uc;
        self
    }

    pub fn with_guest_history(
        mut self,
        uc: Arc<dyn GuestOrderHistoryUseCase + Send + Sync>,
    ) -> Self {
        self.orders.guest_history = uc;
        self
    }

    pub fn with_list_user_orders(
        mut self,
        uc: Arc<dyn ListUserOrdersUseCase + Send + Sync>,
    ) -> Self {
        self.orders.list_for_user = uc;
        self
    }

    pub fn with_list_all_orders(mut self, uc: Arc<dyn ListAllOrdersUseCase + Send + Sync>) -> Self {
        self.orders.list_all = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            catalog: self.catalog,
            orders: self.orders,
            check_player_name: self.check_player_name,
            expose_reset_token: self.expose_reset_token,
            app_origin: self.app_origin,
        })
    }
}
