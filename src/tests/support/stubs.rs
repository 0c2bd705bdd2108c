use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    AuthenticatedSession, OAuthProvider, PublicUser, Role, UserId,
};
use crate::auth::application::ports::incoming::use_cases::{
    CompleteOAuthLoginUseCase, FetchUserError, FetchUserUseCase, IssuedPasswordReset, LoginError,
    LoginRequest, LoginUserUseCase, OAuthLoginError, OAuthLoginStart, RegisterUserError,
    RegisterUserRequest,
    RegisterUserUseCase, RequestPasswordResetError, RequestPasswordResetUseCase,
    ResetPasswordError, ResetPasswordUseCase, StartOAuthLoginUseCase,
};
use crate::catalog::application::domain::Package;
use crate::catalog::application::ports::incoming::use_cases::{
    ListPackagesError, ListPackagesUseCase,
};
use crate::order::application::domain::{OrderStatus, OrderView, PlacedOrder};
use crate::order::application::ports::incoming::use_cases::{
    GuestOrderHistoryUseCase, ListAllOrdersUseCase, ListOrdersError, ListUserOrdersUseCase,
    PlaceOrderError, PlaceOrderRequest, PlaceOrderUseCase, TrackOrderUseCase,
    TransitionOrderStatusError, TransitionOrderStatusUseCase,
};
use crate::player::application::ports::incoming::use_cases::{
    CheckPlayerNameError, CheckPlayerNameUseCase,
};

// ========================= Sample data =========================
pub fn sample_public_user(wallet_balance: i64) -> PublicUser {
    PublicUser {
        id: Uuid::new_v4(),
        name: "Rahim Uddin".to_string(),
        email: "rahim@example.com".to_string(),
        wallet_balance,
        role: Role::User,
        profile_pic: None,
    }
}

pub fn sample_package(id: i32, name: &str, price: i64) -> Package {
    Package {
        id,
        category: "UID Top-up (BD)".to_string(),
        name: name.to_string(),
        price,
        diamonds: 0,
    }
}

/// Pending guest bkash order for "115 Diamond".
pub fn sample_order_view(id: i32, code: &str) -> OrderView {
    OrderView {
        id,
        order_code: Some(code.to_string()),
        user_id: None,
        user_name: None,
        package_id: 1,
        package_name: "115 Diamond".to_string(),
        player_uid: "123456789".to_string(),
        status: OrderStatus::Pending,
        payment_method: "bkash".to_string(),
        transaction_id: Some("TX1".to_string()),
        contact_number: Some("01712345678".to_string()),
        price: 100,
        created_at: Utc::now(),
        completed_at: None,
    }
}

// ========================= Auth =========================
#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterUserRequest,
    ) -> Result<AuthenticatedSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthenticatedSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubStartOAuthLoginUseCase;

#[async_trait]
impl StartOAuthLoginUseCase for StubStartOAuthLoginUseCase {
    async fn execute(&self, _provider: OAuthProvider) -> Result<OAuthLoginStart, OAuthLoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCompleteOAuthLoginUseCase;

#[async_trait]
impl CompleteOAuthLoginUseCase for StubCompleteOAuthLoginUseCase {
    async fn execute(
        &self,
        _code: &str,
        _state: &str,
        _nonce: &str,
    ) -> Result<AuthenticatedSession, OAuthLoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRequestPasswordResetUseCase;

#[async_trait]
impl RequestPasswordResetUseCase for StubRequestPasswordResetUseCase {
    async fn execute(&self, _email: &str) -> Result<IssuedPasswordReset, RequestPasswordResetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResetPasswordUseCase;

#[async_trait]
impl ResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _token: &str, _new_password: &str) -> Result<(), ResetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserUseCase;

#[async_trait]
impl FetchUserUseCase for StubFetchUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<PublicUser, FetchUserError> {
        unimplemented!("Not used in this test")
    }
}

// ========================= Catalog / player =========================
#[derive(Default, Clone)]
pub struct StubListPackagesUseCase;

#[async_trait]
impl ListPackagesUseCase for StubListPackagesUseCase {
    async fn execute(&self) -> Result<Vec<Package>, ListPackagesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCheckPlayerNameUseCase;

#[async_trait]
impl CheckPlayerNameUseCase for StubCheckPlayerNameUseCase {
    async fn execute(&self, _uid: &str) -> Result<String, CheckPlayerNameError> {
        unimplemented!("Not used in this test")
    }
}

// ========================= Orders =========================
#[derive(Default, Clone)]
pub struct StubPlaceOrderUseCase;

#[async_trait]
impl PlaceOrderUseCase for StubPlaceOrderUseCase {
    async fn execute(&self, _request: PlaceOrderRequest) -> Result<PlacedOrder, PlaceOrderError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubTransitionOrderStatusUseCase;

#[async_trait]
impl TransitionOrderStatusUseCase for StubTransitionOrderStatusUseCase {
    async fn execute(&self, _order_id: i32, _status: &str) -> Result<(), TransitionOrderStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubTrackOrderUseCase;

#[async_trait]
impl TrackOrderUseCase for StubTrackOrderUseCase {
    async fn execute(&self, _query: &str) -> Result<Vec<OrderView>, ListOrdersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGuestOrderHistoryUseCase;

#[async_trait]
impl GuestOrderHistoryUseCase for StubGuestOrderHistoryUseCase {
    async fn execute(&self, _order_codes: Vec<String>) -> Result<Vec<OrderView>, ListOrdersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUserOrdersUseCase;

#[async_trait]
impl ListUserOrdersUseCase for StubListUserOrdersUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<OrderView>, ListOrdersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAllOrdersUseCase;

#[async_trait]
impl ListAllOrdersUseCase for StubListAllOrdersUseCase {
    async fn execute(&self) -> Result<Vec<OrderView>, ListOrdersError> {
        unimplemented!("Not used in this test")
    }
}
