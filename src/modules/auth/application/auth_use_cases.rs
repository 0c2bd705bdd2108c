use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    CompleteOAuthLoginUseCase, FetchUserUseCase, LoginUserUseCase, RegisterUserUseCase,
    RequestPasswordResetUseCase, ResetPasswordUseCase, StartOAuthLoginUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub start_oauth: Arc<dyn StartOAuthLoginUseCase + Send + Sync>,
    pub complete_oauth: Arc<dyn CompleteOAuthLoginUseCase + Send + Sync>,
    pub request_password_reset: Arc<dyn RequestPasswordResetUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    pub fetch_user: Arc<dyn FetchUserUseCase + Send + Sync>,
}
