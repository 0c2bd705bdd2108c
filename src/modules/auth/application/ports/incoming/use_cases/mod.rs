pub mod federated_authenticate;
pub mod fetch_user;
pub mod login_user;
pub mod oauth_login;
pub mod register_user;
pub mod request_password_reset;
pub mod reset_password;

pub use federated_authenticate::{FederatedAuthenticateError, FederatedAuthenticateUseCase};
pub use fetch_user::{FetchUserError, FetchUserUseCase};
pub use login_user::{LoginError, LoginRequest, LoginUserUseCase};
pub use oauth_login::{
    CompleteOAuthLoginUseCase, OAuthLoginError, OAuthLoginStart, StartOAuthLoginUseCase,
};
pub use register_user::{RegisterUserError, RegisterUserRequest, RegisterUserUseCase};
pub use request_password_reset::{
    IssuedPasswordReset, RequestPasswordResetError, RequestPasswordResetUseCase,
};
pub use reset_password::{ResetPasswordError, ResetPasswordUseCase};
