pub mod federated_authenticate_service;
pub mod fetch_user_service;
pub mod login_user_service;
pub mod oauth_login_service;
pub mod register_user_service;
pub mod request_password_reset_service;
pub mod reset_password_service;

pub use federated_authenticate_service::FederatedAuthenticateService;
pub use fetch_user_service::FetchUserService;
pub use login_user_service::LoginUserService;
pub use oauth_login_service::{CompleteOAuthLoginService, StartOAuthLoginService};
pub use register_user_service::RegisterUserService;
pub use request_password_reset_service::RequestPasswordResetService;
pub use reset_password_service::ResetPasswordService;
