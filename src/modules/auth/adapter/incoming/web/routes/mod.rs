mod fetch_user;
mod forgot_password;
mod login_user;
mod oauth;
mod register_user;
mod reset_password;

pub use fetch_user::*;
pub use forgot_password::*;
pub use login_user::*;
pub use oauth::*;
pub use register_user::*;
pub use reset_password::*;
