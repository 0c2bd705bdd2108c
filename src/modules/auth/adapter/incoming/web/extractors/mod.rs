pub mod auth;

pub use auth::{AdminUser, AuthenticatedUser, MaybeAuthenticatedUser};
