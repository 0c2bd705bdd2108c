mod client;
mod config;
mod profiles;

pub use client::{pkce_challenge, OAuthClient};
pub use config::{ClientCredentials, OAuthConfig};
