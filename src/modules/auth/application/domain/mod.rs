pub mod entities;
pub mod password_policy;
pub mod password_reset;
