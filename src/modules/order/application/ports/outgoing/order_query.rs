use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::{ContactNumber, OrderStatus, OrderView};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt order row {id}: {reason}")]
    CorruptRow { id: i32, reason: String },
}

/// Every listing is newest first.
#[async_trait]
pub trait OrderQuery: Send + Sync {
    async fn find_status(&self, order_id: i32) -> Result<Option<OrderStatus>, OrderQueryError>;

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<OrderView>, OrderQueryError>;

    /// Orders whose code equals `order_code` or whose contact number equals
    /// `contact_number`.
    async fn track(
        &self,
        order_code: &str,
        contact_number: Option<&ContactNumber>,
    ) -> Result<Vec<OrderView>, OrderQueryError>;

    async fn list_by_codes(&self, codes: &[String]) -> Result<Vec<OrderView>, OrderQueryError>;

    async fn list_all(&self) -> Result<Vec<OrderView>, OrderQueryError>;
}
