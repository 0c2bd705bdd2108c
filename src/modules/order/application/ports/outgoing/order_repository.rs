use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::{NewOrder, OrderStatus, PlacedOrder};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Insufficient wallet balance")]
    InsufficientBalance,

    #[error("User not found")]
    UserNotFound,

    #[error("Order code already taken")]
    DuplicateOrderCode,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Debits `order.price` from the payer and stores the order as one unit.
    /// Nothing is written when the balance does not cover the price.
    async fn place_wallet_order(
        &self,
        payer: UserId,
        order: NewOrder,
    ) -> Result<PlacedOrder, OrderRepositoryError>;

    /// Stores a manual-payment order without touching any balance.
    async fn place_manual_order(&self, order: NewOrder) -> Result<PlacedOrder, OrderRepositoryError>;

    /// Compare-and-set on the status column. Returns `false` when the order
    /// was not in `expected` (or does not exist).
    async fn update_status_if(
        &self,
        order_id: i32,
        expected: OrderStatus,
        next: OrderStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<bool, OrderRepositoryError>;
}
