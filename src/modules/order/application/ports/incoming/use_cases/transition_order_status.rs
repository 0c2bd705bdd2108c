use async_trait::async_trait;

use crate::order::application::domain::{OrderStatus, UnknownStatus};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionOrderStatusError {
    #[error(transparent)]
    InvalidStatus(#[from] UnknownStatus),

    #[error("Order not found")]
    OrderNotFound,

    #[error("Cannot move order from {from} to {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TransitionOrderStatusUseCase: Send + Sync {
    async fn execute(&self, order_id: i32, status: &str) -> Result<(), TransitionOrderStatusError>;
}
