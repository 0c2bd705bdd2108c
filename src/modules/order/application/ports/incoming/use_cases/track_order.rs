use async_trait::async_trait;

use super::ListOrdersError;
use crate::order::application::domain::OrderView;

#[async_trait]
pub trait TrackOrderUseCase: Send + Sync {
    /// `query` is either an order code or a contact number.
    async fn execute(&self, query: &str) -> Result<Vec<OrderView>, ListOrdersError>;
}
