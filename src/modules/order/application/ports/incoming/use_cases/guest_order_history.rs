use async_trait::async_trait;

use super::ListOrdersError;
use crate::order::application::domain::OrderView;

/// Codes past this many are ignored.
pub const MAX_GUEST_CODES: usize = 100;

#[async_trait]
pub trait GuestOrderHistoryUseCase: Send + Sync {
    async fn execute(&self, order_codes: Vec<String>) -> Result<Vec<OrderView>, ListOrdersError>;
}
