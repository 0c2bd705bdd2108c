use async_trait::async_trait;

use super::ListOrdersError;
use crate::order::application::domain::OrderView;

#[async_trait]
pub trait ListAllOrdersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<OrderView>, ListOrdersError>;
}
