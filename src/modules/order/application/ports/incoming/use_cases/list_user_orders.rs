use async_trait::async_trait;

use super::ListOrdersError;
use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::OrderView;

#[async_trait]
pub trait ListUserOrdersUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<OrderView>, ListOrdersError>;
}
