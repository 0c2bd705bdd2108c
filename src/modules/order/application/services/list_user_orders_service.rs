use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::OrderView;
use crate::order::application::ports::incoming::use_cases::{ListOrdersError, ListUserOrdersUseCase};
use crate::order::application::ports::outgoing::OrderQuery;

pub struct ListUserOrdersService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> ListUserOrdersService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUserOrdersUseCase for ListUserOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<OrderView>, ListOrdersError> {
        self.query
            .list_by_user(user_id)
            .await
            .map_err(|e| ListOrdersError::QueryError(e.to_string()))
    }
}
