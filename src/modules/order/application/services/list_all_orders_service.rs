use async_trait::async_trait;

use crate::order::application::domain::OrderView;
use crate::order::application::ports::incoming::use_cases::{ListAllOrdersUseCase, ListOrdersError};
use crate::order::application::ports::outgoing::OrderQuery;

pub struct ListAllOrdersService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> ListAllOrdersService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListAllOrdersUseCase for ListAllOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<OrderView>, ListOrdersError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListOrdersError::QueryError(e.to_string()))
    }
}
