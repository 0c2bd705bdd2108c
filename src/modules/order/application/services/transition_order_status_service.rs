use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::incoming::use_cases::{
    TransitionOrderStatusError, TransitionOrderStatusUseCase,
};
use crate::order::application::ports::outgoing::{OrderQuery, OrderRepository};

pub struct TransitionOrderStatusService<Q, R>
where
    Q: OrderQuery,
    R: OrderRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> TransitionOrderStatusService<Q, R>
where
    Q: OrderQuery,
    R: OrderRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn current_status(&self, order_id: i32) -> Result<OrderStatus, TransitionOrderStatusError> {
        self.query
            .find_status(order_id)
            .await
            .map_err(|e| TransitionOrderStatusError::RepositoryError(e.to_string()))?
            .ok_or(TransitionOrderStatusError::OrderNotFound)
    }
}

#[async_trait]
impl<Q, R> TransitionOrderStatusUseCase for TransitionOrderStatusService<Q, R>
where
    Q: OrderQuery + Send + Sync,
    R: OrderRepository + Send + Sync,
{
    async fn execute(&self, order_id: i32, status: &str) -> Result<(), TransitionOrderStatusError> {
        let next: OrderStatus = status.parse()?;
        let current = self.current_status(order_id).await?;

        if !current.can_transition_to(next) {
            warn!(order_id, from = %current, to = %next, "Illegal order transition");
            return Err(TransitionOrderStatusError::IllegalTransition {
                from: current,
                to: next,
            });
        }

        let completed_at = (next == OrderStatus::Complete).then(Utc::now);
        let updated = self
            .repository
            .update_status_if(order_id, current, next, completed_at)
            .await
            .map_err(|e| TransitionOrderStatusError::RepositoryError(e.to_string()))?;

        if !updated {
            // Another admin moved it first
            let latest = self.current_status(order_id).await?;
            return Err(TransitionOrderStatusError::IllegalTransition {
                from: latest,
                to: next,
            });
        }

        info!(order_id, from = %current, to = %next, "Order status updated");
        Ok(())
    }
}
