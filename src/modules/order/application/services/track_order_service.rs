use async_trait::async_trait;

use crate::order::application::domain::{ContactNumber, OrderView};
use crate::order::application::ports::incoming::use_cases::{ListOrdersError, TrackOrderUseCase};
use crate::order::application::ports::outgoing::OrderQuery;

/// Public lookup by order code or contact number. No session needed.
pub struct TrackOrderService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> TrackOrderService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> TrackOrderUseCase for TrackOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, query: &str) -> Result<Vec<OrderView>, ListOrdersError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        // A phone number may be typed with or without the country prefix
        let contact = ContactNumber::parse(query).ok();
        let code = query.to_ascii_uppercase();

        self.query
            .track(&code, contact.as_ref())
            .await
            .map_err(|e| ListOrdersError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::InMemoryOrders;

    #[tokio::test]
    async fn finds_by_code_case_insensitively() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        orders.seed_order("TP00000001", None, None);
        orders.seed_order("TP00000002", None, None);

        let found = TrackOrderService::new(orders).execute(" tp00000002 ").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].order_code.as_deref(), Some("TP00000002"));
    }

    #[tokio::test]
    async fn finds_every_order_for_a_contact_newest_first() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        let older = orders.seed_order("TP00000001", None, Some("01712345678"));
        let newer = orders.seed_order("TP00000002", None, Some("01712345678"));
        orders.seed_order("TP00000003", None, Some("01812345678"));

        let found = TrackOrderService::new(orders)
            .execute("+8801712345678")
            .await
            .unwrap();

        let ids: Vec<_> = found.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![newer, older]);
    }

    #[tokio::test]
    async fn blank_query_is_empty() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        orders.seed_order("TP00000001", None, None);

        assert!(TrackOrderService::new(orders).execute("  ").await.unwrap().is_empty());
    }
}
