use async_trait::async_trait;
use std::collections::HashSet;

use crate::order::application::domain::OrderView;
use crate::order::application::ports::incoming::use_cases::{
    GuestOrderHistoryUseCase, ListOrdersError, MAX_GUEST_CODES,
};
use crate::order::application::ports::outgoing::OrderQuery;

pub struct GuestOrderHistoryService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> GuestOrderHistoryService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GuestOrderHistoryUseCase for GuestOrderHistoryService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, order_codes: Vec<String>) -> Result<Vec<OrderView>, ListOrdersError> {
        // First-seen order wins, so the cap keeps what the client sent first.
        let mut seen = HashSet::new();
        let codes: Vec<String> = order_codes
            .iter()
            .map(|c| c.trim().to_ascii_uppercase())
            .filter(|c| !c.is_empty() && seen.insert(c.clone()))
            .take(MAX_GUEST_CODES)
            .collect();

        if codes.is_empty() {
            return Ok(Vec::new());
        }

        self.query
            .list_by_codes(&codes)
            .await
            .map_err(|e| ListOrdersError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::InMemoryOrders;

    #[tokio::test]
    async fn empty_input_is_empty_result() {
        let orders = InMemoryOrders::failing();

        let found = GuestOrderHistoryService::new(orders).execute(vec![]).await.unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn returns_only_known_codes() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        orders.seed_order("TP00000001", None, None);
        orders.seed_order("TP00000002", None, None);

        let found = GuestOrderHistoryService::new(orders)
            .execute(vec!["tp00000001".into(), "TP00000001".into(), "TP99999999".into()])
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].order_code.as_deref(), Some("TP00000001"));
    }

    #[tokio::test]
    async fn cap_keeps_the_codes_sent_first() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        orders.seed_order("TP00000150", None, None);
        orders.seed_order("TP00000001", None, None);

        // Newest first, with a repeat that must not use up a slot.
        let mut codes: Vec<String> = vec!["tp00000150".into()];
        codes.extend((1..=150).rev().map(|n| format!("TP{:08}", n)));

        let found = GuestOrderHistoryService::new(orders)
            .execute(codes)
            .await
            .unwrap();

        let found: Vec<_> = found.iter().filter_map(|o| o.order_code.as_deref()).collect();
        assert_eq!(found, vec!["TP00000150"]);
    }
}
