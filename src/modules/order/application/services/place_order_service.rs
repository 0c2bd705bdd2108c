use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::catalog::application::ports::outgoing::PackageQuery;
use crate::order::application::domain::{NewOrder, PlacedOrder};
use crate::order::application::ports::incoming::use_cases::{
    PlaceOrderError, PlaceOrderRequest, PlaceOrderUseCase,
};
use crate::order::application::ports::outgoing::{
    OrderCodeGenerator, OrderRepository, OrderRepositoryError,
};

pub const MAX_CODE_ATTEMPTS: u32 = 5;

pub struct PlaceOrderService<P, R>
where
    P: PackageQuery,
    R: OrderRepository,
{
    packages: P,
    orders: R,
    codes: Arc<dyn OrderCodeGenerator + Send + Sync>,
}

impl<P, R> PlaceOrderService<P, R>
where
    P: PackageQuery,
    R: OrderRepository,
{
    pub fn new(packages: P, orders: R, codes: Arc<dyn OrderCodeGenerator + Send + Sync>) -> Self {
        Self {
            packages,
            orders,
            codes,
        }
    }
}

#[async_trait]
impl<P, R> PlaceOrderUseCase for PlaceOrderService<P, R>
where
    P: PackageQuery + Send + Sync,
    R: OrderRepository + Send + Sync,
{
    async fn execute(&self, request: PlaceOrderRequest) -> Result<PlacedOrder, PlaceOrderError> {
        let package = self
            .packages
            .find_by_id(request.package_id())
            .await
            .map_err(|e| PlaceOrderError::RepositoryError(e.to_string()))?
            .ok_or(PlaceOrderError::PackageNotFound)?;

        let payer = match (request.payment_method().is_wallet(), request.owner()) {
            (true, None) => return Err(PlaceOrderError::LoginRequired),
            (true, Some(owner)) => Some(owner),
            (false, _) => None,
        };

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let order = NewOrder {
                user_id: request.owner(),
                package_id: package.id,
                player_uid: request.player_uid().clone(),
                payment_method: request.payment_method(),
                transaction_id: request.transaction_id().map(str::to_string),
                contact_number: request.contact_number().cloned(),
                order_code: self.codes.next_code(),
                price: package.price,
                created_at: Utc::now(),
            };

            let result = match payer {
                Some(payer) => self.orders.place_wallet_order(payer, order).await,
                None => self.orders.place_manual_order(order).await,
            };

            match result {
                Ok(placed) => {
                    info!(
                        order_id = placed.id,
                        order_code = %placed.order_code,
                        payment_method = %placed.payment_method,
                        price = placed.price,
                        "Order placed"
                    );
                    return Ok(placed);
                }
                Err(OrderRepositoryError::DuplicateOrderCode) => {
                    warn!(attempt, "Order code collision, retrying");
                }
                Err(OrderRepositoryError::InsufficientBalance) => {
                    return Err(PlaceOrderError::InsufficientBalance);
                }
                Err(OrderRepositoryError::UserNotFound) => return Err(PlaceOrderError::UserNotFound),
                Err(OrderRepositoryError::DatabaseError(e)) => {
                    return Err(PlaceOrderError::RepositoryError(e));
                }
            }
        }

        error!(attempts = MAX_CODE_ATTEMPTS, "No free order code found");
        Err(PlaceOrderError::OrderCodeExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::catalog::adapter::outgoing::CatalogCache;
    use crate::order::application::domain::OrderStatus;
    use crate::tests::support::fakes::{InMemoryOrders, SequenceCodes};
    use crate::tests::support::stubs::sample_package;

    fn catalog() -> CatalogCache {
        CatalogCache::from_packages(vec![sample_package(1, "115 Diamond", 100)])
    }

    fn service(orders: InMemoryOrders, codes: &[&str]) -> PlaceOrderService<CatalogCache, InMemoryOrders> {
        PlaceOrderService::new(catalog(), orders, Arc::new(SequenceCodes::new(codes)))
    }

    fn wallet(owner: Option<UserId>) -> PlaceOrderRequest {
        PlaceOrderRequest::new(owner, 1, "123456789", "wallet", None, None).unwrap()
    }

    fn manual() -> PlaceOrderRequest {
        PlaceOrderRequest::new(
            None,
            1,
            "123456789",
            "nagad",
            Some("TX9".into()),
            Some("01812345678".into()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn wallet_order_debits_and_snapshots_price() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        let user = UserId::new();
        orders.set_balance(user, 150);

        let placed = service(orders.clone(), &["TP00000001"])
            .execute(wallet(Some(user)))
            .await
            .unwrap();

        assert_eq!(placed.order_code.as_str(), "TP00000001");
        assert_eq!(placed.price, 100);
        assert_eq!(orders.balance_of(user), Some(50));

        let stored = orders.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, OrderStatus::Pending);
        assert_eq!(stored[0].user_id, Some(user.value()));
    }

    #[tokio::test]
    async fn wallet_order_without_login_is_rejected() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");

        let result = service(orders.clone(), &["TP00000001"]).execute(wallet(None)).await;

        assert_eq!(result, Err(PlaceOrderError::LoginRequired));
        assert!(orders.all().is_empty());
    }

    #[tokio::test]
    async fn insufficient_balance_leaves_no_trace() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        let user = UserId::new();
        orders.set_balance(user, 50);

        let result = service(orders.clone(), &["TP00000001"])
            .execute(wallet(Some(user)))
            .await;

        assert_eq!(result, Err(PlaceOrderError::InsufficientBalance));
        assert_eq!(orders.balance_of(user), Some(50));
        assert!(orders.all().is_empty());
    }

    #[tokio::test]
    async fn unknown_package_is_reported_first() {
        let request = PlaceOrderRequest::new(None, 42, "123456789", "wallet", None, None).unwrap();

        let result = service(InMemoryOrders::default(), &["TP00000001"])
            .execute(request)
            .await;

        assert_eq!(result, Err(PlaceOrderError::PackageNotFound));
    }

    #[tokio::test]
    async fn manual_guest_order_is_pending_with_evidence() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");

        let placed = service(orders.clone(), &["TP00000007"])
            .execute(manual())
            .await
            .unwrap();

        let stored = orders.all();
        assert_eq!(placed.id, stored[0].id);
        assert_eq!(stored[0].user_id, None);
        assert_eq!(stored[0].payment_method, "nagad");
        assert_eq!(stored[0].transaction_id.as_deref(), Some("TX9"));
        assert_eq!(stored[0].contact_number.as_deref(), Some("01812345678"));
    }

    #[tokio::test]
    async fn retries_on_code_collision() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        let svc = service(orders.clone(), &["TP00000001", "TP00000001", "TP00000002"]);

        let first = svc.execute(manual()).await.unwrap();
        let second = svc.execute(manual()).await.unwrap();

        assert_eq!(first.order_code.as_str(), "TP00000001");
        assert_eq!(second.order_code.as_str(), "TP00000002");
    }

    #[tokio::test]
    async fn collision_retries_do_not_double_debit() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        let user = UserId::new();
        orders.set_balance(user, 250);
        let svc = service(orders.clone(), &["TP00000001", "TP00000001", "TP00000002"]);

        svc.execute(wallet(Some(user))).await.unwrap();
        svc.execute(wallet(Some(user))).await.unwrap();

        assert_eq!(orders.balance_of(user), Some(50));
    }

    #[tokio::test]
    async fn gives_up_after_bounded_attempts() {
        let orders = InMemoryOrders::with_package(1, "115 Diamond");
        let svc = service(orders.clone(), &["TP00000001"]);
        svc.execute(manual()).await.unwrap();

        let result = svc.execute(manual()).await;

        assert_eq!(result, Err(PlaceOrderError::OrderCodeExhausted));
        assert_eq!(orders.all().len(), 1);
    }
}
