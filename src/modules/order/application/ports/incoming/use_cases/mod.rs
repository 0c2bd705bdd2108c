pub mod guest_order_history;
pub mod list_all_orders;
pub mod list_user_orders;
pub mod place_order;
pub mod track_order;
pub mod transition_order_status;

pub use guest_order_history::{GuestOrderHistoryUseCase, MAX_GUEST_CODES};
pub use list_all_orders::ListAllOrdersUseCase;
pub use list_user_orders::ListUserOrdersUseCase;
pub use place_order::{PlaceOrderError, PlaceOrderRequest, PlaceOrderRequestError, PlaceOrderUseCase};
pub use track_order::TrackOrderUseCase;
pub use transition_order_status::{TransitionOrderStatusError, TransitionOrderStatusUseCase};

/// Failure shared by the read-only order listings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListOrdersError {
    #[error("Query error: {0}")]
    QueryError(String),
}
