pub mod guest_order_history_service;
pub mod list_all_orders_service;
pub mod list_user_orders_service;
pub mod place_order_service;
pub mod track_order_service;
pub mod transition_order_status_service;

pub use guest_order_history_service::GuestOrderHistoryService;
pub use list_all_orders_service::ListAllOrdersService;
pub use list_user_orders_service::ListUserOrdersService;
pub use place_order_service::PlaceOrderService;
pub use track_order_service::TrackOrderService;
pub use transition_order_status_service::TransitionOrderStatusService;
