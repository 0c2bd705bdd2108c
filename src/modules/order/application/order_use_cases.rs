use std::sync::Arc;

use crate::order::application::ports::incoming::use_cases::{
    GuestOrderHistoryUseCase, ListAllOrdersUseCase, ListUserOrdersUseCase, PlaceOrderUseCase,
    TrackOrderUseCase, TransitionOrderStatusUseCase,
};

#[derive(Clone)]
pub struct OrderUseCases {
    pub place: Arc<dyn PlaceOrderUseCase + Send + Sync>,
    pub transition_status: Arc<dyn TransitionOrderStatusUseCase + Send + Sync>,
    pub track: Arc<dyn TrackOrderUseCase + Send + Sync>,
    pub guest_history: Arc<dyn GuestOrderHistoryUseCase + Send + Sync>,
    pub list_for_user: Arc<dyn ListUserOrdersUseCase + Send + Sync>,
    pub list_all: Arc<dyn ListAllOrdersUseCase + Send + Sync>,
}
