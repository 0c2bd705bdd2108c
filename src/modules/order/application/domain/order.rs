use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{ContactNumber, OrderCode, OrderStatus, PaymentMethod};
use crate::auth::application::domain::entities::UserId;
use crate::player::application::domain::PlayerUid;

/// An order ready to be stored. `price` is the package price at this moment
/// and is never recomputed.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<UserId>,
    pub package_id: i32,
    pub player_uid: PlayerUid,
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
    pub contact_number: Option<ContactNumber>,
    pub order_code: OrderCode,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub id: i32,
    pub order_code: OrderCode,
    pub payment_method: PaymentMethod,
    pub price: i64,
}

/// An order joined with its package (and owner, where there is one).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderView {
    pub id: i32,
    /// Guest tracking code; absent on rows older than order codes.
    #[serde(rename = "order_id_string")]
    #[schema(example = "TP04718263")]
    pub order_code: Option<String>,
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub package_id: i32,
    pub package_name: String,
    #[schema(example = "123456789")]
    pub player_uid: String,
    pub status: OrderStatus,
    #[schema(example = "bkash")]
    pub payment_method: String,
    pub transaction_id: Option<String>,
    pub contact_number: Option<String>,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}
