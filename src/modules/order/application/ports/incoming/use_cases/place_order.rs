use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::{
    ContactNumber, InvalidContactNumber, PaymentMethod, PlacedOrder, UnsupportedPaymentMethod,
};
use crate::player::application::domain::{InvalidPlayerUid, PlayerUid};

// ========================= Place Order Request =========================
/// A checked order submission. The owner comes from the session, never
/// from the body.
#[derive(Debug, Clone)]
pub struct PlaceOrderRequest {
    owner: Option<UserId>,
    package_id: i32,
    player_uid: PlayerUid,
    payment_method: PaymentMethod,
    transaction_id: Option<String>,
    contact_number: Option<ContactNumber>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaceOrderRequestError {
    #[error(transparent)]
    InvalidPlayerUid(#[from] InvalidPlayerUid),

    #[error(transparent)]
    UnsupportedPaymentMethod(#[from] UnsupportedPaymentMethod),

    #[error("Transaction ID is required for manual payments")]
    MissingTransactionId,

    #[error("Transaction ID must be at most 100 characters")]
    TransactionIdTooLong,

    #[error("Contact number is required for manual payments")]
    MissingContactNumber,

    #[error(transparent)]
    InvalidContactNumber(#[from] InvalidContactNumber),
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl PlaceOrderRequest {
    pub fn new(
        owner: Option<UserId>,
        package_id: i32,
        player_uid: &str,
        payment_method: &str,
        transaction_id: Option<String>,
        contact_number: Option<String>,
    ) -> Result<Self, PlaceOrderRequestError> {
        let player_uid = PlayerUid::parse(player_uid)?;
        let payment_method: PaymentMethod = payment_method.parse()?;

        let transaction_id = non_blank(transaction_id);
        if transaction_id.as_ref().is_some_and(|t| t.chars().count() > 100) {
            return Err(PlaceOrderRequestError::TransactionIdTooLong);
        }

        let contact_number = non_blank(contact_number)
            .map(|raw| ContactNumber::parse(&raw))
            .transpose()?;

        if !payment_method.is_wallet() {
            if transaction_id.is_none() {
                return Err(PlaceOrderRequestError::MissingTransactionId);
            }
            if contact_number.is_none() {
                return Err(PlaceOrderRequestError::MissingContactNumber);
            }
        }

        Ok(Self {
            owner,
            package_id,
            player_uid,
            payment_method,
            transaction_id,
            contact_number,
        })
    }

    pub fn owner(&self) -> Option<UserId> {
        self.owner
    }

    pub fn package_id(&self) -> i32 {
        self.package_id
    }

    pub fn player_uid(&self) -> &PlayerUid {
        &self.player_uid
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn contact_number(&self) -> Option<&ContactNumber> {
        self.contact_number.as_ref()
    }
}

// ========================= Place Order Error =========================
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaceOrderError {
    #[error("Package not found")]
    PackageNotFound,

    #[error("Login required for wallet payment")]
    LoginRequired,

    #[error("Insufficient wallet balance")]
    InsufficientBalance,

    #[error("User not found")]
    UserNotFound,

    #[error("Could not allocate a unique order code")]
    OrderCodeExhausted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, request: PlaceOrderRequest) -> Result<PlacedOrder, PlaceOrderError>;
}
