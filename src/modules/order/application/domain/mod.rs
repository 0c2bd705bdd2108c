pub mod contact_number;
pub mod order;
pub mod order_code;
pub mod order_status;
pub mod payment_method;

pub use contact_number::{ContactNumber, InvalidContactNumber};
pub use order::{NewOrder, OrderView, PlacedOrder};
pub use order_code::OrderCode;
pub use order_status::{OrderStatus, UnknownStatus};
pub use payment_method::{ManualChannel, PaymentMethod, UnsupportedPaymentMethod};
