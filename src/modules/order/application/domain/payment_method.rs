use std::fmt;
use std::str::FromStr;

/// Mobile-banking channels an admin verifies by transaction id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualChannel {
    Bkash,
    Nagad,
    Rocket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Wallet,
    Manual(ManualChannel),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported payment method: {0}")]
pub struct UnsupportedPaymentMethod(pub String);

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::Manual(ManualChannel::Bkash) => "bkash",
            PaymentMethod::Manual(ManualChannel::Nagad) => "nagad",
            PaymentMethod::Manual(ManualChannel::Rocket) => "rocket",
        }
    }

    pub fn is_wallet(&self) -> bool {
        matches!(self, PaymentMethod::Wallet)
    }
}

impl FromStr for PaymentMethod {
    type Err = UnsupportedPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wallet" => Ok(PaymentMethod::Wallet),
            "bkash" => Ok(PaymentMethod::Manual(ManualChannel::Bkash)),
            "nagad" => Ok(PaymentMethod::Manual(ManualChannel::Nagad)),
            "rocket" => Ok(PaymentMethod::Manual(ManualChannel::Rocket)),
            _ => Err(UnsupportedPaymentMethod(s.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
