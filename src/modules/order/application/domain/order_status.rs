use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting delivery (and, for manual payments, verification).
    Pending,
    Complete,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Complete => "complete",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }

    /// `pending -> complete | cancelled`; terminal states never move.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Complete)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
        )
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "complete" => Ok(OrderStatus::Complete),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_moves_to_either_terminal_state() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Complete));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn terminal_states_are_final() {
        for from in [OrderStatus::Complete, OrderStatus::Cancelled] {
            assert!(from.is_terminal());
            for to in [OrderStatus::Pending, OrderStatus::Complete, OrderStatus::Cancelled] {
                assert!(!from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("Complete".parse::<OrderStatus>(), Ok(OrderStatus::Complete));
        assert_eq!(" cancelled ".parse::<OrderStatus>(), Ok(OrderStatus::Cancelled));
        assert!("shipped".parse::<OrderStatus>().is_err());
    }
}
