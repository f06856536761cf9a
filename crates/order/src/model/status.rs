use serde::{Deserialize, Serialize};
use shared::lifecycle::{LifecycleStatus, StatusDisplay};
use std::fmt;

/// Order fulfilment status. Progression is strictly forward, one step at a
/// time; cancellation is reachable from any non-terminal state and absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

const ALL: [OrderStatus; 6] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LifecycleStatus for OrderStatus {
    fn all() -> &'static [Self] {
        &ALL
    }

    fn display(&self) -> StatusDisplay {
        match self {
            OrderStatus::Pending => StatusDisplay {
                label: "Pending",
                color: "#FF9800",
            },
            OrderStatus::Confirmed => StatusDisplay {
                label: "Confirmed",
                color: "#2196F3",
            },
            OrderStatus::Processing => StatusDisplay {
                label: "Processing",
                color: "#9C27B0",
            },
            OrderStatus::Shipped => StatusDisplay {
                label: "Shipped",
                color: "#00BCD4",
            },
            OrderStatus::Delivered => StatusDisplay {
                label: "Delivered",
                color: "#4CAF50",
            },
            OrderStatus::Cancelled => StatusDisplay {
                label: "Cancelled",
                color: "#F44336",
            },
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    fn can_transition_to(&self, next: &Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, Processing)
                | (Processing, Shipped)
                | (Shipped, Delivered)
                | (Pending, Cancelled)
                | (Confirmed, Cancelled)
                | (Processing, Cancelled)
                | (Shipped, Cancelled)
        )
    }
}
