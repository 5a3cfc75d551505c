//! Order model.
//!
//! # Responsibility
//! - Define the placed-order record and its checkout input shapes.
//!
//! # Invariants
//! - `items` and `total` are snapshots taken at placement time; later
//!   catalog or price changes never alter an existing order.
//! - The core only ever produces `OrderStatus::Pending`.

use crate::model::cart::CartItem;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stable identifier for a placed order.
pub type OrderId = String;

/// Order lifecycle state.
///
/// `Delivered` and `Cancelled` are representable for display and external
/// administrative transitions, but no operation in this crate produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Human-readable status label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Checkout contact and delivery details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Immutable record of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Cart snapshot at placement time. Lines may reference products that
    /// were deleted later; display joins tolerate that.
    pub items: Vec<CartItem>,
    /// Total computed against the price list at placement time.
    pub total: Decimal,
    pub customer: Customer,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
}
