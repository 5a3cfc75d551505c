//! Read-only pricing and checkout derivations.
//!
//! # Responsibility
//! - Derive display values (discount percentage, joined cart lines,
//!   checkout totals) from the published collections.
//!
//! # Invariants
//! - Nothing here mutates state or touches storage.
//! - Stale cart references are dropped, never errors.

use crate::model::cart::CartItem;
use crate::model::order::Order;
use crate::model::product::Product;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Order value above which delivery is free (Rs).
pub const FREE_DELIVERY_THRESHOLD: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Flat delivery fee at or below the threshold (Rs).
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Rounded discount percentage, when one applies.
///
/// `None` when there is no `original_price` or it does not exceed the
/// current price.
pub fn discount_percent(product: &Product) -> Option<u32> {
    let original = product.original_price?;
    if original <= product.price || original.is_zero() {
        return None;
    }
    let percent = (original - product.price) / original * Decimal::ONE_HUNDRED;
    percent.round().to_u32()
}

/// One cart line joined to its catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line total at the product's current price.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Joins cart entries to catalog products, dropping stale references.
pub fn cart_lines(products: &[Product], cart: &[CartItem]) -> Vec<CartLine> {
    cart.iter()
        .filter_map(|item| {
            products
                .iter()
                .find(|product| product.id == item.product_id)
                .map(|product| CartLine {
                    product: product.clone(),
                    quantity: item.quantity,
                })
        })
        .collect()
}

/// Sum of line totals at current prices.
pub fn subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

/// Delivery fee for a given subtotal.
pub fn delivery_fee(subtotal: Decimal) -> Decimal {
    if subtotal > FREE_DELIVERY_THRESHOLD {
        Decimal::ZERO
    } else {
        DELIVERY_FEE
    }
}

/// Subtotal plus delivery fee.
pub fn checkout_total(subtotal: Decimal) -> Decimal {
    subtotal + delivery_fee(subtotal)
}

/// Lifetime sales volume across all placed orders.
pub fn total_sales(orders: &[Order]) -> Decimal {
    orders.iter().map(|order| order.total).sum()
}
