//! Cart line model.

use crate::model::product::ProductId;
use serde::{Deserialize, Serialize};

/// One cart line: a weak product reference plus a quantity.
///
/// The referenced product may be deleted from the catalog after the line is
/// created; such stale lines stay in the cart and are filtered or
/// zero-priced by read-time consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    /// Always >= 1; dropping a line goes through removal, not quantity 0.
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}
