//! Catalog product model.
//!
//! # Responsibility
//! - Define the canonical product record and its admin-facing draft shape.
//!
//! # Invariants
//! - `id` is stable and never reused for another product.
//! - `price` is positive; `original_price` above `price` means a discount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog product.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Cart lines hold these as weak references: a stored id may outlive its
/// product.
pub type ProductId = String;

/// Fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Fruits,
    Vegetables,
    Dairy,
    Staples,
    Spices,
    Snacks,
    Beverages,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 7] = [
        Self::Fruits,
        Self::Vegetables,
        Self::Dairy,
        Self::Staples,
        Self::Spices,
        Self::Snacks,
        Self::Beverages,
    ];

    /// Human-readable category label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
            Self::Dairy => "Dairy",
            Self::Staples => "Staples",
            Self::Spices => "Spices",
            Self::Snacks => "Snacks",
            Self::Beverages => "Beverages",
        }
    }
}

/// Canonical catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable id referenced by cart lines and admin edits.
    pub id: ProductId,
    pub name: String,
    /// Current selling price.
    pub price: Decimal,
    /// Pre-discount price; a discount exists when greater than `price`.
    pub original_price: Option<Decimal>,
    pub category: Category,
    /// Image reference (URL or bundled asset path).
    pub image: String,
    pub description: String,
    /// Free-form nutrition summary shown on the detail view.
    pub nutrition: String,
    /// Unit label, e.g. `1 kg` or `500 g`.
    pub unit: String,
    /// Home-page highlight flag.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Returns whether a discount applies (`original_price > price`).
    pub fn is_discounted(&self) -> bool {
        self.original_price
            .is_some_and(|original| original > self.price)
    }
}

/// Input shape for admin product creation: a [`Product`] without its id.
///
/// Field presence/validity is the caller's concern; the core assigns the id
/// and stores the draft as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub category: Category,
    pub image: String,
    pub description: String,
    pub nutrition: String,
    pub unit: String,
    #[serde(default)]
    pub featured: bool,
}

impl ProductDraft {
    /// Materializes a catalog product under the given id.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            original_price: self.original_price,
            category: self.category,
            image: self.image,
            description: self.description,
            nutrition: self.nutrition,
            unit: self.unit,
            featured: self.featured,
        }
    }
}
