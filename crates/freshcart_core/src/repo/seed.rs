//! Built-in default catalog, written to storage on first run.

use crate::model::product::{Category, Product};
use rust_decimal::Decimal;

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    /// Price in whole rupees.
    price: i64,
    /// Pre-discount price in whole rupees, when the item is on offer.
    original_price: Option<i64>,
    category: Category,
    description: &'static str,
    nutrition: &'static str,
    unit: &'static str,
    featured: bool,
}

const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        id: "seed-apples",
        name: "Fresh Apples",
        price: 220,
        original_price: Some(260),
        category: Category::Fruits,
        description: "Crisp red apples picked at peak ripeness.",
        nutrition: "Rich in fiber and vitamin C.",
        unit: "1 kg",
        featured: true,
    },
    SeedProduct {
        id: "seed-bananas",
        name: "Bananas",
        price: 150,
        original_price: None,
        category: Category::Fruits,
        description: "Sweet ripe bananas, ideal for breakfast or shakes.",
        nutrition: "Good source of potassium and vitamin B6.",
        unit: "1 dozen",
        featured: false,
    },
    SeedProduct {
        id: "seed-tomatoes",
        name: "Tomatoes",
        price: 90,
        original_price: None,
        category: Category::Vegetables,
        description: "Juicy vine tomatoes for salads and curries.",
        nutrition: "Contains lycopene and vitamin A.",
        unit: "1 kg",
        featured: false,
    },
    SeedProduct {
        id: "seed-spinach",
        name: "Fresh Spinach",
        price: 60,
        original_price: None,
        category: Category::Vegetables,
        description: "Tender leaf spinach, washed and bundled.",
        nutrition: "High in iron, folate and vitamin K.",
        unit: "1 bunch",
        featured: false,
    },
    SeedProduct {
        id: "seed-milk",
        name: "Full Cream Milk",
        price: 230,
        original_price: None,
        category: Category::Dairy,
        description: "Pasteurized full cream milk from local farms.",
        nutrition: "Calcium and protein rich.",
        unit: "1.5 L",
        featured: true,
    },
    SeedProduct {
        id: "seed-eggs",
        name: "Farm Eggs",
        price: 320,
        original_price: Some(350),
        category: Category::Dairy,
        description: "Free-range brown eggs collected daily.",
        nutrition: "Complete protein with vitamin D.",
        unit: "1 dozen",
        featured: false,
    },
    SeedProduct {
        id: "seed-basmati",
        name: "Basmati Rice",
        price: 1250,
        original_price: Some(1400),
        category: Category::Staples,
        description: "Long-grain aged basmati with full aroma.",
        nutrition: "Energy-dense complex carbohydrates.",
        unit: "5 kg",
        featured: true,
    },
    SeedProduct {
        id: "seed-atta",
        name: "Whole Wheat Atta",
        price: 950,
        original_price: None,
        category: Category::Staples,
        description: "Stone-ground whole wheat flour for soft rotis.",
        nutrition: "Whole grain fiber and B vitamins.",
        unit: "10 kg",
        featured: false,
    },
    SeedProduct {
        id: "seed-chilli",
        name: "Red Chilli Powder",
        price: 180,
        original_price: None,
        category: Category::Spices,
        description: "Sun-dried red chillies, ground fresh.",
        nutrition: "Capsaicin and vitamin E.",
        unit: "200 g",
        featured: false,
    },
    SeedProduct {
        id: "seed-turmeric",
        name: "Turmeric Powder",
        price: 140,
        original_price: None,
        category: Category::Spices,
        description: "Pure ground turmeric with deep color.",
        nutrition: "Curcumin with antioxidant properties.",
        unit: "200 g",
        featured: false,
    },
    SeedProduct {
        id: "seed-chana",
        name: "Roasted Chana",
        price: 120,
        original_price: None,
        category: Category::Snacks,
        description: "Crunchy roasted chickpeas, lightly salted.",
        nutrition: "Plant protein and fiber.",
        unit: "250 g",
        featured: false,
    },
    SeedProduct {
        id: "seed-green-tea",
        name: "Green Tea",
        price: 350,
        original_price: Some(420),
        category: Category::Beverages,
        description: "Whole-leaf green tea, 50 bag box.",
        nutrition: "Antioxidant catechins, zero calories.",
        unit: "1 box",
        featured: true,
    },
];

/// Returns the default catalog written on first run.
///
/// Covers every [`Category`], including discounted and featured entries so
/// consumer views have realistic data before any admin edits.
pub fn default_catalog() -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            price: Decimal::from(seed.price),
            original_price: seed.original_price.map(Decimal::from),
            category: seed.category,
            image: format!("https://picsum.photos/seed/{}/400", seed.id),
            description: seed.description.to_string(),
            nutrition: seed.nutrition.to_string(),
            unit: seed.unit.to_string(),
            featured: seed.featured,
        })
        .collect()
}
