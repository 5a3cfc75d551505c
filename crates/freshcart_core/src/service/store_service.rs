//! Storefront state service.
//!
//! # Responsibility
//! - Hold the authoritative in-memory products, cart, and orders state.
//! - Apply every state mutation and persist it before reporting success.
//! - Publish fresh snapshots to subscribed consumers after each mutation.
//!
//! # Invariants
//! - This service is the sole mutator of the three collections; memory and
//!   persisted state never diverge after a completed operation.
//! - Mutations targeting unknown ids are deliberate silent no-ops, matching
//!   the documented contract; they must not be turned into errors.
//! - Operations run to completion one at a time; there is no interleaving.

use crate::model::cart::CartItem;
use crate::model::order::{Customer, Order, OrderStatus};
use crate::model::product::{Product, ProductDraft};
use crate::repo::collection_repo::{CollectionRepository, RepoResult};
use chrono::Utc;
use log::info;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Point-in-time copy of the three collections handed to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    /// Newest first.
    pub orders: Vec<Order>,
}

type Listener = Box<dyn Fn(&StoreSnapshot)>;

/// Single source of truth for storefront state during a session.
///
/// Constructed once at startup via [`StoreService::load`] and passed by
/// reference to every consumer. Consumers read through the accessor surface
/// or a subscription; every state change goes through one of the operation
/// methods below, each of which persists the new collection before
/// returning and then publishes a fresh snapshot.
pub struct StoreService<R: CollectionRepository> {
    repo: R,
    products: Vec<Product>,
    cart: Vec<CartItem>,
    orders: Vec<Order>,
    listeners: Vec<Listener>,
}

impl<R: CollectionRepository> StoreService<R> {
    /// Loads all three collections from the store exactly once.
    ///
    /// First run seeds the catalog (see
    /// [`CollectionRepository::load_products`]); cart and orders default to
    /// empty.
    pub fn load(repo: R) -> RepoResult<Self> {
        let products = repo.load_products()?;
        let cart = repo.load_cart()?;
        let orders = repo.load_orders()?;
        Ok(Self {
            repo,
            products,
            cart,
            orders,
            listeners: Vec::new(),
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Placed orders, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Owned copy of the current state, identical to what subscribers see.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            products: self.products.clone(),
            cart: self.cart.clone(),
            orders: self.orders.clone(),
        }
    }

    /// Registers a listener and immediately feeds it the current snapshot.
    ///
    /// The listener runs again after every completed mutation. Listeners
    /// only ever observe copies; state changes must go through this
    /// service's operations.
    pub fn subscribe(&mut self, listener: impl Fn(&StoreSnapshot) + 'static) {
        let snapshot = self.snapshot();
        listener(&snapshot);
        self.listeners.push(Box::new(listener));
    }

    fn publish(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &self.listeners {
            listener(&snapshot);
        }
    }

    /// Adds a catalog product under a freshly assigned unique id.
    ///
    /// Returns the created product.
    pub fn add_product(&mut self, draft: ProductDraft) -> RepoResult<Product> {
        let product = draft.into_product(Uuid::new_v4().to_string());
        self.products.push(product.clone());
        self.repo.save_products(&self.products)?;
        self.publish();
        Ok(product)
    }

    /// Replaces the product whose id matches `updated.id`.
    ///
    /// Unknown ids leave the catalog unchanged (silent no-op); the
    /// collection is persisted either way.
    pub fn edit_product(&mut self, updated: &Product) -> RepoResult<()> {
        if let Some(existing) = self
            .products
            .iter_mut()
            .find(|product| product.id == updated.id)
        {
            *existing = updated.clone();
        }
        self.repo.save_products(&self.products)?;
        self.publish();
        Ok(())
    }

    /// Removes the matching product, if present.
    ///
    /// Never cascades into the cart: lines referencing the deleted id stay
    /// and are filtered or zero-priced by read-time consumers.
    pub fn delete_product(&mut self, id: &str) -> RepoResult<()> {
        self.products.retain(|product| product.id != id);
        self.repo.save_products(&self.products)?;
        self.publish();
        Ok(())
    }

    /// Adds `quantity` units of a product to the cart.
    ///
    /// Merges into the existing line when one exists, otherwise appends a
    /// new line; callers pass 1 for the single-item case. The id is not
    /// checked against the catalog.
    pub fn add_to_cart(&mut self, product_id: &str, quantity: u32) -> RepoResult<()> {
        match self
            .cart
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.cart.push(CartItem::new(product_id, quantity)),
        }
        self.repo.save_cart(&self.cart)?;
        self.publish();
        Ok(())
    }

    /// Drops the matching cart line, if present.
    pub fn remove_from_cart(&mut self, product_id: &str) -> RepoResult<()> {
        self.cart.retain(|item| item.product_id != product_id);
        self.repo.save_cart(&self.cart)?;
        self.publish();
        Ok(())
    }

    /// Applies a signed quantity change to the matching cart line.
    ///
    /// The result is floored at 1: this operation can shrink a line but
    /// never drop it (use [`Self::remove_from_cart`] for that). Unknown ids
    /// are a silent no-op.
    pub fn update_quantity(&mut self, product_id: &str, delta: i32) -> RepoResult<()> {
        if let Some(item) = self
            .cart
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            let next = i64::from(item.quantity).saturating_add(i64::from(delta));
            item.quantity = u32::try_from(next.max(1)).unwrap_or(u32::MAX);
        }
        self.repo.save_cart(&self.cart)?;
        self.publish();
        Ok(())
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) -> RepoResult<()> {
        self.cart.clear();
        self.repo.save_cart(&self.cart)?;
        self.publish();
        Ok(())
    }

    /// Places an order for the current cart contents.
    ///
    /// The total is computed against the current price list; cart lines
    /// whose product no longer exists contribute zero. The new order is
    /// prepended (newest first) and persisted, then the cart is cleared and
    /// persisted as part of the same logical operation. Returns the created
    /// order.
    pub fn place_order(&mut self, customer: Customer) -> RepoResult<Order> {
        let total: Decimal = self
            .cart
            .iter()
            .map(|item| {
                self.products
                    .iter()
                    .find(|product| product.id == item.product_id)
                    .map_or(Decimal::ZERO, |product| {
                        product.price * Decimal::from(item.quantity)
                    })
            })
            .sum();

        let order = Order {
            id: Uuid::new_v4().to_string(),
            items: self.cart.clone(),
            total,
            customer,
            date: Utc::now(),
            status: OrderStatus::Pending,
        };

        self.orders.insert(0, order.clone());
        self.repo.save_orders(&self.orders)?;
        info!(
            "event=order_placed module=service status=ok items={} total={}",
            order.items.len(),
            order.total
        );

        self.clear_cart()?;
        Ok(order)
    }
}
