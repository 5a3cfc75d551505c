//! Collection store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable load/save APIs over the `collections` key-value table.
//! - Seed the product catalog with the built-in default on first run.
//!
//! # Invariants
//! - Loads treat a missing key as first-run state, not a fault.
//! - Malformed persisted JSON surfaces as `RepoError::Corrupt` instead of
//!   being masked; no retry or recovery policy exists.

use crate::db::DbError;
use crate::model::cart::CartItem;
use crate::model::order::Order;
use crate::model::product::Product;
use crate::repo::seed::default_catalog;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PRODUCTS_KEY: &str = "freshcart_products";
const CART_KEY: &str = "freshcart_cart";
const ORDERS_KEY: &str = "freshcart_orders";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for collection load/save operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The JSON document under `key` could not be (de)serialized.
    Corrupt {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { key, source } => {
                write!(f, "corrupt persisted collection `{key}`: {source}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable store for the three storefront collections.
///
/// Each collection lives under its own fixed key and is loaded and saved as
/// one unit. Saves are full-snapshot overwrites, never deltas.
pub trait CollectionRepository {
    /// Returns the stored catalog, seeding the built-in default on first
    /// run (the seed is persisted before it is returned).
    fn load_products(&self) -> RepoResult<Vec<Product>>;
    fn save_products(&self, products: &[Product]) -> RepoResult<()>;
    /// Returns the stored cart, or empty when none exists yet.
    fn load_cart(&self) -> RepoResult<Vec<CartItem>>;
    fn save_cart(&self, cart: &[CartItem]) -> RepoResult<()>;
    /// Returns stored orders as saved (newest first), or empty.
    fn load_orders(&self) -> RepoResult<Vec<Order>>;
    fn save_orders(&self, orders: &[Order]) -> RepoResult<()>;
}

/// SQLite-backed collection store.
pub struct SqliteCollectionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCollectionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn load_collection<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> RepoResult<Option<Vec<T>>> {
        let document = self
            .conn
            .query_row(
                "SELECT value FROM collections WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        match document {
            Some(document) => {
                let collection = serde_json::from_str(&document)
                    .map_err(|source| RepoError::Corrupt { key, source })?;
                Ok(Some(collection))
            }
            None => Ok(None),
        }
    }

    fn save_collection<T: Serialize>(&self, key: &'static str, collection: &[T]) -> RepoResult<()> {
        let document = serde_json::to_string(collection)
            .map_err(|source| RepoError::Corrupt { key, source })?;

        self.conn.execute(
            "INSERT INTO collections (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, document],
        )?;

        Ok(())
    }
}

impl CollectionRepository for SqliteCollectionRepository<'_> {
    fn load_products(&self) -> RepoResult<Vec<Product>> {
        if let Some(products) = self.load_collection(PRODUCTS_KEY)? {
            return Ok(products);
        }

        // First run: persist the seed so later loads and saves operate on
        // the same stored snapshot.
        let seeded = default_catalog();
        self.save_collection(PRODUCTS_KEY, &seeded)?;
        info!(
            "event=catalog_seeded module=repo status=ok products={}",
            seeded.len()
        );
        Ok(seeded)
    }

    fn save_products(&self, products: &[Product]) -> RepoResult<()> {
        self.save_collection(PRODUCTS_KEY, products)
    }

    fn load_cart(&self) -> RepoResult<Vec<CartItem>> {
        Ok(self.load_collection(CART_KEY)?.unwrap_or_default())
    }

    fn save_cart(&self, cart: &[CartItem]) -> RepoResult<()> {
        self.save_collection(CART_KEY, cart)
    }

    fn load_orders(&self) -> RepoResult<Vec<Order>> {
        Ok(self.load_collection(ORDERS_KEY)?.unwrap_or_default())
    }

    fn save_orders(&self, orders: &[Order]) -> RepoResult<()> {
        self.save_collection(ORDERS_KEY, orders)
    }
}
