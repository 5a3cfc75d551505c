use freshcart_core::db::open_db_in_memory;
use freshcart_core::{
    CartItem, Category, CollectionRepository, Product, ProductDraft, SqliteCollectionRepository,
    StoreService,
};
use rust_decimal::Decimal;
use std::collections::HashSet;

#[test]
fn add_product_assigns_id_and_appends() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(&conn, &[test_product("p1", 100)]);

    let created = store.add_product(test_draft("Fresh Mangoes", 450)).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Fresh Mangoes");
    assert_eq!(created.price, Decimal::from(450));

    let products = store.products();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1], created);

    let repo = SqliteCollectionRepository::new(&conn);
    assert_eq!(repo.load_products().unwrap(), products);
}

#[test]
fn added_product_ids_are_unique() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(&conn, &[]);

    for _ in 0..20 {
        store.add_product(test_draft("Repeat", 10)).unwrap();
    }

    let ids: HashSet<_> = store
        .products()
        .iter()
        .map(|product| product.id.clone())
        .collect();
    assert_eq!(ids.len(), 20);
}

#[test]
fn edit_product_replaces_the_matching_record() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(
        &conn,
        &[test_product("p1", 100), test_product("p2", 50)],
    );

    let mut updated = test_product("p1", 100);
    updated.name = "Renamed".to_string();
    updated.price = Decimal::from(120);
    updated.original_price = Some(Decimal::from(150));
    store.edit_product(&updated).unwrap();

    assert_eq!(store.products()[0], updated);
    assert_eq!(store.products()[1], test_product("p2", 50));

    let repo = SqliteCollectionRepository::new(&conn);
    assert_eq!(repo.load_products().unwrap()[0], updated);
}

#[test]
fn edit_product_with_unknown_id_is_a_silent_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(&conn, &[test_product("p1", 100)]);

    let ghost = test_product("ghost", 10);
    store.edit_product(&ghost).unwrap();

    assert_eq!(store.products(), [test_product("p1", 100)]);
}

#[test]
fn delete_product_removes_exactly_the_matching_record() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(
        &conn,
        &[
            test_product("p1", 100),
            test_product("p2", 50),
            test_product("p3", 75),
        ],
    );

    store.delete_product("p2").unwrap();

    assert_eq!(
        store.products(),
        [test_product("p1", 100), test_product("p3", 75)]
    );
}

#[test]
fn delete_product_with_unknown_id_is_a_silent_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(&conn, &[test_product("p1", 100)]);

    store.delete_product("missing").unwrap();

    assert_eq!(store.products(), [test_product("p1", 100)]);
}

#[test]
fn delete_product_leaves_cart_lines_untouched() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(&conn, &[test_product("p1", 100)]);

    store.add_to_cart("p1", 2).unwrap();
    store.delete_product("p1").unwrap();

    // The stale line stays; read-time consumers filter or zero-price it.
    assert!(store.products().is_empty());
    assert_eq!(store.cart(), [CartItem::new("p1", 2)]);

    let repo = SqliteCollectionRepository::new(&conn);
    assert_eq!(repo.load_cart().unwrap(), vec![CartItem::new("p1", 2)]);
}

fn store_with_catalog<'conn>(
    conn: &'conn rusqlite::Connection,
    products: &[Product],
) -> StoreService<SqliteCollectionRepository<'conn>> {
    let repo = SqliteCollectionRepository::new(conn);
    repo.save_products(products).unwrap();
    StoreService::load(SqliteCollectionRepository::new(conn)).unwrap()
}

fn test_product(id: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        price: Decimal::from(price),
        original_price: None,
        category: Category::Vegetables,
        image: String::new(),
        description: String::new(),
        nutrition: String::new(),
        unit: "1 kg".to_string(),
        featured: false,
    }
}

fn test_draft(name: &str, price: i64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: Decimal::from(price),
        original_price: None,
        category: Category::Fruits,
        image: "https://picsum.photos/400".to_string(),
        description: String::new(),
        nutrition: String::new(),
        unit: "1 kg".to_string(),
        featured: false,
    }
}
