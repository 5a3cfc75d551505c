use freshcart_core::db::open_db_in_memory;
use freshcart_core::{
    CartItem, Category, CollectionRepository, Customer, Product, SqliteCollectionRepository,
    StoreService, StoreSnapshot,
};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn subscribe_fires_immediately_with_the_current_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(&conn, &[test_product("p1", 100)]);
    store.add_to_cart("p1", 2).unwrap();

    let seen = Rc::new(RefCell::new(Vec::<StoreSnapshot>::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    let snapshots = seen.borrow();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].cart, vec![CartItem::new("p1", 2)]);
    assert_eq!(snapshots[0].products.len(), 1);
}

#[test]
fn every_completed_mutation_publishes_a_fresh_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(&conn, &[test_product("p1", 100)]);

    let seen = Rc::new(RefCell::new(Vec::<StoreSnapshot>::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    store.add_to_cart("p1", 1).unwrap();
    store.update_quantity("p1", 2).unwrap();
    store.remove_from_cart("p1").unwrap();

    let snapshots = seen.borrow();
    // Initial publish plus one per mutation.
    assert_eq!(snapshots.len(), 4);
    assert_eq!(snapshots[1].cart, vec![CartItem::new("p1", 1)]);
    assert_eq!(snapshots[2].cart, vec![CartItem::new("p1", 3)]);
    assert!(snapshots[3].cart.is_empty());
}

#[test]
fn place_order_publishes_the_final_state_of_the_operation() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(&conn, &[test_product("p1", 100)]);
    store.add_to_cart("p1", 2).unwrap();

    let seen = Rc::new(RefCell::new(Vec::<StoreSnapshot>::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    store
        .place_order(Customer {
            name: "A".to_string(),
            phone: "B".to_string(),
            address: "C".to_string(),
        })
        .unwrap();

    let snapshots = seen.borrow();
    let last = snapshots.last().unwrap();
    assert!(last.cart.is_empty());
    assert_eq!(last.orders.len(), 1);
    assert_eq!(last.orders[0].total, Decimal::from(200));
}

#[test]
fn all_subscribers_receive_each_publish() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_with_catalog(&conn, &[test_product("p1", 100)]);

    let first = Rc::new(RefCell::new(0_u32));
    let second = Rc::new(RefCell::new(0_u32));
    let first_sink = Rc::clone(&first);
    let second_sink = Rc::clone(&second);
    store.subscribe(move |_| *first_sink.borrow_mut() += 1);
    store.subscribe(move |_| *second_sink.borrow_mut() += 1);

    store.add_to_cart("p1", 1).unwrap();

    assert_eq!(*first.borrow(), 2);
    assert_eq!(*second.borrow(), 2);
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
        category: Category::Beverages,
        image: String::new(),
        description: String::new(),
        nutrition: String::new(),
        unit: "1 kg".to_string(),
        featured: false,
    }
}
