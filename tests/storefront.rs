//! End-to-end walk: browse the shelf, fill a file-backed cart, check
//! out, place the order.

mod support;

use bookstall::{
    promo_discount, sample_catalog, CartStore, CheckoutError, CheckoutFlow, CheckoutStep,
    ContactInfo, FileStorage, FilterState, PaymentMethod, ShippingMethod, SortKey,
};
use support::{contact, shipping};

#[test]
fn a_full_purchase_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let cart_path = dir.path().join("cart.json");
    let catalog = sample_catalog();

    // Browse for sci-fi, cheapest first, and pick the top hit.
    let filters = FilterState {
        category: "scifi".parse().ok(),
        sort: SortKey::parse("price-low"),
        ..FilterState::default()
    };
    let picks = filters.apply(&catalog);
    assert_eq!(picks[0].title, "Project Hail Mary");

    // First session: two copies of Dune.
    {
        let mut store = CartStore::new(FileStorage::new(&cart_path));
        let dune = catalog.find_by_id(11u32).unwrap();
        store.add_item(dune).unwrap();
        store.add_item(dune).unwrap();
    }

    // Second session: reload from disk and check out.
    let mut store = CartStore::new(FileStorage::new(&cart_path));
    assert_eq!(store.item_count(), 2);
    assert!((store.total() - 41.98).abs() < 1e-9);

    let mut flow = CheckoutFlow::begin(&store).unwrap();

    // A bad email blocks the contact step until fixed.
    flow.set_contact(ContactInfo {
        email: "avery_at_example.com".to_string(),
        ..contact()
    });
    assert!(flow.advance().is_err());
    assert_eq!(flow.step(), CheckoutStep::Contact);

    flow.set_contact(contact());
    assert_eq!(flow.advance().unwrap(), CheckoutStep::Shipping);
    flow.set_shipping(shipping());
    assert_eq!(flow.advance().unwrap(), CheckoutStep::Payment);
    flow.select_payment(PaymentMethod::Stripe);

    // Promo codes validate but never touch the totals.
    assert_eq!(promo_discount(" book10 "), Some(0.10));
    assert_eq!(promo_discount("BOGUS"), None);

    // 41.98 clears the free-shipping threshold.
    let summary = flow.summary(&store);
    assert_eq!(summary.shipping, 0.0);
    assert!((summary.tax - 3.3584).abs() < 1e-9);
    assert!((summary.total - 45.3384).abs() < 1e-9);

    let order = flow.place_order(&mut store).unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity.get(), 2);
    assert_eq!(order.customer.email, "avery@example.com");
    assert!((order.summary.total - 45.3384).abs() < 1e-9);

    // The cart cleared in memory and on disk.
    assert_eq!(store.item_count(), 0);
    assert_eq!(std::fs::read_to_string(&cart_path).unwrap(), "[]");
    assert!(CartStore::new(FileStorage::new(&cart_path)).is_empty());
}

#[test]
fn express_shipping_overrides_the_free_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = sample_catalog();

    let mut store = CartStore::new(FileStorage::new(dir.path().join("cart.json")));
    let dune = catalog.find_by_id(11u32).unwrap();
    store.add_item(dune).unwrap();
    store.add_item(dune).unwrap();

    let mut flow = CheckoutFlow::begin(&store).unwrap();
    flow.set_shipping_method(ShippingMethod::Express);
    let summary = flow.summary(&store);
    assert!((summary.shipping - 12.99).abs() < 1e-9);
    assert!((summary.total - (41.98 + 12.99 + 3.3584)).abs() < 1e-9);
}

#[test]
fn checkout_never_starts_on_an_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::new(FileStorage::new(dir.path().join("cart.json")));
    assert!(matches!(
        CheckoutFlow::begin(&store),
        Err(CheckoutError::EmptyCart)
    ));
}

#[cfg(feature = "emitter")]
#[test]
fn cart_notifications_reach_emitter_subscribers() {
    use bookstall::{EmitterNotifier, EventEmitter, InMemoryStorage, CART_NOTIFICATION_EVENT};
    use std::sync::mpsc;
    use std::time::Duration;

    let mut emitter = EventEmitter::new();
    let (tx, rx) = mpsc::channel::<String>();
    emitter.on(CART_NOTIFICATION_EVENT, move |message: String| {
        tx.send(message).unwrap();
    });

    let catalog = sample_catalog();
    let mut store =
        CartStore::with_notifier(InMemoryStorage::new(), EmitterNotifier::new(emitter));
    store.add_item(catalog.find_by_id(11u32).unwrap()).unwrap();

    let received = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(received, "\"Dune\" added to cart");
}
