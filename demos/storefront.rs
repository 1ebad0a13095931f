use bookstall::{
    promo_discount, sample_catalog, CartStore, CheckoutFlow, ContactInfo, FileStorage,
    FilterState, LogNotifier, PaymentMethod, ShippingInfo, ShippingMethod, SortKey,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the built-in catalog
    let catalog = sample_catalog();
    println!("Catalog holds {} books", catalog.len());

    // The featured shelf
    println!("\nFeatured:");
    for book in catalog.featured() {
        println!(
            "  {} {} by {} (${:.2})",
            book.cover, book.title, book.author, book.price
        );
    }

    // Browse sci-fi between $15 and $20, cheapest first
    let mut filters = FilterState::new();
    filters.category = "scifi".parse().ok();
    filters.price = "15-20".parse().unwrap_or_default();
    filters.sort = SortKey::parse("price-low");
    println!("\nSci-fi from $15 to $20:");
    for book in filters.apply(&catalog) {
        println!("  {} {} (${:.2})", book.cover, book.title, book.price);
    }

    // A cart persisted to disk, announcing adds on stdout
    let storage = FileStorage::new(std::env::temp_dir().join("bookstall-cart.json"));
    println!("\nCart file: {}", storage.path().display());
    let mut store = CartStore::with_notifier(storage, LogNotifier::new());

    let dune = catalog.find_by_id(11u32).ok_or("Dune is out of stock")?;
    let hail_mary = catalog.find_by_id(3u32).ok_or("Project Hail Mary is out of stock")?;
    println!();
    store.add_item(dune)?;
    store.add_item(dune)?;
    store.add_item(hail_mary)?;

    println!(
        "\nCart: {} copies across {} titles, subtotal ${:.2}",
        store.item_count(),
        store.items().len(),
        store.total()
    );

    // Walk the checkout steps
    let mut flow = CheckoutFlow::begin(&store)?;
    flow.set_contact(ContactInfo {
        first_name: "Avery".to_string(),
        last_name: "Quill".to_string(),
        email: "avery@example.com".to_string(),
        phone: None,
    });
    flow.advance()?;
    flow.set_shipping(ShippingInfo {
        address: "7 Chapter Lane".to_string(),
        apartment: None,
        city: "Portland".to_string(),
        state: "OR".to_string(),
        zip: "97201".to_string(),
        country: "United States".to_string(),
    });
    flow.advance()?;
    flow.select_payment(PaymentMethod::Stripe);

    // A promo code validates but the totals stay as computed
    if let Some(rate) = promo_discount("BOOK10") {
        println!("\nPromo BOOK10 accepted: {}% off", rate * 100.0);
    }

    let summary = flow.summary(&store);
    println!("\nStandard shipping:");
    println!("  Subtotal ${:.2}", summary.subtotal);
    println!("  Shipping ${:.2}", summary.shipping);
    println!("  Tax      ${:.2}", summary.tax);
    println!("  Total    ${:.2}", summary.total);

    flow.set_shipping_method(ShippingMethod::Express);
    let summary = flow.summary(&store);
    println!("Express shipping brings the total to ${:.2}", summary.total);

    // Place the order; the cart clears once the snapshot is taken
    let order = flow.place_order(&mut store)?;
    println!(
        "\nOrder placed for {} {}: {} titles, ${:.2} via {}",
        order.customer.first_name,
        order.customer.last_name,
        order.items.len(),
        order.summary.total,
        order.payment
    );
    println!("Cart now holds {} items", store.item_count());

    Ok(())
}
