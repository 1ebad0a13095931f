mod book;
mod cart;
mod catalog;
mod checkout;
mod notify;
mod storage;

pub use book::{Book, BookId, Category, ParseCategoryError};
pub use cart::{Cart, CartStore, LineItem};
pub use catalog::{
    filter_by_price, sample_catalog, search_books, sort_books, Catalog, FilterState,
    ParsePriceBandError, PriceBand, SortKey,
};
pub use checkout::{
    promo_discount, CheckoutError, CheckoutFlow, CheckoutStep, ContactInfo, Order, OrderSummary,
    PaymentMethod, ShippingInfo, ShippingMethod, ValidationError, EXPRESS_SHIPPING,
    FREE_SHIPPING_THRESHOLD, STANDARD_SHIPPING, TAX_RATE,
};
pub use notify::{LogNotifier, Notifier, NullNotifier};
pub use storage::{CartStorage, FileStorage, InMemoryStorage, StorageError};

#[cfg(feature = "emitter")]
pub use notify::{EmitterNotifier, CART_NOTIFICATION_EVENT};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
