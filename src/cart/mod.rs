mod cart;
mod line_item;
mod store;

// Pure cart state
pub use cart::Cart;
pub use line_item::LineItem;

// Persisted store
pub use store::CartStore;
