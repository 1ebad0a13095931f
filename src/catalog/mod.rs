mod catalog;
mod filter_state;
mod price_band;
mod query;
mod sample;
mod sort_key;

pub use catalog::Catalog;
pub use filter_state::FilterState;
pub use price_band::{ParsePriceBandError, PriceBand};
pub use query::{filter_by_price, search_books, sort_books};
pub use sample::sample_catalog;
pub use sort_key::SortKey;
