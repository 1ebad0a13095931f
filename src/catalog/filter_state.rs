use crate::book::{Book, Category};
use crate::catalog::catalog::Catalog;
use crate::catalog::price_band::PriceBand;
use crate::catalog::query::{filter_by_price, search_books, sort_books};
use crate::catalog::sort_key::SortKey;

/// The full set of browse controls a storefront page holds at once.
///
/// Stages always run in the same order: category, price band, search,
/// sort. Each field's resting value passes every book through, so a
/// fresh `FilterState` applied to a catalog returns the shelf as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// `None` browses every category.
    pub category: Option<Category>,
    pub price: PriceBand,
    /// Matched case-insensitively against title, author, and
    /// description. Empty means no search.
    pub search: String,
    pub sort: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        FilterState::default()
    }

    /// Resets every control to its pass-through value.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// Runs the catalog through the four stages and returns the
    /// surviving books in display order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Book> {
        let books = catalog.by_category(self.category);
        let books = filter_by_price(books, &self.price);
        let books = search_books(books, &self.search);
        sort_books(books, self.sort)
    }
}
