use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::book::{Book, BookId};
use crate::cart::line_item::LineItem;

/// The cart's in-memory state and its transitions, with no
/// persistence attached.
///
/// Serializes transparently as a bare JSON array of line items, the
/// same shape `CartStorage` documents hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Decodes a stored document. Anything that does not parse as a
    /// cart comes back as an empty one.
    pub fn from_document(document: &str) -> Self {
        serde_json::from_str(document).unwrap_or_default()
    }

    /// Encodes the cart as a storage document.
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn find(&self, id: impl Into<BookId>) -> Option<&LineItem> {
        let id = id.into();
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct titles in the cart, not copies.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one copy of `book`: bumps the existing line if the book is
    /// already here, otherwise appends a fresh snapshot.
    pub fn add(&mut self, book: &Book) {
        match self.items.iter_mut().find(|item| item.id == book.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(LineItem::snapshot_of(book)),
        }
    }

    /// Drops the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: impl Into<BookId>) -> bool {
        let id = id.into();
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Sets the quantity for `id`, clamping zero up to one copy.
    /// Returns whether a line was found.
    pub fn set_quantity(&mut self, id: impl Into<BookId>, quantity: u32) -> bool {
        let id = id.into();
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.quantity = NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of every line total.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total copies across all lines, saturating like `add` does.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity.get()))
    }
}
