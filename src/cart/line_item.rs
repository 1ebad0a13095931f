use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::book::{Book, BookId};

/// One cart row: a snapshot of the book at the moment it was added,
/// plus how many copies the customer wants.
///
/// Holding a snapshot instead of a catalog reference keeps the cart
/// priced as sold even if the shelf price moves later. The quantity is
/// `NonZeroU32`, so a row for zero copies cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub cover: String,
    pub quantity: NonZeroU32,
}

impl LineItem {
    /// Captures the fields of `book` the cart keeps, with quantity 1.
    pub fn snapshot_of(book: &Book) -> Self {
        LineItem {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price,
            cover: book.cover.clone(),
            quantity: NonZeroU32::MIN,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity.get())
    }
}
