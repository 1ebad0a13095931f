use std::fmt;

use crate::book::{Book, BookId};
use crate::cart::cart::Cart;
use crate::cart::line_item::LineItem;
use crate::notify::{Notifier, NullNotifier};
use crate::storage::{CartStorage, StorageError};

/// A cart wired to its persistence backend and notifier.
///
/// Construction reads the stored document once; a document that is
/// missing or does not decode yields an empty cart. Every mutation
/// then follows the same sequence: update memory, write the document,
/// and only then raise any notification. A failed write surfaces as an
/// error with memory already ahead of storage, so the caller decides
/// whether to retry or drop the store.
pub struct CartStore {
    cart: Cart,
    storage: Box<dyn CartStorage>,
    notifier: Box<dyn Notifier>,
}

impl CartStore {
    pub fn new(storage: impl CartStorage + 'static) -> Self {
        CartStore::with_notifier(storage, NullNotifier)
    }

    pub fn with_notifier(
        storage: impl CartStorage + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let cart = match storage.read() {
            Ok(Some(document)) => Cart::from_document(&document),
            Ok(None) | Err(_) => Cart::new(),
        };
        CartStore {
            cart,
            storage: Box::new(storage),
            notifier: Box::new(notifier),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Adds one copy of `book`, persists, and announces
    /// `"<title>" added to cart`.
    pub fn add_item(&mut self, book: &Book) -> Result<(), StorageError> {
        self.cart.add(book);
        self.persist()?;
        self.notifier
            .notify(&format!("\"{}\" added to cart", book.title));
        Ok(())
    }

    /// Removes the line for `id`. Persists only when a line went away.
    pub fn remove_item(&mut self, id: impl Into<BookId>) -> Result<bool, StorageError> {
        if self.cart.remove(id) {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Sets the quantity for `id` (zero clamps to one). Persists only
    /// when a line was found.
    pub fn update_quantity(
        &mut self,
        id: impl Into<BookId>,
        quantity: u32,
    ) -> Result<bool, StorageError> {
        if self.cart.set_quantity(id, quantity) {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Empties the cart and persists the empty document.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let document = self.cart.to_document()?;
        self.storage.write(&document)
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
