use crate::book::{Book, BookId, Category};

use super::query;

/// The fixed, ordered set of purchasable books for a session.
///
/// Loaded once, never mutated at runtime. All query operations are pure
/// reads; anything that narrows or reorders hands back references in a
/// fresh sequence and leaves the catalog itself untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Catalog { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of records in the catalog (not a result count).
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a book by id. An absent id is `None`, not an error.
    pub fn find_by_id(&self, id: impl Into<BookId>) -> Option<&Book> {
        let id = id.into();
        self.books.iter().find(|book| book.id == id)
    }

    /// Books flagged for the storefront landing page, in catalog order.
    pub fn featured(&self) -> Vec<&Book> {
        self.books.iter().filter(|book| book.featured).collect()
    }

    /// Books on the given shelf. `None` is the "all" selection and
    /// passes the whole catalog through unfiltered, in order.
    pub fn by_category(&self, category: impl Into<Option<Category>>) -> Vec<&Book> {
        match category.into() {
            None => self.books.iter().collect(),
            Some(category) => self
                .books
                .iter()
                .filter(|book| book.category == category)
                .collect(),
        }
    }

    /// Case-insensitive substring search across title, author, and
    /// description.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        query::search_books(self.books.iter().collect(), query)
    }
}
