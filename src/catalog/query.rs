use crate::book::Book;

use super::{PriceBand, SortKey};

/// Keep the books whose price falls inside the band. `Unbounded` passes
/// the input through untouched.
pub fn filter_by_price<'a>(books: Vec<&'a Book>, band: &PriceBand) -> Vec<&'a Book> {
    match band {
        PriceBand::Unbounded => books,
        _ => books
            .into_iter()
            .filter(|book| band.contains(book.price))
            .collect(),
    }
}

/// Case-insensitive substring match against title, author, and
/// description (any of the three). The empty query matches every book,
/// since every string contains the empty substring.
pub fn search_books<'a>(books: Vec<&'a Book>, query: &str) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    books
        .into_iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
                || book.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Reorder the books by the sort key and hand them back. The sort is
/// stable, so ties keep their relative input order; `Default` is the
/// identity.
pub fn sort_books(mut books: Vec<&Book>, key: SortKey) -> Vec<&Book> {
    match key {
        SortKey::Default => {}
        SortKey::Title => books.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
        }),
        SortKey::PriceAscending => books.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDescending => books.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    books
}
