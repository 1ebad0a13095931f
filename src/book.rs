use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a book in the catalog. Serializes as the bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(u32);

impl BookId {
    pub fn new(id: u32) -> Self {
        BookId(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        BookId(id)
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    /// Coerce a textual id, as when it arrives from a URL or form field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(BookId)
    }
}

/// Error when parsing a category token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCategoryError {
    pub token: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category token: {:?}", self.token)
    }
}

impl std::error::Error for ParseCategoryError {}

/// The shelf a catalog book sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fiction,
    Nonfiction,
    SciFi,
    Mystery,
}

impl Category {
    /// Every shelf, in storefront display order.
    pub const ALL: [Category; 4] = [
        Category::Fiction,
        Category::Nonfiction,
        Category::SciFi,
        Category::Mystery,
    ];

    /// The lowercase wire token, as used in URLs and filter controls.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "fiction",
            Category::Nonfiction => "nonfiction",
            Category::SciFi => "scifi",
            Category::Mystery => "mystery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| token.eq_ignore_ascii_case(category.as_str()))
            .ok_or_else(|| ParseCategoryError {
                token: s.to_string(),
            })
    }
}

/// A single catalog record. Field values are fixed for the life of the
/// catalog; the cart snapshots what it needs rather than holding a
/// reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub price: f64,
    pub description: String,
    /// Display glyph standing in for cover art.
    pub cover: String,
    pub featured: bool,
    /// Reader rating from 0 to 5.
    pub rating: f64,
}
