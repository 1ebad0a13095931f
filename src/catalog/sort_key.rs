use std::fmt;

/// Ordering applied as the final stage of the catalog pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the catalog's own insertion order.
    #[default]
    Default,
    /// Lexicographic by title, case-insensitive.
    Title,
    /// Cheapest first (token `price-low`).
    PriceAscending,
    /// Most expensive first (token `price-high`).
    PriceDescending,
}

impl SortKey {
    /// Parse a sort token. Parsing is total: unrecognized tokens keep
    /// the catalog order.
    pub fn parse(token: &str) -> SortKey {
        match token.trim() {
            "title" => SortKey::Title,
            "price-low" => SortKey::PriceAscending,
            "price-high" => SortKey::PriceDescending,
            _ => SortKey::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::Title => "title",
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
