use std::fmt;
use std::str::FromStr;

/// A filter criterion over price: closed range, open-ended minimum, or
/// no bound at all.
///
/// Parsed once from the UI's band token (`"all"`, `"min"`, `"min-max"`);
/// the filtering logic only ever sees the parsed form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PriceBand {
    /// No price constraint, the "all" selection. A pass-through.
    #[default]
    Unbounded,
    /// Price at least the given minimum.
    AtLeast(f64),
    /// Price within the range, inclusive on both ends.
    Range(f64, f64),
}

impl PriceBand {
    /// Whether the given price falls inside the band.
    pub fn contains(&self, price: f64) -> bool {
        match *self {
            PriceBand::Unbounded => true,
            PriceBand::AtLeast(min) => price >= min,
            PriceBand::Range(min, max) => price >= min && price <= max,
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PriceBand::Unbounded => f.write_str("all"),
            PriceBand::AtLeast(min) => write!(f, "{}", min),
            PriceBand::Range(min, max) => write!(f, "{}-{}", min, max),
        }
    }
}

/// Error when parsing a price band token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePriceBandError {
    pub token: String,
}

impl fmt::Display for ParsePriceBandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized price band token: {:?}", self.token)
    }
}

impl std::error::Error for ParsePriceBandError {}

impl FromStr for PriceBand {
    type Err = ParsePriceBandError;

    /// `"all"` parses to `Unbounded`, `"15"` to `AtLeast(15.0)`,
    /// `"10-20"` to `Range(10.0, 20.0)`. A trailing `-` with no maximum
    /// is treated as open-ended. Callers at the UI boundary typically
    /// fall back with `unwrap_or_default()`, which keeps the filter a
    /// pass-through.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("all") {
            return Ok(PriceBand::Unbounded);
        }
        let invalid = || ParsePriceBandError {
            token: s.to_string(),
        };
        match token.split_once('-') {
            None => token
                .parse::<f64>()
                .map(PriceBand::AtLeast)
                .map_err(|_| invalid()),
            Some((min, max)) => {
                let min: f64 = min.trim().parse().map_err(|_| invalid())?;
                let max = max.trim();
                if max.is_empty() {
                    Ok(PriceBand::AtLeast(min))
                } else {
                    let max: f64 = max.parse().map_err(|_| invalid())?;
                    Ok(PriceBand::Range(min, max))
                }
            }
        }
    }
}
