/// The storefront's demo promo table.
const PROMO_CODES: [(&str, f64); 3] = [("BOOK10", 0.10), ("READER20", 0.20), ("WELCOME15", 0.15)];

/// Looks up the savings rate for a promo code, trimming whitespace and
/// ignoring case. Validation only: the rate is reported to the
/// customer but totals are computed without it.
pub fn promo_discount(code: &str) -> Option<f64> {
    let code = code.trim().to_uppercase();
    PROMO_CODES
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, rate)| *rate)
}
