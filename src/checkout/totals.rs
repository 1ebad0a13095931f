use serde::{Deserialize, Serialize};

pub const TAX_RATE: f64 = 0.08;
pub const FREE_SHIPPING_THRESHOLD: f64 = 35.0;
pub const STANDARD_SHIPPING: f64 = 4.99;
pub const EXPRESS_SHIPPING: f64 = 12.99;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl ShippingMethod {
    /// Standard ships free once the subtotal reaches the threshold;
    /// express always costs the flat rate.
    pub fn cost(self, subtotal: f64) -> f64 {
        match self {
            ShippingMethod::Standard => {
                if subtotal >= FREE_SHIPPING_THRESHOLD {
                    0.0
                } else {
                    STANDARD_SHIPPING
                }
            }
            ShippingMethod::Express => EXPRESS_SHIPPING,
        }
    }
}

/// The priced breakdown shown beside the cart at checkout.
///
/// Tax applies to the subtotal only, not to shipping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderSummary {
    pub fn compute(subtotal: f64, method: ShippingMethod) -> Self {
        let shipping = method.cost(subtotal);
        let tax = subtotal * TAX_RATE;
        OrderSummary {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}
