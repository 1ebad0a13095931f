mod error;
mod flow;
mod form;
mod order;
mod promo;
mod totals;

// Forms
pub use form::{ContactInfo, PaymentMethod, ShippingInfo};

// Order summary arithmetic
pub use totals::{
    OrderSummary, ShippingMethod, EXPRESS_SHIPPING, FREE_SHIPPING_THRESHOLD, STANDARD_SHIPPING,
    TAX_RATE,
};

// Promo codes
pub use promo::promo_discount;

// Step machine and the completed order
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::Order;

// Errors
pub use error::{CheckoutError, ValidationError};
