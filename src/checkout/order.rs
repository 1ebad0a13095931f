use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::checkout::form::{ContactInfo, PaymentMethod, ShippingInfo};
use crate::checkout::totals::{OrderSummary, ShippingMethod};

/// An immutable snapshot of everything the customer confirmed,
/// assembled the moment the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub customer: ContactInfo,
    pub shipping: ShippingInfo,
    pub shipping_method: ShippingMethod,
    pub payment: PaymentMethod,
    pub items: Vec<LineItem>,
    pub summary: OrderSummary,
}
