use crate::cart::CartStore;
use crate::checkout::error::CheckoutError;
use crate::checkout::form::{ContactInfo, PaymentMethod, ShippingInfo};
use crate::checkout::order::Order;
use crate::checkout::totals::{OrderSummary, ShippingMethod};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutStep {
    #[default]
    Contact,
    Shipping,
    Payment,
}

/// The three-step checkout walk: contact details, then shipping, then
/// payment.
///
/// Forms can be edited at any step; `advance` refuses to move forward
/// past a form that does not validate, while `back` always succeeds.
/// The flow only reads the cart it was started for. Placing the order
/// is the single point where the cart is written (cleared).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    contact: ContactInfo,
    shipping: ShippingInfo,
    shipping_method: ShippingMethod,
    payment: Option<PaymentMethod>,
}

impl CheckoutFlow {
    /// Starts a checkout for the store's current cart. An empty cart
    /// has nothing to check out and is refused.
    pub fn begin(store: &CartStore) -> Result<Self, CheckoutError> {
        if store.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(CheckoutFlow::default())
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }

    pub fn shipping(&self) -> &ShippingInfo {
        &self.shipping
    }

    pub fn set_shipping(&mut self, shipping: ShippingInfo) {
        self.shipping = shipping;
    }

    pub fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    pub fn set_shipping_method(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
    }

    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment = Some(method);
    }

    /// Validates the current step's form and moves forward. Already at
    /// Payment, there is nowhere further to go and this is a no-op.
    pub fn advance(&mut self) -> Result<CheckoutStep, CheckoutError> {
        self.step = match self.step {
            CheckoutStep::Contact => {
                self.contact.validate()?;
                CheckoutStep::Shipping
            }
            CheckoutStep::Shipping => {
                self.shipping.validate()?;
                CheckoutStep::Payment
            }
            CheckoutStep::Payment => CheckoutStep::Payment,
        };
        Ok(self.step)
    }

    /// Steps backward without validating anything. At Contact this is
    /// a no-op.
    pub fn back(&mut self) -> CheckoutStep {
        self.step = match self.step {
            CheckoutStep::Contact => CheckoutStep::Contact,
            CheckoutStep::Shipping => CheckoutStep::Contact,
            CheckoutStep::Payment => CheckoutStep::Shipping,
        };
        self.step
    }

    /// Prices the store's current cart with the currently selected
    /// shipping method.
    pub fn summary(&self, store: &CartStore) -> OrderSummary {
        OrderSummary::compute(store.total(), self.shipping_method)
    }

    /// Places the order: checks a payment method is selected, that
    /// both forms still validate, and that the cart is still populated,
    /// then snapshots everything into an `Order` and clears the cart.
    ///
    /// A failed clear surfaces as `CheckoutError::Storage` and no order
    /// is returned.
    pub fn place_order(&self, store: &mut CartStore) -> Result<Order, CheckoutError> {
        let payment = self.payment.ok_or(CheckoutError::NoPaymentMethod)?;
        self.contact.validate()?;
        self.shipping.validate()?;
        if store.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = Order {
            customer: self.contact.clone(),
            shipping: self.shipping.clone(),
            shipping_method: self.shipping_method,
            payment,
            items: store.items().to_vec(),
            summary: self.summary(store),
        };
        store.clear()?;
        Ok(order)
    }
}
