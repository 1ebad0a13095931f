use std::fmt;

use crate::storage::StorageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "required field {} is blank", field)
            }
            ValidationError::InvalidEmail => write!(f, "email address is not valid"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum CheckoutError {
    EmptyCart,
    Validation(ValidationError),
    NoPaymentMethod,
    Storage(StorageError),
}

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutError::EmptyCart => write!(f, "cart is empty"),
            CheckoutError::Validation(err) => write!(f, "checkout form invalid: {}", err),
            CheckoutError::NoPaymentMethod => write!(f, "no payment method selected"),
            CheckoutError::Storage(err) => write!(f, "cart could not be persisted: {}", err),
        }
    }
}

impl std::error::Error for CheckoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckoutError::Validation(err) => Some(err),
            CheckoutError::Storage(err) => Some(err),
            CheckoutError::EmptyCart | CheckoutError::NoPaymentMethod => None,
        }
    }
}

impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        CheckoutError::Validation(err)
    }
}

impl From<StorageError> for CheckoutError {
    fn from(err: StorageError) -> Self {
        CheckoutError::Storage(err)
    }
}
