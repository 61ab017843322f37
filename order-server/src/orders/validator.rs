//! Order payload validation
//!
//! Pure checks on the customer, payment and line-item fields of a candidate
//! order. No I/O: the voucher is resolved separately and product existence is
//! left to the store.

use std::sync::LazyLock;

use regex::Regex;
use shared::models::Order;
use thiserror::Error;

/// Letters only: no digits, spaces, hyphens or other punctuation
static ALPHA: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z]+$"));

/// Exactly 10 characters of digits, `-` and `+`
static PHONE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9\-\+]{10}$"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
});

#[allow(clippy::expect_used)] // patterns are compile-time constants
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid built-in pattern")
}

/// Why a candidate order was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error("{0} must contain letters only")]
    NotAlphabetic(&'static str),

    #[error("phoneNumber must be 10 characters of digits, '-' or '+'")]
    InvalidPhoneNumber,

    #[error("email is not a valid address")]
    InvalidEmail,

    #[error("quantity of product {product_id} must be a positive integer")]
    InvalidQuantity { product_id: i64 },
}

/// Order that passed [`validate`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrder(Order);

impl ValidOrder {
    pub fn into_inner(self) -> Order {
        self.0
    }
}

impl std::ops::Deref for ValidOrder {
    type Target = Order;

    fn deref(&self) -> &Order {
        &self.0
    }
}

/// Check required fields, then name/city, phone and email formats, then
/// line-item quantities.
pub fn validate(candidate: Order) -> Result<ValidOrder, ValidationError> {
    let required = [
        ("firstName", &candidate.first_name),
        ("lastName", &candidate.last_name),
        ("email", &candidate.email),
        ("phoneNumber", &candidate.phone_number),
        ("city", &candidate.city),
        ("address", &candidate.address),
        ("paymentMethod", &candidate.payment_method),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }

    for (field, value) in [
        ("firstName", &candidate.first_name),
        ("lastName", &candidate.last_name),
        ("city", &candidate.city),
    ] {
        if !ALPHA.is_match(value) {
            return Err(ValidationError::NotAlphabetic(field));
        }
    }

    if !PHONE.is_match(&candidate.phone_number) {
        return Err(ValidationError::InvalidPhoneNumber);
    }

    if !EMAIL.is_match(&candidate.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if let Some(item) = candidate.products_ordered.iter().find(|p| p.quantity <= 0) {
        return Err(ValidationError::InvalidQuantity {
            product_id: item.product_id,
        });
    }

    Ok(ValidOrder(candidate))
}
