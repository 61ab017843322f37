//! Order Module
//!
//! - **validator**: structural and format rules for untrusted order payloads
//! - **voucher**: voucher code → discount resolution
//! - **money**: derived order value
//! - **store**: persistence capability (`OrderStore`) and its SQLite implementation
//! - **service**: orchestration, validator → resolver → store
//!
//! # Data Flow
//!
//! ```text
//! candidate Order → validate → ValidOrder
//!                                 ↓
//!                     VoucherResolver::resolve → AppliedVoucher
//!                                 ↓
//!                            OrderDraft → OrderStore (transaction)
//! ```
//!
//! Nothing reaches the store before both checks pass.

pub mod money;
pub mod service;
pub mod store;
pub mod validator;
pub mod voucher;

#[cfg(test)]
mod fake_store;

pub use service::OrderService;
pub use store::{OrderStore, SqliteOrderStore, VoucherCatalog};
pub use validator::{ValidOrder, ValidationError};
pub use voucher::{VoucherError, VoucherResolver};

use shared::models::{AppliedVoucher, DEFAULT_ORDER_STATUS, Order};

/// Validated order with its resolved voucher, ready to persist
#[derive(Debug, Clone)]
pub struct OrderDraft {
    order: Order,
    voucher: AppliedVoucher,
}

impl OrderDraft {
    /// Empty status falls back to [`DEFAULT_ORDER_STATUS`]. Derived fields
    /// from the payload are not carried over.
    pub fn new(valid: ValidOrder, voucher: AppliedVoucher) -> Self {
        let mut order = valid.into_inner();
        if order.status.is_empty() {
            order.status = DEFAULT_ORDER_STATUS.to_string();
        }
        order.voucher_code = voucher.code().to_string();
        order.discount_percentage = voucher.discount_percentage();
        order.timestamp = 0;
        order.value = 0.0;
        Self { order, voucher }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn voucher(&self) -> &AppliedVoucher {
        &self.voucher
    }
}
