//! Order Model

use serde::{Deserialize, Serialize};

use super::Product;

/// Status given to orders created without one
pub const DEFAULT_ORDER_STATUS: &str = "pending";

/// Order entity
///
/// The same shape is accepted on create/edit and returned on read. Derived
/// fields (`discountPercentage`, `timestamp`, `value`, product snapshots) are
/// ignored on input and filled in by the store on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "ID")]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub city: String,
    pub address: String,
    /// Empty when the order has no voucher
    pub voucher_code: String,
    pub discount_percentage: i32,
    pub payment_method: String,
    pub status: String,
    /// Creation time, seconds since epoch
    pub timestamp: i64,
    pub value: f64,
    #[serde(rename = "products")]
    pub products_ordered: Vec<OrderedProduct>,
}

/// Order line item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderedProduct {
    #[serde(rename = "productID")]
    pub product_id: i64,
    #[serde(rename = "orderID")]
    pub order_id: i64,
    pub quantity: i32,
    #[serde(rename = "productDetails")]
    pub product: Product,
}
