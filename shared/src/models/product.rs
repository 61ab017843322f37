//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// Also used as the snapshot embedded in an order line item. The snapshot is
/// taken when the order is read, so it always carries current catalog values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub description: String,
    /// Unit price in currency unit
    pub price: f64,
    #[serde(rename = "categoryID")]
    pub category_id: i64,
}
