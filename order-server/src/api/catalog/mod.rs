//! Catalog API Module
//!
//! Read-only product catalog used by the storefront to build orders.
//!
//! | 路径 | 方法 | 参数 |
//! |------|------|------|
//! | /departments | GET | - |
//! | /categories | GET | `departmentID` (必填) |
//! | /products | GET | `categoryID` (必填) |

mod handler;

use axum::{Router, routing::any};

use crate::core::ServerState;

/// Catalog router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/departments", any(handler::departments))
        .route("/categories", any(handler::categories))
        .route("/products", any(handler::products))
}
