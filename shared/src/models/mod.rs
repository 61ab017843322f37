//! Data models
//!
//! Shared between order-server and the storefront frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).
//!
//! JSON field names follow the storefront contract (`ID`, `firstName`,
//! `productDetails`, ...), not Rust naming.

pub mod category;
pub mod department;
pub mod order;
pub mod product;
pub mod voucher;

// Re-exports
pub use category::*;
pub use department::*;
pub use order::*;
pub use product::*;
pub use voucher::*;
