//! Persistence capabilities used by the order service
//!
//! [`OrderStore`] and [`VoucherCatalog`] are the seams between orchestration
//! and storage. [`SqliteOrderStore`] implements both over the repository
//! functions; tests substitute in-memory fakes.

use async_trait::async_trait;
use shared::models::{Order, Voucher};
use sqlx::SqlitePool;

use super::OrderDraft;
use crate::db::repository::{RepoResult, order, voucher};

/// Order persistence
///
/// Every write is atomic over the header and its line items.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order, returning its store-assigned id
    async fn create(&self, draft: &OrderDraft) -> RepoResult<i64>;

    /// Overwrite header fields and replace the full set of line items.
    /// Unknown id is `RepoError::NotFound`.
    async fn edit(&self, order_id: i64, draft: &OrderDraft) -> RepoResult<()>;

    /// Remove an order and its line items. `false` when nothing existed.
    async fn delete(&self, order_id: i64) -> RepoResult<bool>;

    async fn get(&self, order_id: i64) -> RepoResult<Option<Order>>;

    async fn list(&self) -> RepoResult<Vec<Order>>;
}

/// Voucher lookup by exact code
#[async_trait]
pub trait VoucherCatalog: Send + Sync {
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Voucher>>;
}

/// SQLite-backed store
#[derive(Debug, Clone)]
pub struct SqliteOrderStore {
    pool: SqlitePool,
}

impl SqliteOrderStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn create(&self, draft: &OrderDraft) -> RepoResult<i64> {
        order::create(&self.pool, draft).await
    }

    async fn edit(&self, order_id: i64, draft: &OrderDraft) -> RepoResult<()> {
        order::replace(&self.pool, order_id, draft).await
    }

    async fn delete(&self, order_id: i64) -> RepoResult<bool> {
        order::delete(&self.pool, order_id).await
    }

    async fn get(&self, order_id: i64) -> RepoResult<Option<Order>> {
        order::find_by_id(&self.pool, order_id).await
    }

    async fn list(&self) -> RepoResult<Vec<Order>> {
        order::find_all(&self.pool).await
    }
}

#[async_trait]
impl VoucherCatalog for SqliteOrderStore {
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Voucher>> {
        voucher::find_by_code(&self.pool, code).await
    }
}
