//! In-memory [`OrderStore`] / [`VoucherCatalog`] for service tests

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shared::models::{Order, Voucher};

use super::OrderDraft;
use super::money;
use super::store::{OrderStore, VoucherCatalog};
use crate::db::repository::{RepoError, RepoResult};

#[derive(Default)]
pub struct FakeStore {
    orders: Mutex<BTreeMap<i64, Order>>,
    vouchers: HashMap<String, i32>,
    writes: AtomicUsize,
    voucher_lookups: AtomicUsize,
    fail: bool,
}

impl FakeStore {
    pub fn with_voucher(mut self, code: &str, discount_percentage: i32) -> Self {
        self.vouchers.insert(code.to_string(), discount_percentage);
        self
    }

    /// Every call returns a database error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn voucher_lookups(&self) -> usize {
        self.voucher_lookups.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    fn check(&self) -> RepoResult<()> {
        if self.fail {
            return Err(RepoError::Database("store unavailable".into()));
        }
        Ok(())
    }

    fn materialize(id: i64, timestamp: i64, draft: &OrderDraft) -> Order {
        let mut order = draft.order().clone();
        order.id = id;
        order.timestamp = timestamp;
        for item in &mut order.products_ordered {
            item.order_id = id;
        }
        order.value = money::order_value(
            order.products_ordered.iter().map(|p| p.product.price),
            order.discount_percentage,
        );
        order
    }
}

#[async_trait]
impl OrderStore for FakeStore {
    async fn create(&self, draft: &OrderDraft) -> RepoResult<i64> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut orders = self.orders.lock().unwrap();
        let id = orders.keys().next_back().copied().unwrap_or(0) + 1;
        orders.insert(id, Self::materialize(id, 1_600_000_000, draft));
        Ok(id)
    }

    async fn edit(&self, order_id: i64, draft: &OrderDraft) -> RepoResult<()> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut orders = self.orders.lock().unwrap();
        let timestamp = orders
            .get(&order_id)
            .map(|o| o.timestamp)
            .ok_or_else(|| RepoError::NotFound(format!("order {order_id}")))?;
        orders.insert(order_id, Self::materialize(order_id, timestamp, draft));
        Ok(())
    }

    async fn delete(&self, order_id: i64) -> RepoResult<bool> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(self.orders.lock().unwrap().remove(&order_id).is_some())
    }

    async fn get(&self, order_id: i64) -> RepoResult<Option<Order>> {
        self.check()?;
        Ok(self.orders.lock().unwrap().get(&order_id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Order>> {
        self.check()?;
        Ok(self.orders.lock().unwrap().values().cloned().collect())
    }
}

#[async_trait]
impl VoucherCatalog for FakeStore {
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Voucher>> {
        self.check()?;
        self.voucher_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.vouchers.get(code).map(|&discount_percentage| Voucher {
            code: code.to_string(),
            discount_percentage,
        }))
    }
}
