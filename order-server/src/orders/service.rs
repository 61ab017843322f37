//! Order Service
//!
//! Orchestrates one request worth of work: validate, resolve the voucher,
//! then hand a [`OrderDraft`] to the store. Maps every failure onto the
//! [`AppError`] taxonomy.

use std::sync::Arc;

use shared::models::Order;

use super::store::{OrderStore, SqliteOrderStore};
use super::validator::{self, ValidOrder};
use super::voucher::{VoucherError, VoucherResolver};
use super::OrderDraft;
use crate::db::repository::RepoError;
use crate::utils::{AppError, AppResult};

const SAVE_FAILED: &str = "could not save Order";
const DELETE_FAILED: &str = "could not delete Order";
const READ_FAILED: &str = "could not get orders";

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    vouchers: VoucherResolver,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, vouchers: VoucherResolver) -> Self {
        Self { store, vouchers }
    }

    /// Service over a single SQLite store serving both orders and vouchers
    pub fn sqlite(pool: sqlx::SqlitePool) -> Self {
        let store = Arc::new(SqliteOrderStore::new(pool));
        Self::new(store.clone(), VoucherResolver::new(store))
    }

    /// Create an order; returns the new id. Client-supplied `ID` is ignored.
    pub async fn create(&self, candidate: Order) -> AppResult<i64> {
        let draft = self.prepare(candidate).await?;

        let id = self
            .store
            .create(&draft)
            .await
            .map_err(|e| AppError::persistence(SAVE_FAILED, e))?;

        tracing::info!(
            order_id = id,
            voucher = draft.voucher().code(),
            items = draft.order().products_ordered.len(),
            "Order created"
        );
        Ok(id)
    }

    /// Overwrite the order identified by the payload `ID`; returns that id.
    pub async fn edit(&self, candidate: Order) -> AppResult<i64> {
        let order_id = candidate.id;
        if order_id <= 0 {
            return Err(AppError::not_found("mandatory field 'ID' not found"));
        }

        let draft = self.prepare(candidate).await?;

        self.store
            .edit(order_id, &draft)
            .await
            .map_err(|e| match e {
                RepoError::NotFound(_) => AppError::not_found(format!("order {order_id} not found")),
                other => AppError::persistence(SAVE_FAILED, other),
            })?;

        tracing::info!(order_id, "Order updated");
        Ok(order_id)
    }

    /// Delete an order. A missing id is not an error.
    pub async fn delete(&self, order_id: i64) -> AppResult<()> {
        let existed = self
            .store
            .delete(order_id)
            .await
            .map_err(|e| AppError::persistence(DELETE_FAILED, e))?;

        if existed {
            tracing::info!(order_id, "Order deleted");
        } else {
            tracing::debug!(order_id, "Delete of unknown order, nothing to do");
        }
        Ok(())
    }

    pub async fn get(&self, order_id: i64) -> AppResult<Order> {
        self.store
            .get(order_id)
            .await
            .map_err(|e| AppError::persistence(READ_FAILED, e))?
            .ok_or_else(|| AppError::not_found(format!("order {order_id} not found")))
    }

    pub async fn list(&self) -> AppResult<Vec<Order>> {
        self.store
            .list()
            .await
            .map_err(|e| AppError::persistence(READ_FAILED, e))
    }

    /// Validation and voucher resolution; nothing is written before both pass.
    async fn prepare(&self, candidate: Order) -> AppResult<OrderDraft> {
        let valid: ValidOrder = validator::validate(candidate).map_err(|e| {
            AppError::validation(format!(
                "order information sent on request body does not match required format: {e}"
            ))
        })?;

        let voucher = self
            .vouchers
            .resolve(&valid.voucher_code)
            .await
            .map_err(|e| match e {
                VoucherError::Invalid(code) => {
                    tracing::warn!(code = %code, "Rejected order with unknown voucher");
                    AppError::invalid_voucher()
                }
                VoucherError::Lookup(source) => AppError::persistence(SAVE_FAILED, source),
            })?;

        Ok(OrderDraft::new(valid, voucher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fake_store::FakeStore;
    use axum::http::StatusCode;
    use shared::models::{OrderedProduct, Product};

    fn service(store: &Arc<FakeStore>) -> OrderService {
        OrderService::new(store.clone(), VoucherResolver::new(store.clone()))
    }

    fn candidate() -> Order {
        Order {
            first_name: "Ana".into(),
            last_name: "Pop".into(),
            email: "ana@example.com".into(),
            phone_number: "0712345678".into(),
            city: "Cluj".into(),
            address: "Str. X 1".into(),
            payment_method: "cash".into(),
            products_ordered: vec![OrderedProduct {
                product_id: 7,
                quantity: 2,
                product: Product {
                    id: 7,
                    price: 10.0,
                    ..Default::default()
                },
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_defaults_status_and_ignores_client_fields() {
        let store = Arc::new(FakeStore::default());
        let svc = service(&store);

        let mut order = candidate();
        order.id = 99;
        order.value = 1234.0;
        order.discount_percentage = 50;

        let id = svc.create(order).await.unwrap();
        assert_eq!(id, 1);

        let stored = svc.get(id).await.unwrap();
        assert_eq!(stored.status, "pending");
        assert_eq!(stored.discount_percentage, 0);
        assert_eq!(stored.voucher_code, "");
        assert_eq!(stored.value, 10.0);
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_status() {
        let store = Arc::new(FakeStore::default());
        let svc = service(&store);
        let mut order = candidate();
        order.status = "delivered".into();
        let id = svc.create(order).await.unwrap();
        assert_eq!(svc.get(id).await.unwrap().status, "delivered");
    }

    #[tokio::test]
    async fn test_voucher_applies_discount() {
        let store = Arc::new(FakeStore::default().with_voucher("SAVE10", 10));
        let svc = service(&store);
        let mut order = candidate();
        order.voucher_code = "SAVE10".into();

        let id = svc.create(order).await.unwrap();
        let stored = svc.get(id).await.unwrap();
        assert_eq!(stored.discount_percentage, 10);
        assert!((stored.value - 1000.0 / 110.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_invalid_voucher_writes_nothing() {
        let store = Arc::new(FakeStore::default());
        let svc = service(&store);
        let mut order = candidate();
        order.voucher_code = "NOPE".into();

        let err = svc.create(order).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidVoucher(_)));
        assert_eq!(err.to_string(), "the voucher code provided is invalid");
        assert_eq!(store.writes(), 0);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_validation_failure_skips_voucher_and_store() {
        let store = Arc::new(FakeStore::default().with_voucher("SAVE10", 10));
        let svc = service(&store);
        let mut order = candidate();
        order.first_name = "Ana2".into();
        order.voucher_code = "SAVE10".into();

        let err = svc.create(order).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(
            err.to_string()
                .starts_with("order information sent on request body does not match required format")
        );
        assert_eq!(store.voucher_lookups(), 0);
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_edit_requires_existing_id() {
        let store = Arc::new(FakeStore::default());
        let svc = service(&store);

        let err = svc.edit(candidate()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.writes(), 0);

        let mut order = candidate();
        order.id = 42;
        let err = svc.edit(order).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_edit_overwrites_existing_order() {
        let store = Arc::new(FakeStore::default());
        let svc = service(&store);
        let id = svc.create(candidate()).await.unwrap();

        let mut order = candidate();
        order.id = id;
        order.city = "Iasi".into();
        order.products_ordered.clear();
        assert_eq!(svc.edit(order).await.unwrap(), id);

        let stored = svc.get(id).await.unwrap();
        assert_eq!(stored.city, "Iasi");
        assert!(stored.products_ordered.is_empty());
        assert_eq!(stored.value, 0.0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = Arc::new(FakeStore::default());
        let svc = service(&store);
        let id = svc.create(candidate()).await.unwrap();

        svc.delete(id).await.unwrap();
        svc.delete(id).await.unwrap();
        assert!(matches!(svc.get(id).await, Err(AppError::NotFound(_))));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_and_hides_detail() {
        let store = Arc::new(FakeStore::default().failing());
        let svc = service(&store);

        let err = svc.create(candidate()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "could not save Order");
        assert!(err.detail().contains("store unavailable"));

        let err = svc.list().await.unwrap_err();
        assert_eq!(err.to_string(), "could not get orders");

        let err = svc.delete(1).await.unwrap_err();
        assert_eq!(err.to_string(), "could not delete Order");
    }
}
