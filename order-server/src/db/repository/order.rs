//! Order Repository
//!
//! An order is one `orders` header row plus its `order_product` rows. Every
//! write touching both tables runs in a single transaction; an error on any
//! statement drops the transaction, which rolls back the whole unit.
//!
//! Reads rebuild the entity inside one read transaction: header, voucher discount (explicit lookup, a
//! removed voucher degrades to no discount), line items joined with the
//! current product catalog, and the derived order value.

use super::{RepoError, RepoResult, voucher};
use crate::orders::OrderDraft;
use crate::orders::money;
use shared::models::{AppliedVoucher, Order, OrderedProduct, Product};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

const ORDER_COLUMNS: &str = "id, first_name, last_name, email, phone_number, city, address, voucher_code, payment_method, status, timestamp";

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    city: String,
    address: String,
    voucher_code: Option<String>,
    payment_method: String,
    status: String,
    timestamp: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    product_id: i64,
    quantity: i32,
    name: String,
    image_url: String,
    description: String,
    price: f64,
    category_id: i64,
}

// ── Writes ──────────────────────────────────────────────────────────────

/// Insert header and line items; returns the new order id.
pub async fn create(pool: &SqlitePool, draft: &OrderDraft) -> RepoResult<i64> {
    let order = draft.order();
    let now = shared::util::now_secs();

    let mut tx = pool.begin().await?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (first_name, last_name, email, phone_number, city, address, voucher_code, payment_method, status, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) RETURNING id",
    )
    .bind(&order.first_name)
    .bind(&order.last_name)
    .bind(&order.email)
    .bind(&order.phone_number)
    .bind(&order.city)
    .bind(&order.address)
    .bind(draft.voucher().stored_code())
    .bind(&order.payment_method)
    .bind(&order.status)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    insert_items(&mut tx, id, &order.products_ordered).await?;

    tx.commit().await?;

    tracing::debug!(
        order_id = id,
        items = order.products_ordered.len(),
        created_at = %shared::util::format_timestamp(now),
        "Order inserted"
    );
    Ok(id)
}

/// Overwrite every header field of an existing order and replace its line
/// items. The creation timestamp is kept.
pub async fn replace(pool: &SqlitePool, order_id: i64, draft: &OrderDraft) -> RepoResult<()> {
    let order = draft.order();

    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        "UPDATE orders SET first_name = ?1, last_name = ?2, email = ?3, phone_number = ?4, city = ?5, address = ?6, voucher_code = ?7, payment_method = ?8, status = ?9 WHERE id = ?10",
    )
    .bind(&order.first_name)
    .bind(&order.last_name)
    .bind(&order.email)
    .bind(&order.phone_number)
    .bind(&order.city)
    .bind(&order.address)
    .bind(draft.voucher().stored_code())
    .bind(&order.payment_method)
    .bind(&order.status)
    .bind(order_id)
    .execute(&mut *tx)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {order_id} not found")));
    }

    sqlx::query("DELETE FROM order_product WHERE order_id = ?")
        .bind(order_id)
        .execute(&mut *tx)
        .await?;
    insert_items(&mut tx, order_id, &order.products_ordered).await?;

    tx.commit().await?;
    Ok(())
}

/// Delete line items then header. Returns whether a header row existed.
pub async fn delete(pool: &SqlitePool, order_id: i64) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM order_product WHERE order_id = ?")
        .bind(order_id)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}

async fn insert_items(
    tx: &mut Transaction<'_, Sqlite>,
    order_id: i64,
    items: &[OrderedProduct],
) -> RepoResult<()> {
    for item in items {
        sqlx::query("INSERT INTO order_product (order_id, product_id, quantity) VALUES (?1, ?2, ?3)")
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

// ── Reads ───────────────────────────────────────────────────────────────

pub async fn find_by_id(pool: &SqlitePool, order_id: i64) -> RepoResult<Option<Order>> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
    ))
    .bind(order_id)
    .fetch_optional(&mut *tx)
    .await?;

    let order = match row {
        Some(row) => Some(assemble(&mut *tx, row).await?),
        None => None,
    };

    tx.commit().await?;
    Ok(order)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"
    ))
    .fetch_all(&mut *tx)
    .await?;

    let mut orders = Vec::with_capacity(rows.len());
    for row in rows {
        orders.push(assemble(&mut *tx, row).await?);
    }

    tx.commit().await?;
    Ok(orders)
}

/// Header, voucher and items are read on one connection inside the caller's
/// transaction, so a concurrent replace is seen entirely or not at all.
async fn assemble(conn: &mut SqliteConnection, row: OrderRow) -> RepoResult<Order> {
    let voucher = match row.voucher_code.as_deref() {
        Some(code) if !code.is_empty() => voucher::find_by_code(&mut *conn, code)
            .await?
            .map(AppliedVoucher::from)
            .unwrap_or_default(),
        _ => AppliedVoucher::None,
    };

    let products = find_items(&mut *conn, row.id).await?;
    let value = money::order_value(
        products.iter().map(|item| item.product.price),
        voucher.discount_percentage(),
    );

    Ok(Order {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        phone_number: row.phone_number,
        city: row.city,
        address: row.address,
        voucher_code: voucher.code().to_string(),
        discount_percentage: voucher.discount_percentage(),
        payment_method: row.payment_method,
        status: row.status,
        timestamp: row.timestamp,
        value,
        products_ordered: products,
    })
}

async fn find_items(conn: &mut SqliteConnection, order_id: i64) -> RepoResult<Vec<OrderedProduct>> {
    let rows = sqlx::query_as::<_, ItemRow>(
        "SELECT op.product_id, op.quantity, p.name, p.image_url, p.description, p.price, p.category_id FROM order_product op JOIN product p ON p.id = op.product_id WHERE op.order_id = ? ORDER BY op.rowid",
    )
    .bind(order_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| OrderedProduct {
            product_id: r.product_id,
            order_id,
            quantity: r.quantity,
            product: Product {
                id: r.product_id,
                name: r.name,
                image_url: r.image_url,
                description: r.description,
                price: r.price,
                category_id: r.category_id,
            },
        })
        .collect())
}
