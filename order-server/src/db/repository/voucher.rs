//! Voucher Repository

use super::RepoResult;
use shared::models::Voucher;
use sqlx::Sqlite;

/// Works on the pool or inside an open transaction
pub async fn find_by_code(
    conn: impl sqlx::Executor<'_, Database = Sqlite>,
    code: &str,
) -> RepoResult<Option<Voucher>> {
    let voucher = sqlx::query_as::<_, Voucher>(
        "SELECT code, discount_percentage FROM voucher WHERE code = ?",
    )
    .bind(code)
    .fetch_optional(conn)
    .await?;
    Ok(voucher)
}
