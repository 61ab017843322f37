//! Product Repository

use super::RepoResult;
use shared::models::Product;
use sqlx::SqlitePool;

pub async fn find_by_category(pool: &SqlitePool, category_id: i64) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, image_url, description, price, category_id FROM product WHERE category_id = ? ORDER BY id",
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;
    Ok(products)
}
