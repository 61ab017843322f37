//! Category Repository

use super::RepoResult;
use shared::models::Category;
use sqlx::SqlitePool;

pub async fn find_by_department(
    pool: &SqlitePool,
    department_id: i64,
) -> RepoResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, department_id FROM category WHERE department_id = ? ORDER BY id",
    )
    .bind(department_id)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}
