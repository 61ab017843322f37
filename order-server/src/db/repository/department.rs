//! Department Repository

use super::RepoResult;
use shared::models::Department;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Department>> {
    let departments =
        sqlx::query_as::<_, Department>("SELECT id, name FROM department ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(departments)
}
