//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "departmentID")]
    pub department_id: i64,
}
