//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity (top level of the catalog)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Department {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
}
