//! Catalog API Handlers

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::Method,
    response::Response,
};
use serde::Deserialize;

use crate::api::response::{finish, json, params, required_id};
use crate::core::ServerState;
use crate::db::repository::{category, department, product};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    #[serde(rename = "departmentID")]
    pub department_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(rename = "categoryID")]
    pub category_id: Option<String>,
}

/// GET /departments
pub async fn departments(State(state): State<ServerState>, method: Method) -> Response {
    let outcome = match method {
        Method::GET => list_departments(&state).await,
        _ => Err(AppError::unsupported_method("/departments")),
    };
    finish(outcome)
}

/// GET /categories?departmentID=
pub async fn categories(
    State(state): State<ServerState>,
    method: Method,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Response {
    let outcome = match method {
        Method::GET => list_categories(&state, query).await,
        _ => Err(AppError::unsupported_method("/categories")),
    };
    finish(outcome)
}

/// GET /products?categoryID=
pub async fn products(
    State(state): State<ServerState>,
    method: Method,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Response {
    let outcome = match method {
        Method::GET => list_products(&state, query).await,
        _ => Err(AppError::unsupported_method("/products")),
    };
    finish(outcome)
}

async fn list_departments(state: &ServerState) -> AppResult<Response> {
    let departments = department::find_all(state.pool())
        .await
        .map_err(|e| AppError::persistence("could not get departments", e))?;
    json(&departments, "departments")
}

async fn list_categories(
    state: &ServerState,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> AppResult<Response> {
    let query = params(query)?;
    let department_id = required_id(query.department_id.as_deref(), "departmentID")?;
    let categories = category::find_by_department(state.pool(), department_id)
        .await
        .map_err(|e| AppError::persistence("could not get categories in Department", e))?;
    json(&categories, "categories")
}

async fn list_products(
    state: &ServerState,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> AppResult<Response> {
    let query = params(query)?;
    let category_id = required_id(query.category_id.as_deref(), "categoryID")?;
    let products = product::find_by_category(state.pool(), category_id)
        .await
        .map_err(|e| AppError::persistence("could not get products in Category", e))?;
    json(&products, "products")
}
