//! Order API Handlers

use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::Method,
    response::Response,
};
use serde::Deserialize;
use shared::models::Order;

use crate::api::response::{finish, json, params, required_id};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

const ORDER_ID: &str = "orderID";

#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    #[serde(rename = "orderID")]
    pub order_id: Option<String>,
}

/// /orders
pub async fn orders(
    State(state): State<ServerState>,
    method: Method,
    query: Result<Query<OrderQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let outcome = match method {
        Method::GET => read(&state, query).await,
        Method::POST => create(&state, &body).await,
        Method::PUT => edit(&state, &body).await,
        Method::DELETE => delete(&state, query).await,
        _ => Err(AppError::unsupported_method("/orders")),
    };
    finish(outcome)
}

/// /orders/delete
pub async fn orders_delete(
    State(state): State<ServerState>,
    method: Method,
    query: Result<Query<OrderQuery>, QueryRejection>,
) -> Response {
    let outcome = match method {
        Method::DELETE => delete(&state, query).await,
        _ => Err(AppError::unsupported_method("/orders/delete")),
    };
    finish(outcome)
}

/// /orders/update
pub async fn orders_update(
    State(state): State<ServerState>,
    method: Method,
    body: Bytes,
) -> Response {
    let outcome = match method {
        Method::PUT | Method::POST => edit(&state, &body).await,
        _ => Err(AppError::unsupported_method("/orders/update")),
    };
    finish(outcome)
}

async fn read(
    state: &ServerState,
    query: Result<Query<OrderQuery>, QueryRejection>,
) -> AppResult<Response> {
    let query = params(query)?;
    match query.order_id.as_deref() {
        Some(raw) => {
            let order_id = required_id(Some(raw), ORDER_ID)?;
            let order = state.orders.get(order_id).await?;
            json(&order, "order")
        }
        None => {
            let orders = state.orders.list().await?;
            json(&orders, "orders")
        }
    }
}

async fn create(state: &ServerState, body: &[u8]) -> AppResult<Response> {
    let candidate = parse_order(body)?;
    let order_id = state.orders.create(candidate).await?;
    json(&order_id, "orderID")
}

async fn edit(state: &ServerState, body: &[u8]) -> AppResult<Response> {
    let candidate = parse_order(body)?;
    let order_id = state.orders.edit(candidate).await?;
    json(&order_id, "orderID")
}

async fn delete(
    state: &ServerState,
    query: Result<Query<OrderQuery>, QueryRejection>,
) -> AppResult<Response> {
    let query = params(query)?;
    let order_id = required_id(query.order_id.as_deref(), ORDER_ID)?;
    state.orders.delete(order_id).await?;
    json(&order_id, "orderID")
}

fn parse_order(body: &[u8]) -> AppResult<Order> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::validation(format!(
            "order information sent on request body does not match required format: {e}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_rejects_malformed_body() {
        let err = parse_order(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = parse_order(br#"{"firstName": 5}"#).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("order information sent on request body does not match required format")
        );
    }

    #[test]
    fn test_parse_order_accepts_partial_body() {
        let order = parse_order(br#"{"firstName": "Ana", "products": []}"#).unwrap();
        assert_eq!(order.first_name, "Ana");
        assert_eq!(order.id, 0);
    }
}
