//! Order API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /orders | GET | 全部订单，或 `?orderID=` 单个订单 |
//! | /orders | POST | 创建订单，返回新 ID |
//! | /orders | PUT | 按请求体 `ID` 覆盖订单 |
//! | /orders | DELETE | 删除 `?orderID=` 订单 |
//! | /orders/delete | DELETE | 旧客户端别名 |
//! | /orders/update | PUT, POST | 旧客户端别名 (编辑) |
//!
//! Methods are dispatched inside the handler so that unsupported ones get the
//! plain-text 400 the clients expect instead of axum's 405.

mod handler;

use axum::{Router, routing::any};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", any(handler::orders))
        .route("/orders/delete", any(handler::orders_delete))
        .route("/orders/update", any(handler::orders_update))
}
