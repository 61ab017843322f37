//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`orders`] - 订单接口 (`/orders`, `/orders/delete`, `/orders/update`)
//! - [`catalog`] - 商品目录只读接口 (`/departments`, `/categories`, `/products`)

pub mod catalog;
pub mod health;
pub mod orders;

mod response;

use std::time::Duration;

use axum::{Router, middleware};
use http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::info!("Method: {}, Path: {}", method, uri.path());

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(catalog::router())
}

/// Build the fully configured application: routes, middleware and state
///
/// Used by both the HTTP server and in-process tests.
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    let production = state.config.is_production();

    let app = build_router()
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(TraceLayer::new_for_http());

    // Browser clients are served from another origin during development
    let app = if production {
        app
    } else {
        app.layer(CorsLayer::permissive())
    };

    // Request logging - outermost, executed first
    app.layer(middleware::from_fn(log_request))
}
