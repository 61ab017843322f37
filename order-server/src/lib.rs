//! Smartket Order Server - 商品目录与订单后端
//!
//! # 架构概述
//!
//! - **订单** (`orders`): 校验 → 优惠券解析 → 事务性持久化
//! - **数据库** (`db`): SQLite 连接池、迁移与仓储函数
//! - **HTTP API** (`api`): `/orders` 与只读商品目录接口
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 订单校验、优惠券、服务
//! ├── db/            # 数据库层
//! └── utils/         # 错误与日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use orders::OrderService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
