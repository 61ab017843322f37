use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::RepoResult;
use crate::orders::OrderService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// Clone 为浅拷贝：连接池与服务内部均为 `Arc`。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | orders | OrderService | 订单校验、优惠券与持久化 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub orders: OrderService,
}

impl ServerState {
    /// 打开数据库并组装服务
    pub async fn initialize(config: &Config) -> RepoResult<Self> {
        let db = DbService::new(config).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// 使用已打开的数据库组装服务 (测试使用内存库)
    pub fn with_db(config: Config, db: DbService) -> Self {
        let orders = OrderService::sqlite(db.pool.clone());
        Self { config, db, orders }
    }

    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.db.pool
    }
}
