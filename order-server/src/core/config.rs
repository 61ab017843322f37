use std::str::FromStr;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8081 | HTTP 服务端口 |
/// | DATABASE_URL | sqlite:smartket.db | SQLite 数据库 |
/// | DB_MAX_CONNECTIONS | 100 | 连接池上限 |
/// | DB_MIN_CONNECTIONS | 0 | 连接池保留的空闲连接 |
/// | DB_MAX_LIFETIME_SECS | 180000 | 连接最长存活时间(秒) |
/// | DB_IDLE_TIMEOUT_SECS | 600 | 空闲连接超时(秒) |
/// | REQUEST_TIMEOUT_MS | 10000 | 请求超时(毫秒) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (none) | 日志目录，设置后按天滚动写文件 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/smartket.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite URL or file path
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_max_lifetime_secs: u64,
    pub db_idle_timeout_secs: u64,
    /// Blanket per-request timeout applied at the listener
    pub request_timeout_ms: u64,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_or("HTTP_PORT", 8081),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:smartket.db".into()),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 100),
            db_min_connections: env_or("DB_MIN_CONNECTIONS", 0),
            db_max_lifetime_secs: env_or("DB_MAX_LIFETIME_SECS", 180_000),
            db_idle_timeout_secs: env_or("DB_IDLE_TIMEOUT_SECS", 600),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 10_000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_on_unset() {
        assert_eq!(env_or("ORDER_SERVER_TEST_UNSET_VAR", 42u16), 42);
    }
}
