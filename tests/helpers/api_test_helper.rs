// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用测试环境
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tempfile::NamedTempFile;

use freight_portal::api::{DashboardApi, OrderApi};
use freight_portal::config::ConfigManager;
use freight_portal::db;
use freight_portal::domain::order::OrderRecord;
use freight_portal::repository::OrderRepository;

// ==========================================
// 门户测试环境
// ==========================================

/// 门户测试环境
///
/// 包含所有API实例和必要的依赖,共享同一个 SQLite 连接
pub struct PortalTestEnv {
    pub conn: Arc<Mutex<Connection>>,
    pub order_repo: Arc<OrderRepository>,
    pub config: Arc<ConfigManager>,
    pub order_api: Arc<OrderApi>,
    pub dashboard_api: Arc<DashboardApi>,

    // 临时文件（确保生命周期）
    _temp_file: NamedTempFile,
}

impl PortalTestEnv {
    /// 创建带完整表结构的测试环境
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_file = NamedTempFile::new()?;
        let db_path = temp_file.path().to_string_lossy().to_string();

        let conn = db::open_sqlite_connection(&db_path)?;
        db::init_portal_schema(&conn)?;
        let conn = Arc::new(Mutex::new(conn));

        Ok(Self::from_shared_conn(conn, temp_file))
    }

    /// 创建不建表的测试环境（用于验证存储故障降级路径）
    pub fn new_without_schema() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_file = NamedTempFile::new()?;
        let db_path = temp_file.path().to_string_lossy().to_string();

        let conn = db::open_sqlite_connection(&db_path)?;
        let conn = Arc::new(Mutex::new(conn));

        Ok(Self::from_shared_conn(conn, temp_file))
    }

    fn from_shared_conn(conn: Arc<Mutex<Connection>>, temp_file: NamedTempFile) -> Self {
        let order_repo = Arc::new(OrderRepository::from_connection(conn.clone()));
        let config = Arc::new(ConfigManager::from_connection(conn.clone()));
        let order_api = Arc::new(OrderApi::new(order_repo.clone(), config.clone()));
        let dashboard_api = Arc::new(DashboardApi::new(order_repo.clone(), config.clone()));

        PortalTestEnv {
            conn,
            order_repo,
            config,
            order_api,
            dashboard_api,
            _temp_file: temp_file,
        }
    }

    /// 批量写入测试订单
    pub fn seed_orders(&self, orders: &[OrderRecord]) {
        self.order_repo
            .batch_upsert_orders(orders)
            .expect("写入测试订单失败");
    }
}
