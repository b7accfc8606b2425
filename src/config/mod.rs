// ==========================================
// 货运物流客户门户 - 配置管理
// ==========================================
// 依据: Portal_Master_Spec.md - PART F 配置
// 职责: config_kv 表读写 + 门户参数的类型化读取
// 约定: 读不到/解析失败一律回退默认值,配置问题不阻塞业务
// ==========================================

use rusqlite::{Connection, OptionalExtension};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// 配置键常量
pub mod config_keys {
    /// 趋势窗口(月)
    pub const TREND_WINDOW_MONTHS: &str = "trend_window_months";
    /// 列表默认页大小
    pub const DEFAULT_PAGE_SIZE: &str = "default_page_size";
    /// 列表页大小上限
    pub const MAX_PAGE_SIZE: &str = "max_page_size";
}

/// 配置管理器
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = Connection::open(db_path)?;
        Ok(ConfigManager {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        ConfigManager { conn }
    }

    /// 读取配置值
    pub fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| e.to_string())?;
        let value = conn
            .query_row(
                "SELECT config_value FROM config_kv WHERE config_key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 读取配置值,缺失时返回默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> String {
        match self.get_config_value(key) {
            Ok(Some(value)) => value,
            Ok(None) => default.to_string(),
            Err(e) => {
                tracing::warn!("读取配置 {} 失败,使用默认值: {}", key, e);
                default.to_string()
            }
        }
    }

    /// 写入配置值
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT OR REPLACE INTO config_kv (config_key, config_value, updated_at)
             VALUES (?1, ?2, datetime('now'))",
            [key, value],
        )?;
        Ok(())
    }

    // ==========================================
    // 类型化读取（带默认值与范围钳制）
    // ==========================================

    /// 趋势窗口(月),默认 12,钳制到 1..=36
    pub fn get_trend_window_months(&self) -> u32 {
        self.get_config_or_default(config_keys::TREND_WINDOW_MONTHS, "12")
            .parse::<u32>()
            .unwrap_or(12)
            .clamp(1, 36)
    }

    /// 列表默认页大小,默认 20
    pub fn get_default_page_size(&self) -> u32 {
        self.get_config_or_default(config_keys::DEFAULT_PAGE_SIZE, "20")
            .parse::<u32>()
            .unwrap_or(20)
            .max(1)
    }

    /// 列表页大小上限,默认 200
    pub fn get_max_page_size(&self) -> u32 {
        self.get_config_or_default(config_keys::MAX_PAGE_SIZE, "200")
            .parse::<u32>()
            .unwrap_or(200)
            .max(1)
    }
}
