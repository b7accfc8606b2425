// ==========================================
// 货运物流客户门户 - 数据库初始化
// ==========================================
// 依据: Order_Store_Field_Mapping_v1.0.md - 1. 建库约定
// 职责: 打开 SQLite 连接、建表建索引
// 约定: 状态列存原始 token 文本(NULL = 未设置),
//       时间列存 RFC3339 文本,数值缺失存 NULL
// ==========================================

use rusqlite::Connection;
use std::error::Error;

/// 繁忙等待上限(毫秒)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// 门户库表结构
pub const PORTAL_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS orders (
    id TEXT PRIMARY KEY,
    customer_id TEXT NOT NULL,
    order_no TEXT,
    overall_status TEXT,
    ship_status TEXT,
    customs_status TEXT,
    delivery_status TEXT,
    doc_swap_status TEXT,
    etd TEXT,
    eta TEXT,
    ata TEXT,
    doc_swap_time TEXT,
    customs_release_time TEXT,
    weight_kg REAL,
    volume_cbm REAL,
    created_at TEXT,
    updated_at TEXT
);

CREATE INDEX IF NOT EXISTS idx_orders_customer ON orders(customer_id);
CREATE INDEX IF NOT EXISTS idx_orders_customer_created ON orders(customer_id, created_at);

CREATE TABLE IF NOT EXISTS config_kv (
    config_key TEXT PRIMARY KEY,
    config_value TEXT NOT NULL,
    updated_at TEXT
);
";

/// 打开 SQLite 连接并设置运行参数
pub fn open_sqlite_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(std::time::Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(conn)
}

/// 初始化门户库表结构（幂等）
pub fn init_portal_schema(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute_batch(PORTAL_SCHEMA)?;
    tracing::info!("门户库表结构初始化完成");
    Ok(())
}
