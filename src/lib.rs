// ==========================================
// 货运物流客户门户 - 订单生命周期引擎
// ==========================================
// 依据: Portal_Master_Spec.md
// ==========================================
// 分层:
//   domain     - 订单与状态枚举（解析宽容,分类全域有定义）
//   engine     - 生命周期分类、进度投影、聚合与趋势（纯计算,不碰 I/O）
//   repository - SQLite 持久化;阶段谓词从引擎规则表编译
//   api        - 门户页面接口;读降级、写上抛
//   config     - config_kv 配置读写
// 红线: 阶段判定规则只住 engine::stage_rules 一处
// ==========================================

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod repository;

pub use api::{DashboardApi, OrderApi};
pub use repository::OrderRepository;

/// 应用名称
pub const APP_NAME: &str = "货运物流客户门户";

/// 应用版本
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
