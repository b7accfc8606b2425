// ==========================================
// 货运物流客户门户 - 日志初始化
// ==========================================
// 工具: tracing + tracing-subscriber
// 约定: 级别由 RUST_LOG 控制,默认 info
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化全局日志订阅器
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();
}

/// 测试用日志初始化（重复调用不报错）
pub fn init_test() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
