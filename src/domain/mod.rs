// ==========================================
// 货运物流客户门户 - 领域模型层
// ==========================================
// 依据: Portal_Master_Spec.md - PART C 数据与状态体系
// ==========================================
// 职责: 定义领域实体与状态类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod order;
pub mod types;

// 重导出核心类型
pub use order::OrderRecord;
pub use types::{
    CustomsStatus, DeliveryStatus, DocSwapStatus, LifecycleStage, OverallStatus, ShipStatus,
};
