// ==========================================
// 货运物流客户门户 - 仓储层
// ==========================================
// 依据: Portal_Master_Spec.md - PART E 存储层
// ==========================================
// 职责: SQLite 持久化与查询;阶段谓词从引擎规则表编译而来
// 红线: 业务规则不在仓储层重写,只编译、只执行
// ==========================================

pub mod error;
pub mod order_repo;
pub mod stage_filter;

pub use error::{RepositoryError, RepositoryResult};
pub use order_repo::{OrderListFilter, OrderRepository};
