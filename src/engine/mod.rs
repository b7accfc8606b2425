// ==========================================
// 货运物流客户门户 - 引擎层
// ==========================================
// 依据: Portal_Master_Spec.md - PART D 生命周期引擎
// ==========================================
// 职责: 生命周期分类、进度投影、聚合与趋势的纯业务规则
// 红线: Engine 不拼 SQL;所有判定从 stage_rules 的唯一规则表派生
// 红线: 纯同步计算,不持锁、不共享可变状态,调用间完全并行安全
// ==========================================

pub mod lifecycle_core;
pub mod progress;
pub mod stage_rules;
pub mod stats;
pub mod trend;

// 重导出核心引擎
pub use lifecycle_core::LifecycleCore;
pub use progress::{ProgressProjector, ProgressStep, ProgressStepKind, TOTAL_STEPS};
pub use stage_rules::{RuleAtom, StageRule, DEFAULT_STAGE, ORDERED_RULES};
pub use stats::{OrderStats, StageBucket};
pub use trend::{
    TrendAggregator, TrendDateField, TrendMonth, TrendReport, TrendSummary,
    DEFAULT_TREND_WINDOW_MONTHS,
};
