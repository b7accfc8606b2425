// ==========================================
// 货运物流客户门户 - 生命周期分类核心 (纯函数库)
// ==========================================
// 依据: Order_Lifecycle_Rules_v1.0.md - 1. 阶段判定规则
// 职责: 把若干独立更新的原始状态字段折算成唯一的生命周期阶段
// 红线: 全函数 —— 任意订单恰好映射到一个阶段,没有 "unknown" 输出,
//       分类失败永远不能阻断订单渲染
// 红线: 无状态、无副作用、无 I/O
// ==========================================

use crate::domain::order::OrderRecord;
use crate::domain::types::LifecycleStage;
use crate::engine::stage_rules::{DEFAULT_STAGE, ORDERED_RULES};

// ==========================================
// LifecycleCore - 纯函数工具类
// ==========================================
pub struct LifecycleCore;

impl LifecycleCore {
    /// 判定订单生命周期阶段
    ///
    /// # 规则 (Order_Lifecycle_Rules 1.1,自上而下,首个命中者胜出)
    /// 1. delivery ∈ {delivered, exception-closed} 或 overall ∈ {completed, archived, cancelled} → DELIVERED
    /// 2. delivery ∈ {dispatching, pending dispatch} → DISPATCHING
    /// 3. customs = released → CUSTOMS_RELEASED
    /// 4. customs ∈ {in customs, inspection} → CUSTOMS_IN_PROGRESS
    /// 5. ship = arrived → ARRIVED
    /// 6. 其余(空值/未知词/未到港/已发运/运输中) → NOT_ARRIVED
    ///
    /// # 说明
    /// 空值与未知词一律按"未设置"处理,绝不报错;
    /// 上游新增的状态词落入该字段的安全默认分支
    pub fn classify(order: &OrderRecord) -> LifecycleStage {
        for rule in &ORDERED_RULES {
            if rule.matches(order) {
                return rule.stage;
            }
        }
        DEFAULT_STAGE
    }

    /// 判定阶段并输出决策原因（审计/排障用）
    ///
    /// # 返回
    /// - (LifecycleStage, Vec<String>): 阶段 + 命中原因
    pub fn classify_explained(order: &OrderRecord) -> (LifecycleStage, Vec<String>) {
        for rule in &ORDERED_RULES {
            if let Some(atom) = rule.any_of.iter().find(|atom| atom.matches(order)) {
                let reason = format!(
                    "{}: {}={}",
                    rule.stage.to_db_str(),
                    atom.column(),
                    atom.value_display(order)
                );
                return (rule.stage, vec![reason]);
            }
        }
        let reason = format!(
            "{}: ship_status={} (默认)",
            DEFAULT_STAGE.to_db_str(),
            order.ship_status
        );
        (DEFAULT_STAGE, vec![reason])
    }
}
