// ==========================================
// 货运物流客户门户 - 阶段谓词编译 (SQL 侧)
// ==========================================
// 依据: Order_Lifecycle_Rules_v1.0.md - 1. 阶段判定规则
// 职责: 把 engine::stage_rules 的唯一规则表编译为 SQLite WHERE 片段,
//       供列表过滤与聚合计数复用 —— 规则语义绝不在本文件重写
// ==========================================
// NULL 口径: 列值统一套 LOWER(TRIM(COALESCE(col, ''))),
//            NULL/空串/未知词都落在 IN 列表之外 —— 与进程内
//            from_raw 的 NotSet/Unrecognized 口径逐字对齐。
//            (直接 NOT IN 会让 NULL 行整体丢失,这是最容易复发的回归)
// ==========================================

use crate::domain::types::LifecycleStage;
use crate::engine::stage_rules::{RuleAtom, StageRule, DEFAULT_STAGE, ORDERED_RULES};

/// 列值规范化表达式（与进程内 normalize_raw 同一口径）
fn status_expr(column: &str) -> String {
    format!("LOWER(TRIM(COALESCE({}, '')))", column)
}

/// 单字段成员谓词: LOWER(TRIM(COALESCE(col,''))) IN ('a', 'b')
fn atom_sql(atom: &RuleAtom) -> String {
    let tokens: Vec<String> = atom
        .tokens()
        .iter()
        .map(|token| format!("'{}'", token))
        .collect();
    format!("{} IN ({})", status_expr(atom.column()), tokens.join(", "))
}

/// 单条规则谓词（原子间 OR,整体带括号）
fn rule_sql(rule: &StageRule) -> String {
    let atoms: Vec<String> = rule.any_of.iter().map(atom_sql).collect();
    format!("({})", atoms.join(" OR "))
}

/// "已完结"谓词 = 规则 1 —— 驾驶舱 completed/in_progress 二分的唯一口径
pub fn completed_predicate_sql() -> String {
    let rule = ORDERED_RULES
        .iter()
        .find(|r| r.stage == LifecycleStage::Delivered);
    match rule {
        Some(rule) => rule_sql(rule),
        // 规则表由单元测试保证覆盖全部非默认阶段,此分支不可达
        None => "(0 = 1)".to_string(),
    }
}

/// 指定阶段的完整谓词
///
/// # 规则
/// - 阶段 k = 命中自身规则 且 未命中更高优先级规则（首个命中者胜出的 SQL 等价式）
/// - 兜底阶段 NOT_ARRIVED = 未命中任何规则
pub fn stage_predicate_sql(stage: LifecycleStage) -> String {
    let mut clauses: Vec<String> = Vec::new();
    for rule in &ORDERED_RULES {
        if rule.stage == stage {
            clauses.push(rule_sql(rule));
            return clauses.join(" AND ");
        }
        clauses.push(format!("NOT {}", rule_sql(rule)));
    }
    debug_assert_eq!(stage, DEFAULT_STAGE);
    clauses.join(" AND ")
}
