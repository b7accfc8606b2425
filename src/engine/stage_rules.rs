// ==========================================
// 货运物流客户门户 - 阶段规则表 (唯一事实层)
// ==========================================
// 依据: Order_Lifecycle_Rules_v1.0.md - 1. 阶段判定规则
// ==========================================
// 红线: 规则 1-6 在本文件只写一遍 ——
//       进程内分类 (lifecycle_core) 与存储层谓词 (repository::stage_filter)
//       都从这张表派生,列表过滤/聚合计数/逐单分类永不漂移
// 红线: 无状态、无副作用、无 I/O
// ==========================================

use crate::domain::order::OrderRecord;
use crate::domain::types::{
    CustomsStatus, DeliveryStatus, LifecycleStage, OverallStatus, ShipStatus,
};

// ==========================================
// 成员集合 (规则 1-5 的字段词集)
// ==========================================

/// 规则 1a: 配送终态
pub const TERMINAL_DELIVERY: [DeliveryStatus; 2] =
    [DeliveryStatus::Delivered, DeliveryStatus::ExceptionClosed];

/// 规则 1b: 总状态终态
///
/// 注意: 已归档/已取消 与 已完成 同归"已完结"桶 —— 与线上口径保持一致,
/// "成功完结"与"中途废弃"是否拆分待产品确认,勿擅自改桶
pub const CLOSED_OVERALL: [OverallStatus; 3] = [
    OverallStatus::Completed,
    OverallStatus::Archived,
    OverallStatus::Cancelled,
];

/// 规则 2: 派送流程中
pub const DISPATCH_DELIVERY: [DeliveryStatus; 2] =
    [DeliveryStatus::Dispatching, DeliveryStatus::PendingDispatch];

/// 规则 3: 海关已放行
pub const RELEASED_CUSTOMS: [CustomsStatus; 1] = [CustomsStatus::Released];

/// 规则 4: 清关流程中
pub const ACTIVE_CUSTOMS: [CustomsStatus; 2] =
    [CustomsStatus::InCustoms, CustomsStatus::Inspection];

/// 规则 5: 已到港
pub const ARRIVED_SHIP: [ShipStatus; 1] = [ShipStatus::Arrived];

// ==========================================
// RuleAtom - 单字段成员判定
// ==========================================
// 同一原子既能在进程内匹配订单,也能报出列名与词集供 SQL 编译
#[derive(Debug, Clone, Copy)]
pub enum RuleAtom {
    Overall(&'static [OverallStatus]),
    Ship(&'static [ShipStatus]),
    Customs(&'static [CustomsStatus]),
    Delivery(&'static [DeliveryStatus]),
}

impl RuleAtom {
    /// 对应的 orders 表列名
    pub fn column(&self) -> &'static str {
        match self {
            RuleAtom::Overall(_) => "overall_status",
            RuleAtom::Ship(_) => "ship_status",
            RuleAtom::Customs(_) => "customs_status",
            RuleAtom::Delivery(_) => "delivery_status",
        }
    }

    /// 词集的规范状态词（SQL IN 列表用）
    pub fn tokens(&self) -> Vec<&'static str> {
        match self {
            RuleAtom::Overall(set) => set.iter().map(|s| s.token()).collect(),
            RuleAtom::Ship(set) => set.iter().map(|s| s.token()).collect(),
            RuleAtom::Customs(set) => set.iter().map(|s| s.token()).collect(),
            RuleAtom::Delivery(set) => set.iter().map(|s| s.token()).collect(),
        }
    }

    /// 进程内成员判定
    pub fn matches(&self, order: &OrderRecord) -> bool {
        match self {
            RuleAtom::Overall(set) => set.contains(&order.overall_status),
            RuleAtom::Ship(set) => set.contains(&order.ship_status),
            RuleAtom::Customs(set) => set.contains(&order.customs_status),
            RuleAtom::Delivery(set) => set.contains(&order.delivery_status),
        }
    }

    /// 订单上该字段的当前值（决策原因输出用）
    pub fn value_display(&self, order: &OrderRecord) -> String {
        match self {
            RuleAtom::Overall(_) => order.overall_status.to_string(),
            RuleAtom::Ship(_) => order.ship_status.to_string(),
            RuleAtom::Customs(_) => order.customs_status.to_string(),
            RuleAtom::Delivery(_) => order.delivery_status.to_string(),
        }
    }
}

// ==========================================
// StageRule - 阶段判定规则
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct StageRule {
    pub stage: LifecycleStage,
    /// 任一原子命中即命中本规则 (OR 语义)
    pub any_of: &'static [RuleAtom],
}

impl StageRule {
    pub fn matches(&self, order: &OrderRecord) -> bool {
        self.any_of.iter().any(|atom| atom.matches(order))
    }
}

/// 规则 1-5,按业务优先级降序;首个命中者胜出
///
/// 顺序编码业务优先级而非便利性: 终态压过一切
/// (例: 人工闭单后 ERP 遗留的 customs_status 过期值不得把订单报成"清关中")
pub static ORDERED_RULES: [StageRule; 5] = [
    StageRule {
        stage: LifecycleStage::Delivered,
        any_of: &[
            RuleAtom::Delivery(&TERMINAL_DELIVERY),
            RuleAtom::Overall(&CLOSED_OVERALL),
        ],
    },
    StageRule {
        stage: LifecycleStage::Dispatching,
        any_of: &[RuleAtom::Delivery(&DISPATCH_DELIVERY)],
    },
    StageRule {
        stage: LifecycleStage::CustomsReleased,
        any_of: &[RuleAtom::Customs(&RELEASED_CUSTOMS)],
    },
    StageRule {
        stage: LifecycleStage::CustomsInProgress,
        any_of: &[RuleAtom::Customs(&ACTIVE_CUSTOMS)],
    },
    StageRule {
        stage: LifecycleStage::Arrived,
        any_of: &[RuleAtom::Ship(&ARRIVED_SHIP)],
    },
];

/// 规则 6: 兜底阶段
///
/// 未到港/已发运/运输中/空值/未知词统一归入"未到港" ——
/// 面向客户的刻意粗化,不是缺陷
pub const DEFAULT_STAGE: LifecycleStage = LifecycleStage::NotArrived;
