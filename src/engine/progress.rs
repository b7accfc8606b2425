// ==========================================
// 货运物流客户门户 - 进度投影 (详情页时间轴)
// ==========================================
// 依据: Order_Lifecycle_Rules_v1.0.md - 2. 里程碑完成判定
// 职责: 把订单投影为 6 个固定里程碑,供详情页时间轴渲染
// 红线: 每个里程碑按自身证据独立判定,与阶段分类解耦 ——
//       后续节点完成不回写前序节点,已签收订单六格全勾
// 红线: 无状态、无副作用、无 I/O
// ==========================================

use crate::domain::order::OrderRecord;
use crate::domain::types::{CustomsStatus, DeliveryStatus, DocSwapStatus, OverallStatus, ShipStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 固定里程碑数
pub const TOTAL_STEPS: usize = 6;

// ==========================================
// ProgressStepKind - 里程碑类型
// ==========================================
// 固定顺序: 受理 → 发运 → 到港 → 换单 → 清关 → 签收
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressStepKind {
    Accepted,           // 已受理
    Shipped,            // 已发运
    Arrived,            // 已到港
    DocumentsExchanged, // 已换单
    CustomsCleared,     // 清关放行
    Delivered,          // 已签收
}

impl ProgressStepKind {
    /// 全部里程碑,固定展示顺序
    pub const ALL: [ProgressStepKind; TOTAL_STEPS] = [
        ProgressStepKind::Accepted,
        ProgressStepKind::Shipped,
        ProgressStepKind::Arrived,
        ProgressStepKind::DocumentsExchanged,
        ProgressStepKind::CustomsCleared,
        ProgressStepKind::Delivered,
    ];

    /// 时间轴展示标签
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStepKind::Accepted => "accepted",
            ProgressStepKind::Shipped => "shipped",
            ProgressStepKind::Arrived => "arrived",
            ProgressStepKind::DocumentsExchanged => "documents exchanged",
            ProgressStepKind::CustomsCleared => "customs cleared",
            ProgressStepKind::Delivered => "delivered",
        }
    }
}

// ==========================================
// ProgressStep - 单个里程碑
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressStep {
    pub kind: ProgressStepKind,
    pub label: String,
    pub completed: bool,
    /// 发生时间（缺失 = 完成但无时间,或尚未发生）
    pub occurred_at: Option<DateTime<Utc>>,
}

// ==========================================
// ProgressProjector - 纯函数工具类
// ==========================================
pub struct ProgressProjector;

impl ProgressProjector {
    /// 订单 → 6 个固定里程碑
    ///
    /// # 完成判定 (Order_Lifecycle_Rules 2.1,逐项独立)
    /// - accepted: 恒为完成,时间 = created_at
    /// - shipped: etd 存在,时间 = etd
    /// - arrived: ship_status = arrived 或 ata 存在,时间 = ata
    /// - documents exchanged: doc_swap_status = completed,时间 = doc_swap_time
    /// - customs cleared: customs_status = released,时间 = customs_release_time
    /// - delivered: delivery_status = delivered 或 overall_status = completed,
    ///   时间 = 满足条件时取 updated_at,否则为空
    pub fn project(order: &OrderRecord) -> [ProgressStep; TOTAL_STEPS] {
        let delivered_done = order.delivery_status == DeliveryStatus::Delivered
            || order.overall_status == OverallStatus::Completed;

        let step = |kind: ProgressStepKind, completed: bool, occurred_at: Option<DateTime<Utc>>| {
            ProgressStep {
                kind,
                label: kind.label().to_string(),
                completed,
                occurred_at,
            }
        };

        [
            step(ProgressStepKind::Accepted, true, order.created_at),
            step(ProgressStepKind::Shipped, order.etd.is_some(), order.etd),
            step(
                ProgressStepKind::Arrived,
                order.ship_status == ShipStatus::Arrived || order.ata.is_some(),
                order.ata,
            ),
            step(
                ProgressStepKind::DocumentsExchanged,
                order.doc_swap_status == DocSwapStatus::Completed,
                order.doc_swap_time,
            ),
            step(
                ProgressStepKind::CustomsCleared,
                order.customs_status == CustomsStatus::Released,
                order.customs_release_time,
            ),
            step(
                ProgressStepKind::Delivered,
                delivered_done,
                if delivered_done { order.updated_at } else { None },
            ),
        ]
    }

    /// 当前高亮步骤 = 首个未完成的里程碑;全部完成时无当前步骤
    pub fn current_step(steps: &[ProgressStep]) -> Option<usize> {
        steps.iter().position(|s| !s.completed)
    }

    /// 已完成里程碑数
    pub fn completed_count(steps: &[ProgressStep]) -> usize {
        steps.iter().filter(|s| s.completed).count()
    }
}
