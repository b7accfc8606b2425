// ==========================================
// 货运物流客户门户 - 订单领域模型
// ==========================================
// 依据: Portal_Master_Spec.md - PART C 数据与状态体系
// 依据: Order_Store_Field_Mapping_v1.0.md - 字段映射规范
// ==========================================
// 红线: 订单读模型由外部 ERP / 下单流程写入,引擎层只读
// ==========================================

use crate::domain::types::{
    CustomsStatus, DeliveryStatus, DocSwapStatus, OverallStatus, ShipStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// OrderRecord - 订单读模型
// ==========================================
// 对齐: orders 表
// 说明: 各状态字段由 ERP 在不同时点独立更新,可能缺失或过期;
//       时间戳缺失表示"尚未发生",不是错误
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    // ===== 主键与归属 =====
    pub id: String,          // 订单唯一标识
    pub customer_id: String, // 归属客户（主账号）

    // ===== 基础信息 =====
    pub order_no: Option<String>, // 业务单号（提单号/委托号）

    // ===== 原始状态字段（ERP 独立更新）=====
    pub overall_status: OverallStatus,   // 总状态（兜底字段）
    pub ship_status: ShipStatus,         // 海/空运段状态
    pub customs_status: CustomsStatus,   // 清关状态
    pub delivery_status: DeliveryStatus, // 末端配送状态
    pub doc_swap_status: DocSwapStatus,  // 换单状态

    // ===== 节点时间（缺失 = 尚未发生）=====
    pub etd: Option<DateTime<Utc>>,                  // 预计离港时间
    pub eta: Option<DateTime<Utc>>,                  // 预计到港时间
    pub ata: Option<DateTime<Utc>>,                  // 实际到港时间
    pub doc_swap_time: Option<DateTime<Utc>>,        // 换单完成时间
    pub customs_release_time: Option<DateTime<Utc>>, // 海关放行时间

    // ===== 货量 =====
    pub weight_kg: Option<f64>,  // 毛重（kg,缺失按 0 汇总）
    pub volume_cbm: Option<f64>, // 体积（m³,缺失按 0 汇总）

    // ===== 审计字段 =====
    pub created_at: Option<DateTime<Utc>>, // 下单时间
    pub updated_at: Option<DateTime<Utc>>, // 最后更新时间
}

impl OrderRecord {
    /// 上游数据完整性检查: 标识字段缺失即为坏数据
    ///
    /// 说明: 坏数据不阻断分类与展示,仅用于告警口径
    pub fn is_malformed(&self) -> bool {
        self.id.trim().is_empty() || self.customer_id.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_order() -> OrderRecord {
        OrderRecord {
            id: "ORD001".to_string(),
            customer_id: "C001".to_string(),
            order_no: None,
            overall_status: OverallStatus::NotSet,
            ship_status: ShipStatus::NotSet,
            customs_status: CustomsStatus::NotSet,
            delivery_status: DeliveryStatus::NotSet,
            doc_swap_status: DocSwapStatus::NotSet,
            etd: None,
            eta: None,
            ata: None,
            doc_swap_time: None,
            customs_release_time: None,
            weight_kg: None,
            volume_cbm: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_is_malformed() {
        let ok = blank_order();
        assert!(!ok.is_malformed());

        let mut bad = blank_order();
        bad.id = "  ".to_string();
        assert!(bad.is_malformed());

        let mut bad = blank_order();
        bad.customer_id = String::new();
        assert!(bad.is_malformed());
    }
}
