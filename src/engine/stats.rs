// ==========================================
// 货运物流客户门户 - 订单聚合统计
// ==========================================
// 依据: Order_Lifecycle_Rules_v1.0.md - 3. 驾驶舱聚合口径
// 职责: 对已取回的订单集合做进程内聚合
// 说明: 存储层的等价 SQL 口径见 repository::order_repo::count_order_stats,
//       两者共用 stage_rules 的规则表,不允许各写一份
// 红线: 无状态、无副作用、无 I/O
// ==========================================

use crate::domain::order::OrderRecord;
use crate::domain::types::LifecycleStage;
use crate::engine::lifecycle_core::LifecycleCore;
use serde::{Deserialize, Serialize};

// ==========================================
// OrderStats - 聚合统计结果
// ==========================================
// 不变量: total = in_progress + completed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: u64,
    pub in_progress: u64,
    pub completed: u64,
    /// 货量合计（缺失按 0 计）
    pub total_weight_kg: f64,
    pub total_volume_cbm: f64,
}

impl OrderStats {
    /// 全零形态（降级兜底,渲染安全）
    pub fn zero() -> Self {
        OrderStats {
            total: 0,
            in_progress: 0,
            completed: 0,
            total_weight_kg: 0.0,
            total_volume_cbm: 0.0,
        }
    }

    /// 对订单集合做进程内聚合
    ///
    /// # 口径
    /// - completed = classify(order) == DELIVERED 的订单数
    /// - in_progress = 其余订单数
    /// - 货量缺失按 0 汇总
    pub fn from_records(records: &[OrderRecord]) -> Self {
        let mut completed: u64 = 0;
        let mut total_weight_kg = 0.0;
        let mut total_volume_cbm = 0.0;

        for record in records {
            if LifecycleCore::classify(record) == LifecycleStage::Delivered {
                completed += 1;
            }
            total_weight_kg += record.weight_kg.unwrap_or(0.0);
            total_volume_cbm += record.volume_cbm.unwrap_or(0.0);
        }

        let total = records.len() as u64;
        OrderStats {
            total,
            in_progress: total - completed,
            completed,
            total_weight_kg,
            total_volume_cbm,
        }
    }
}

// ==========================================
// StageBucket - 阶段分布桶
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageBucket {
    pub stage: LifecycleStage,
    pub label: String,
    pub count: u64,
}

impl StageBucket {
    /// 六个全零桶（降级兜底）
    pub fn zero_buckets() -> Vec<StageBucket> {
        LifecycleStage::ALL
            .iter()
            .map(|stage| StageBucket {
                stage: *stage,
                label: stage.label().to_string(),
                count: 0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CustomsStatus, DeliveryStatus, DocSwapStatus, OverallStatus, ShipStatus,
    };

    fn order(delivery: DeliveryStatus, weight_kg: Option<f64>) -> OrderRecord {
        OrderRecord {
            id: "ORD001".to_string(),
            customer_id: "C001".to_string(),
            order_no: None,
            overall_status: OverallStatus::Processing,
            ship_status: ShipStatus::NotSet,
            customs_status: CustomsStatus::NotSet,
            delivery_status: delivery,
            doc_swap_status: DocSwapStatus::NotSet,
            etd: None,
            eta: None,
            ata: None,
            doc_swap_time: None,
            customs_release_time: None,
            weight_kg,
            volume_cbm: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_total_invariant() {
        let records = vec![
            order(DeliveryStatus::Delivered, Some(10.0)),
            order(DeliveryStatus::Dispatching, Some(20.0)),
            order(DeliveryStatus::NotSet, None),
        ];
        let stats = OrderStats::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.total, stats.in_progress + stats.completed);
    }

    #[test]
    fn test_missing_weight_counts_as_zero() {
        // 场景 D: 一单有重量一单缺失 → 合计 100
        let records = vec![
            order(DeliveryStatus::NotSet, Some(100.0)),
            order(DeliveryStatus::NotSet, None),
        ];
        let stats = OrderStats::from_records(&records);
        assert_eq!(stats.total_weight_kg, 100.0);
        assert_eq!(stats.total_volume_cbm, 0.0);
    }

    #[test]
    fn test_empty_collection() {
        let stats = OrderStats::from_records(&[]);
        assert_eq!(stats, OrderStats::zero());
    }

    #[test]
    fn test_zero_buckets_cover_all_stages() {
        let buckets = StageBucket::zero_buckets();
        assert_eq!(buckets.len(), 6);
        assert!(buckets.iter().all(|b| b.count == 0));
    }
}
