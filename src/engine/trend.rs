// ==========================================
// 货运物流客户门户 - 月度趋势聚合
// ==========================================
// 依据: Order_Lifecycle_Rules_v1.0.md - 4. 驾驶舱趋势口径
// 职责: 按日历月对订单分桶,产出滚动 12 个月趋势(空月补零)
// 红线: 归月字段缺失的订单整体排除 —— 不允许用缺失时间戳猜桶
// 红线: 无状态、无副作用、无 I/O
// ==========================================

use crate::domain::order::OrderRecord;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 默认趋势窗口(月)
pub const DEFAULT_TREND_WINDOW_MONTHS: u32 = 12;

// ==========================================
// TrendDateField - 归月字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDateField {
    /// 按下单时间归月
    Created,
    /// 按海关放行时间归月
    CustomsRelease,
}

impl TrendDateField {
    /// 取订单上的归月时间（缺失 = 该订单不入任何桶）
    pub fn pick(&self, order: &OrderRecord) -> Option<DateTime<Utc>> {
        match self {
            TrendDateField::Created => order.created_at,
            TrendDateField::CustomsRelease => order.customs_release_time,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CREATED" => Some(TrendDateField::Created),
            "CUSTOMS_RELEASE" => Some(TrendDateField::CustomsRelease),
            _ => None,
        }
    }
}

// ==========================================
// 趋势报表结构
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendMonth {
    /// 月份键,格式 "YYYY-MM"
    pub month: String,
    /// 展示标签,格式 "N月"
    pub label: String,
    pub count: u64,
    pub weight_kg: f64,
    pub volume_cbm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub count: u64,
    pub weight_kg: f64,
    pub volume_cbm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub months: Vec<TrendMonth>,
    pub summary: TrendSummary,
}

impl TrendReport {
    /// 全零补齐的窗口形态（存储不可达时的降级兜底,渲染安全）
    pub fn zero_filled(today: NaiveDate, window_months: u32) -> Self {
        let months = TrendAggregator::month_window(today, window_months)
            .into_iter()
            .map(|(year, month)| TrendMonth {
                month: format!("{:04}-{:02}", year, month),
                label: format!("{}月", month),
                count: 0,
                weight_kg: 0.0,
                volume_cbm: 0.0,
            })
            .collect();
        TrendReport {
            months,
            summary: TrendSummary {
                count: 0,
                weight_kg: 0.0,
                volume_cbm: 0.0,
            },
        }
    }
}

// ==========================================
// TrendAggregator - 纯函数工具类
// ==========================================
pub struct TrendAggregator;

impl TrendAggregator {
    /// 以当前月为末端的滚动月窗口,升序返回 (year, month)
    pub fn month_window(today: NaiveDate, window_months: u32) -> Vec<(i32, u32)> {
        let mut year = today.year();
        let mut month = today.month();
        let mut months = Vec::with_capacity(window_months as usize);
        for _ in 0..window_months {
            months.push((year, month));
            if month == 1 {
                month = 12;
                year -= 1;
            } else {
                month -= 1;
            }
        }
        months.reverse();
        months
    }

    /// 按归月字段对订单分桶
    ///
    /// # 规则
    /// - 窗口 = 以当前月(含)为末端的 window_months 个日历月,空月补零不省略
    /// - 归月字段缺失的订单整体排除
    /// - 窗口之外的订单不入任何桶
    /// - summary 独立遍历计算(测试断言其等于分桶之和)
    pub fn aggregate(
        records: &[OrderRecord],
        date_field: TrendDateField,
        today: NaiveDate,
        window_months: u32,
    ) -> TrendReport {
        let window = Self::month_window(today, window_months);
        let index: HashMap<(i32, u32), usize> = window
            .iter()
            .enumerate()
            .map(|(i, key)| (*key, i))
            .collect();

        let mut months: Vec<TrendMonth> = window
            .iter()
            .map(|(year, month)| TrendMonth {
                month: format!("{:04}-{:02}", year, month),
                label: format!("{}月", month),
                count: 0,
                weight_kg: 0.0,
                volume_cbm: 0.0,
            })
            .collect();

        for record in records {
            let Some(occurred) = date_field.pick(record) else {
                continue;
            };
            let key = (occurred.year(), occurred.month());
            let Some(&slot) = index.get(&key) else {
                continue;
            };
            months[slot].count += 1;
            months[slot].weight_kg += record.weight_kg.unwrap_or(0.0);
            months[slot].volume_cbm += record.volume_cbm.unwrap_or(0.0);
        }

        // summary 独立计算,不从分桶回加
        let mut summary = TrendSummary {
            count: 0,
            weight_kg: 0.0,
            volume_cbm: 0.0,
        };
        for record in records {
            let Some(occurred) = date_field.pick(record) else {
                continue;
            };
            if !index.contains_key(&(occurred.year(), occurred.month())) {
                continue;
            }
            summary.count += 1;
            summary.weight_kg += record.weight_kg.unwrap_or(0.0);
            summary.volume_cbm += record.volume_cbm.unwrap_or(0.0);
        }

        TrendReport { months, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CustomsStatus, DeliveryStatus, DocSwapStatus, OverallStatus, ShipStatus,
    };
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
    }

    fn order(created_at: Option<DateTime<Utc>>, weight_kg: Option<f64>) -> OrderRecord {
        OrderRecord {
            id: "ORD001".to_string(),
            customer_id: "C001".to_string(),
            order_no: None,
            overall_status: OverallStatus::Processing,
            ship_status: ShipStatus::NotSet,
            customs_status: CustomsStatus::NotSet,
            delivery_status: DeliveryStatus::NotSet,
            doc_swap_status: DocSwapStatus::NotSet,
            etd: None,
            eta: None,
            ata: None,
            doc_swap_time: None,
            customs_release_time: None,
            weight_kg,
            volume_cbm: None,
            created_at,
            updated_at: None,
        }
    }

    #[test]
    fn test_month_window_spans_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let window = TrendAggregator::month_window(today, 12);
        assert_eq!(window.len(), 12);
        assert_eq!(window[0], (2025, 4)); // 最早月
        assert_eq!(window[11], (2026, 3)); // 当前月(含)
    }

    #[test]
    fn test_zero_filled_months_not_omitted() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let report = TrendAggregator::aggregate(&[], TrendDateField::Created, today, 12);
        assert_eq!(report.months.len(), 12);
        assert!(report.months.iter().all(|m| m.count == 0));
        assert_eq!(report.months[11].month, "2026-08");
        assert_eq!(report.months[11].label, "8月");
        assert_eq!(report.summary.count, 0);
    }

    #[test]
    fn test_record_13_months_old_excluded() {
        // 13 个月前的订单不得出现在任何桶
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let records = vec![order(Some(ts(2025, 7, 1)), Some(50.0))];
        let report = TrendAggregator::aggregate(&records, TrendDateField::Created, today, 12);
        assert!(report.months.iter().all(|m| m.count == 0));
        assert_eq!(report.summary.count, 0);
    }

    #[test]
    fn test_record_missing_date_field_excluded() {
        // created_at 缺失 + 按下单时间归月 → 不入任何桶
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let records = vec![order(None, Some(50.0))];
        let report = TrendAggregator::aggregate(&records, TrendDateField::Created, today, 12);
        assert!(report.months.iter().all(|m| m.count == 0));
        assert_eq!(report.summary.count, 0);
    }

    #[test]
    fn test_window_edges_inclusive() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let records = vec![
            order(Some(ts(2025, 9, 1)), Some(10.0)),  // 窗口最早月
            order(Some(ts(2026, 8, 31)), Some(20.0)), // 当前月
            order(Some(ts(2025, 8, 31)), Some(99.0)), // 窗口前一月,排除
        ];
        let report = TrendAggregator::aggregate(&records, TrendDateField::Created, today, 12);
        assert_eq!(report.months[0].month, "2025-09");
        assert_eq!(report.months[0].count, 1);
        assert_eq!(report.months[11].count, 1);
        assert_eq!(report.summary.count, 2);
        assert_eq!(report.summary.weight_kg, 30.0);
    }

    #[test]
    fn test_summary_matches_bucket_sum() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let records = vec![
            order(Some(ts(2026, 5, 3)), Some(10.0)),
            order(Some(ts(2026, 5, 20)), None),
            order(Some(ts(2026, 8, 1)), Some(5.5)),
            order(None, Some(7.0)),
        ];
        let report = TrendAggregator::aggregate(&records, TrendDateField::Created, today, 12);
        let bucket_count: u64 = report.months.iter().map(|m| m.count).sum();
        let bucket_weight: f64 = report.months.iter().map(|m| m.weight_kg).sum();
        assert_eq!(report.summary.count, bucket_count);
        assert!((report.summary.weight_kg - bucket_weight).abs() < 1e-9);
    }

    #[test]
    fn test_customs_release_field() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let mut record = order(Some(ts(2026, 1, 1)), Some(10.0));
        record.customs_release_time = Some(ts(2026, 6, 15));
        let report =
            TrendAggregator::aggregate(&[record], TrendDateField::CustomsRelease, today, 12);
        let june = report
            .months
            .iter()
            .find(|m| m.month == "2026-06")
            .expect("窗口应包含 2026-06");
        assert_eq!(june.count, 1);
    }

    #[test]
    fn test_zero_filled_shape() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let report = TrendReport::zero_filled(today, 12);
        assert_eq!(report.months.len(), 12);
        assert_eq!(report.summary.count, 0);
        // 降级形态与空集合聚合形态一致
        let aggregated = TrendAggregator::aggregate(&[], TrendDateField::Created, today, 12);
        assert_eq!(report, aggregated);
    }
}
