// ==========================================
// 货运物流客户门户 - 驾驶舱 API
// ==========================================
// 依据: Portal_Master_Spec.md - PART C 驾驶舱
// 职责: 统计卡片、月度趋势、阶段分布的对外接口
// 红线: 存储故障一律降级为全零形态 + 告警日志,驾驶舱永不白屏
// ==========================================

use crate::config::ConfigManager;
use crate::engine::stats::{OrderStats, StageBucket};
use crate::engine::trend::{TrendAggregator, TrendDateField, TrendReport};
use crate::repository::{OrderListFilter, OrderRepository};
use chrono::Local;
use std::sync::Arc;

pub struct DashboardApi {
    order_repo: Arc<OrderRepository>,
    config: Arc<ConfigManager>,
}

impl DashboardApi {
    pub fn new(order_repo: Arc<OrderRepository>, config: Arc<ConfigManager>) -> Self {
        DashboardApi { order_repo, config }
    }

    /// 驾驶舱统计卡片（SQL 口径,单条查询）
    ///
    /// # 降级
    /// 存储故障返回全零统计并记录告警
    pub fn get_order_stats(&self, customer_id: &str) -> OrderStats {
        match self.order_repo.count_order_stats(customer_id) {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!("客户 {} 统计查询失败,降级为全零: {}", customer_id, e);
                OrderStats::zero()
            }
        }
    }

    /// 月度趋势（窗口月数取配置,默认滚动 12 个月）
    ///
    /// # 降级
    /// 存储故障返回全零补齐的窗口形态,图表照常渲染
    pub fn get_monthly_trend(&self, customer_id: &str, date_field: TrendDateField) -> TrendReport {
        let today = Local::now().date_naive();
        let window_months = self.config.get_trend_window_months();

        // 趋势在进程内归月: 不分页取全量,窗口外订单由聚合器自行排除
        let filter = OrderListFilter::default();
        match self.order_repo.list_by_customer(customer_id, &filter) {
            Ok(records) => TrendAggregator::aggregate(&records, date_field, today, window_months),
            Err(e) => {
                tracing::warn!("客户 {} 趋势查询失败,降级为全零窗口: {}", customer_id, e);
                TrendReport::zero_filled(today, window_months)
            }
        }
    }

    /// 阶段分布（六桶齐全,空桶为 0）
    pub fn get_stage_breakdown(&self, customer_id: &str) -> Vec<StageBucket> {
        match self.order_repo.count_stage_breakdown(customer_id) {
            Ok(buckets) => buckets,
            Err(e) => {
                tracing::warn!("客户 {} 阶段分布查询失败,降级为全零桶: {}", customer_id, e);
                StageBucket::zero_buckets()
            }
        }
    }
}
