// ==========================================
// 货运物流客户门户 - 订单 API
// ==========================================
// 依据: Portal_Master_Spec.md - PART B 订单列表/详情
// 职责: 订单列表、进度详情、订单创建的对外接口
// 红线: 读接口对存储故障降级为空形态(告警日志),绝不向页面抛原始错误;
//       写接口不降级,错误如实上抛
// ==========================================

use crate::config::ConfigManager;
use crate::domain::order::OrderRecord;
use crate::domain::types::{
    CustomsStatus, DeliveryStatus, DocSwapStatus, LifecycleStage, OverallStatus, ShipStatus,
};
use crate::engine::lifecycle_core::LifecycleCore;
use crate::engine::progress::{ProgressProjector, ProgressStep, TOTAL_STEPS};
use crate::repository::{OrderListFilter, OrderRepository};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==========================================
// 对外数据结构
// ==========================================

/// 订单列表行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListItem {
    pub id: String,
    pub order_no: Option<String>,
    pub stage: LifecycleStage,
    /// 阶段展示标签
    pub stage_label: String,
    /// 阶段徽标样式类
    pub stage_color: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// 订单列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListQuery {
    pub stage: Option<LifecycleStage>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
    pub page_size: Option<u32>,
    pub offset: Option<u32>,
}

/// 订单进度视图（详情页时间轴）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderProgressView {
    pub order_id: String,
    pub steps: Vec<ProgressStep>,
    pub completed_count: usize,
    pub total_steps: usize,
    /// 首个未完成步骤下标（全部完成时为 None）
    pub current_step: Option<usize>,
}

impl OrderProgressView {
    /// 空形态（存储不可达时的降级兜底,时间轴全灰渲染安全）
    pub fn empty(order_id: &str) -> Self {
        OrderProgressView {
            order_id: order_id.to_string(),
            steps: Vec::new(),
            completed_count: 0,
            total_steps: TOTAL_STEPS,
            current_step: None,
        }
    }

    fn from_record(record: &OrderRecord) -> Self {
        let steps = ProgressProjector::project(record);
        let completed_count = ProgressProjector::completed_count(&steps);
        let current_step = ProgressProjector::current_step(&steps);
        OrderProgressView {
            order_id: record.id.clone(),
            steps: steps.to_vec(),
            completed_count,
            total_steps: TOTAL_STEPS,
            current_step,
        }
    }
}

/// 创建订单请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub order_no: Option<String>,
    pub weight_kg: Option<f64>,
    pub volume_cbm: Option<f64>,
    pub etd: Option<DateTime<Utc>>,
    pub eta: Option<DateTime<Utc>>,
}

// ==========================================
// OrderApi
// ==========================================
pub struct OrderApi {
    order_repo: Arc<OrderRepository>,
    config: Arc<ConfigManager>,
}

impl OrderApi {
    pub fn new(order_repo: Arc<OrderRepository>, config: Arc<ConfigManager>) -> Self {
        OrderApi { order_repo, config }
    }

    /// 查询客户订单列表
    ///
    /// # 降级
    /// 存储故障返回空列表并记录告警,页面照常渲染空态
    pub fn list_orders(&self, customer_id: &str, query: &OrderListQuery) -> Vec<OrderListItem> {
        if customer_id.trim().is_empty() {
            tracing::warn!("订单列表查询缺少客户 ID,返回空列表");
            return Vec::new();
        }

        let default_size = self.config.get_default_page_size();
        let max_size = self.config.get_max_page_size();
        let limit = query.page_size.unwrap_or(default_size).clamp(1, max_size);

        let filter = OrderListFilter {
            stage: query.stage,
            created_from: query.created_from,
            created_to: query.created_to,
            limit: Some(limit),
            offset: query.offset,
        };

        match self.order_repo.list_by_customer(customer_id, &filter) {
            Ok(records) => records
                .iter()
                .map(|record| {
                    let stage = LifecycleCore::classify(record);
                    OrderListItem {
                        id: record.id.clone(),
                        order_no: record.order_no.clone(),
                        stage,
                        stage_label: stage.label().to_string(),
                        stage_color: stage.color_class().to_string(),
                        created_at: record.created_at,
                    }
                })
                .collect(),
            Err(e) => {
                tracing::warn!("客户 {} 订单列表查询失败,降级为空列表: {}", customer_id, e);
                Vec::new()
            }
        }
    }

    /// 查询订单进度详情
    ///
    /// # 降级
    /// - 存储故障 → 空进度视图 + 告警日志
    /// - 订单不存在 → None（交由上层呈现"未找到",不算故障）
    pub fn get_order_progress(&self, order_id: &str) -> Option<OrderProgressView> {
        match self.order_repo.find_by_id(order_id) {
            Ok(Some(record)) => Some(OrderProgressView::from_record(&record)),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("订单 {} 进度查询失败,降级为空进度: {}", order_id, e);
                Some(OrderProgressView::empty(order_id))
            }
        }
    }

    /// 创建订单（写路径不降级）
    pub fn create_order(&self, request: &CreateOrderRequest) -> crate::api::ApiResult<OrderRecord> {
        if request.customer_id.trim().is_empty() {
            return Err(crate::api::ApiError::InvalidInput(
                "客户 ID 不能为空".to_string(),
            ));
        }

        let now = Utc::now();
        let record = OrderRecord {
            id: uuid::Uuid::new_v4().to_string(),
            customer_id: request.customer_id.trim().to_string(),
            order_no: request.order_no.clone(),
            overall_status: OverallStatus::Pending,
            ship_status: ShipStatus::NotSet,
            customs_status: CustomsStatus::NotSet,
            delivery_status: DeliveryStatus::NotSet,
            doc_swap_status: DocSwapStatus::NotSet,
            etd: request.etd,
            eta: request.eta,
            ata: None,
            doc_swap_time: None,
            customs_release_time: None,
            weight_kg: request.weight_kg,
            volume_cbm: request.volume_cbm,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.order_repo.insert_order(&record)?;
        tracing::info!("客户 {} 创建订单 {}", record.customer_id, record.id);
        Ok(record)
    }
}
