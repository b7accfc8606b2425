// ==========================================
// 货运物流客户门户 - 领域类型定义
// ==========================================
// 依据: Portal_Master_Spec.md - PART C 订单状态体系
// 依据: Order_Lifecycle_Rules_v1.0.md - 0.2 状态字段全集
// ==========================================
// 红线: 状态字段建模为带兜底变体的枚举,不允许裸字符串
// 说明: 原始状态由外部 ERP 写入,可能为空、过期或出现未知词,
//       解析永不失败 —— 未知词归入 Unrecognized,空值归入 NotSet
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 统一的原始状态词规范化: 去首尾空白 + 小写
///
/// 与 SQL 侧的 LOWER(TRIM(...)) 保持同一口径（等价性前提）
fn normalize_raw(s: &str) -> String {
    s.trim().to_lowercase()
}

// ==========================================
// 总状态 (Overall Status)
// ==========================================
// ERP 的兜底状态字段,新订单可能为空
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallStatus {
    #[serde(rename = "pending")]
    Pending, // 待处理
    #[serde(rename = "processing")]
    Processing, // 处理中
    #[serde(rename = "completed")]
    Completed, // 已完成
    #[serde(rename = "archived")]
    Archived, // 已归档
    #[serde(rename = "cancelled")]
    Cancelled, // 已取消
    #[serde(rename = "rejected")]
    Rejected, // 已驳回
    #[serde(rename = "not set")]
    NotSet, // 空值/未设置
    #[serde(rename = "unrecognized")]
    Unrecognized, // 未知词(上游新增状态兜底)
}

impl OverallStatus {
    /// 从原始字段解析（空值/空白 → NotSet,未知词 → Unrecognized）
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(s) = raw else {
            return OverallStatus::NotSet;
        };
        let s = normalize_raw(s);
        match s.as_str() {
            "" => OverallStatus::NotSet,
            "pending" => OverallStatus::Pending,
            "processing" => OverallStatus::Processing,
            "completed" => OverallStatus::Completed,
            "archived" => OverallStatus::Archived,
            "cancelled" => OverallStatus::Cancelled,
            "rejected" => OverallStatus::Rejected,
            _ => OverallStatus::Unrecognized,
        }
    }

    /// 数据库中的规范状态词（兜底变体无规范词,返回空串）
    pub fn token(&self) -> &'static str {
        match self {
            OverallStatus::Pending => "pending",
            OverallStatus::Processing => "processing",
            OverallStatus::Completed => "completed",
            OverallStatus::Archived => "archived",
            OverallStatus::Cancelled => "cancelled",
            OverallStatus::Rejected => "rejected",
            OverallStatus::NotSet | OverallStatus::Unrecognized => "",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::NotSet => write!(f, "not set"),
            OverallStatus::Unrecognized => write!(f, "unrecognized"),
            _ => write!(f, "{}", self.token()),
        }
    }
}

// ==========================================
// 海/空运段状态 (Ship Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipStatus {
    #[serde(rename = "not arrived")]
    NotArrived, // 未到港
    #[serde(rename = "shipped")]
    Shipped, // 已发运
    #[serde(rename = "in transit")]
    InTransit, // 运输中
    #[serde(rename = "arrived")]
    Arrived, // 已到港
    #[serde(rename = "not set")]
    NotSet,
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl ShipStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(s) = raw else {
            return ShipStatus::NotSet;
        };
        let s = normalize_raw(s);
        match s.as_str() {
            "" => ShipStatus::NotSet,
            "not arrived" => ShipStatus::NotArrived,
            "shipped" => ShipStatus::Shipped,
            "in transit" => ShipStatus::InTransit,
            "arrived" => ShipStatus::Arrived,
            _ => ShipStatus::Unrecognized,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            ShipStatus::NotArrived => "not arrived",
            ShipStatus::Shipped => "shipped",
            ShipStatus::InTransit => "in transit",
            ShipStatus::Arrived => "arrived",
            ShipStatus::NotSet | ShipStatus::Unrecognized => "",
        }
    }
}

impl fmt::Display for ShipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipStatus::NotSet => write!(f, "not set"),
            ShipStatus::Unrecognized => write!(f, "unrecognized"),
            _ => write!(f, "{}", self.token()),
        }
    }
}

// ==========================================
// 清关状态 (Customs Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomsStatus {
    #[serde(rename = "in customs")]
    InCustoms, // 清关中
    #[serde(rename = "inspection")]
    Inspection, // 查验中
    #[serde(rename = "released")]
    Released, // 已放行
    #[serde(rename = "not set")]
    NotSet,
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl CustomsStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(s) = raw else {
            return CustomsStatus::NotSet;
        };
        let s = normalize_raw(s);
        match s.as_str() {
            "" => CustomsStatus::NotSet,
            "in customs" => CustomsStatus::InCustoms,
            "inspection" => CustomsStatus::Inspection,
            "released" => CustomsStatus::Released,
            _ => CustomsStatus::Unrecognized,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            CustomsStatus::InCustoms => "in customs",
            CustomsStatus::Inspection => "inspection",
            CustomsStatus::Released => "released",
            CustomsStatus::NotSet | CustomsStatus::Unrecognized => "",
        }
    }
}

impl fmt::Display for CustomsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomsStatus::NotSet => write!(f, "not set"),
            CustomsStatus::Unrecognized => write!(f, "unrecognized"),
            _ => write!(f, "{}", self.token()),
        }
    }
}

// ==========================================
// 末端配送状态 (Delivery Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "pending dispatch")]
    PendingDispatch, // 待派送
    #[serde(rename = "dispatching")]
    Dispatching, // 派送中
    #[serde(rename = "delivered")]
    Delivered, // 已签收
    #[serde(rename = "exception-closed")]
    ExceptionClosed, // 异常闭单
    #[serde(rename = "not set")]
    NotSet,
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl DeliveryStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(s) = raw else {
            return DeliveryStatus::NotSet;
        };
        let s = normalize_raw(s);
        match s.as_str() {
            "" => DeliveryStatus::NotSet,
            "pending dispatch" => DeliveryStatus::PendingDispatch,
            "dispatching" => DeliveryStatus::Dispatching,
            "delivered" => DeliveryStatus::Delivered,
            "exception-closed" => DeliveryStatus::ExceptionClosed,
            _ => DeliveryStatus::Unrecognized,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            DeliveryStatus::PendingDispatch => "pending dispatch",
            DeliveryStatus::Dispatching => "dispatching",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::ExceptionClosed => "exception-closed",
            DeliveryStatus::NotSet | DeliveryStatus::Unrecognized => "",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStatus::NotSet => write!(f, "not set"),
            DeliveryStatus::Unrecognized => write!(f, "unrecognized"),
            _ => write!(f, "{}", self.token()),
        }
    }
}

// ==========================================
// 换单状态 (Doc Swap Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocSwapStatus {
    #[serde(rename = "in progress")]
    InProgress, // 换单中
    #[serde(rename = "completed")]
    Completed, // 已换单
    #[serde(rename = "not set")]
    NotSet,
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl DocSwapStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(s) = raw else {
            return DocSwapStatus::NotSet;
        };
        let s = normalize_raw(s);
        match s.as_str() {
            "" => DocSwapStatus::NotSet,
            "in progress" => DocSwapStatus::InProgress,
            "completed" => DocSwapStatus::Completed,
            _ => DocSwapStatus::Unrecognized,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            DocSwapStatus::InProgress => "in progress",
            DocSwapStatus::Completed => "completed",
            DocSwapStatus::NotSet | DocSwapStatus::Unrecognized => "",
        }
    }
}

impl fmt::Display for DocSwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocSwapStatus::NotSet => write!(f, "not set"),
            DocSwapStatus::Unrecognized => write!(f, "unrecognized"),
            _ => write!(f, "{}", self.token()),
        }
    }
}

// ==========================================
// 生命周期阶段 (Lifecycle Stage)
// ==========================================
// 派生值,永不落库
// 顺序: NotArrived < Arrived < CustomsInProgress < CustomsReleased < Dispatching < Delivered
// 序列化格式: SCREAMING_SNAKE_CASE (与前端约定一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleStage {
    NotArrived,        // 未到港
    Arrived,           // 已到港
    CustomsInProgress, // 清关中
    CustomsReleased,   // 清关放行
    Dispatching,       // 派送中
    Delivered,         // 已完结
}

impl LifecycleStage {
    /// 全部阶段,按进度升序
    pub const ALL: [LifecycleStage; 6] = [
        LifecycleStage::NotArrived,
        LifecycleStage::Arrived,
        LifecycleStage::CustomsInProgress,
        LifecycleStage::CustomsReleased,
        LifecycleStage::Dispatching,
        LifecycleStage::Delivered,
    ];

    /// 列表页展示的短标签
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleStage::NotArrived => "not arrived",
            LifecycleStage::Arrived => "arrived",
            LifecycleStage::CustomsInProgress => "in customs",
            LifecycleStage::CustomsReleased => "customs released",
            LifecycleStage::Dispatching => "dispatching",
            LifecycleStage::Delivered => "delivered",
        }
    }

    /// 固定的阶段→颜色类映射（每个阶段恰好一种颜色,无兜底歧义）
    pub fn color_class(&self) -> &'static str {
        match self {
            LifecycleStage::NotArrived => "stage-grey",
            LifecycleStage::Arrived => "stage-blue",
            LifecycleStage::CustomsInProgress => "stage-orange",
            LifecycleStage::CustomsReleased => "stage-cyan",
            LifecycleStage::Dispatching => "stage-purple",
            LifecycleStage::Delivered => "stage-green",
        }
    }

    /// 从字符串解析阶段（查询参数/配置用,未知值返回 None）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "NOT_ARRIVED" => Some(LifecycleStage::NotArrived),
            "ARRIVED" => Some(LifecycleStage::Arrived),
            "CUSTOMS_IN_PROGRESS" => Some(LifecycleStage::CustomsInProgress),
            "CUSTOMS_RELEASED" => Some(LifecycleStage::CustomsReleased),
            "DISPATCHING" => Some(LifecycleStage::Dispatching),
            "DELIVERED" => Some(LifecycleStage::Delivered),
            _ => None,
        }
    }

    /// 转换为前端约定的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LifecycleStage::NotArrived => "NOT_ARRIVED",
            LifecycleStage::Arrived => "ARRIVED",
            LifecycleStage::CustomsInProgress => "CUSTOMS_IN_PROGRESS",
            LifecycleStage::CustomsReleased => "CUSTOMS_RELEASED",
            LifecycleStage::Dispatching => "DISPATCHING",
            LifecycleStage::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}
