// ==========================================
// 货运物流客户门户 - API 层
// ==========================================
// 依据: Portal_Master_Spec.md - PART B/C 对外接口
// ==========================================
// 职责: 门户页面可调用的订单与驾驶舱接口
// 红线: 读接口降级、写接口上抛;业务规则只住引擎层
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod order_api;

pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use order_api::{
    CreateOrderRequest, OrderApi, OrderListItem, OrderListQuery, OrderProgressView,
};
