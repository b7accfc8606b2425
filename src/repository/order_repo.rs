// ==========================================
// 货运物流客户门户 - 订单仓储
// ==========================================
// 依据: Order_Store_Field_Mapping_v1.0.md - 2. orders 表
// 职责: 订单读写、按阶段过滤的列表查询、聚合计数
// 红线: 阶段过滤与聚合口径一律取自 repository::stage_filter
//       编译出的谓词,本文件不得手写阶段条件
// 红线: 读路径对脏数据宽容(字段缺失照常返回),写路径严格校验
// ==========================================

use crate::domain::order::OrderRecord;
use crate::domain::types::{
    CustomsStatus, DeliveryStatus, DocSwapStatus, LifecycleStage, OverallStatus, ShipStatus,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::stage_filter::{completed_predicate_sql, stage_predicate_sql};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::stats::{OrderStats, StageBucket};

/// 订单列表查询条件
#[derive(Debug, Clone, Default)]
pub struct OrderListFilter {
    /// 按生命周期阶段过滤（None = 全部）
    pub stage: Option<LifecycleStage>,
    /// 下单日期下界（含）
    pub created_from: Option<NaiveDate>,
    /// 下单日期上界（含）
    pub created_to: Option<NaiveDate>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// 订单仓储
pub struct OrderRepository {
    conn: Arc<Mutex<Connection>>,
}

impl OrderRepository {
    /// 创建仓储实例
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = Connection::open(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(OrderRepository {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从现有连接创建（测试/组合场景使用）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        OrderRepository { conn }
    }

    /// 获取数据库连接（内部辅助）
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // 写路径
    // ==========================================

    /// 批量写入订单（整批一个事务,任一失败整批回滚）
    pub fn batch_upsert_orders(&self, orders: &[OrderRecord]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let mut count = 0;
        for order in orders {
            Self::validate_for_write(order)?;
            Self::upsert_in_tx(&tx, order)?;
            count += 1;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    /// 写入单条订单
    pub fn insert_order(&self, order: &OrderRecord) -> RepositoryResult<()> {
        Self::validate_for_write(order)?;
        let conn = self.get_conn()?;
        Self::upsert_in_tx(&conn, order)
    }

    fn validate_for_write(order: &OrderRecord) -> RepositoryResult<()> {
        if order.id.trim().is_empty() {
            return Err(RepositoryError::ValidationError("订单 ID 不能为空".to_string()));
        }
        if order.customer_id.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                format!("订单 {} 缺少客户 ID", order.id),
            ));
        }
        Ok(())
    }

    fn upsert_in_tx(conn: &Connection, order: &OrderRecord) -> RepositoryResult<()> {
        conn.execute(
            "INSERT OR REPLACE INTO orders (
                id, customer_id, order_no,
                overall_status, ship_status, customs_status, delivery_status, doc_swap_status,
                etd, eta, ata, doc_swap_time, customs_release_time,
                weight_kg, volume_cbm, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
            rusqlite::params![
                order.id,
                order.customer_id,
                order.order_no,
                token_or_null(order.overall_status.token()),
                token_or_null(order.ship_status.token()),
                token_or_null(order.customs_status.token()),
                token_or_null(order.delivery_status.token()),
                token_or_null(order.doc_swap_status.token()),
                order.etd.map(|t| t.to_rfc3339()),
                order.eta.map(|t| t.to_rfc3339()),
                order.ata.map(|t| t.to_rfc3339()),
                order.doc_swap_time.map(|t| t.to_rfc3339()),
                order.customs_release_time.map(|t| t.to_rfc3339()),
                order.weight_kg,
                order.volume_cbm,
                order.created_at.map(|t| t.to_rfc3339()),
                order.updated_at.map(|t| t.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    // ==========================================
    // 读路径
    // ==========================================

    /// 按 ID 查询订单
    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<OrderRecord>> {
        let conn = self.get_conn()?;
        let order = conn
            .query_row(
                &format!("SELECT {} FROM orders WHERE id = ?1", SELECT_COLUMNS),
                [id],
                Self::row_to_order,
            )
            .optional()?;
        Ok(order)
    }

    /// 按客户查询订单列表
    ///
    /// # 排序与分页
    /// - 按 created_at 降序（最新在前,NULL 排最后）
    /// - limit/offset 由调用方经配置钳制后传入
    pub fn list_by_customer(
        &self,
        customer_id: &str,
        filter: &OrderListFilter,
    ) -> RepositoryResult<Vec<OrderRecord>> {
        let conn = self.get_conn()?;

        let mut sql = format!(
            "SELECT {} FROM orders WHERE customer_id = ?1",
            SELECT_COLUMNS
        );
        let mut params: Vec<String> = vec![customer_id.to_string()];

        if let Some(stage) = filter.stage {
            // 阶段条件来自唯一规则表的编译结果,只含常量,无需绑定参数
            sql.push_str(&format!(" AND ({})", stage_predicate_sql(stage)));
        }
        if let Some(from) = filter.created_from {
            params.push(from.format("%Y-%m-%d").to_string());
            sql.push_str(&format!(" AND date(created_at) >= date(?{})", params.len()));
        }
        if let Some(to) = filter.created_to {
            params.push(to.format("%Y-%m-%d").to_string());
            sql.push_str(&format!(" AND date(created_at) <= date(?{})", params.len()));
        }

        sql.push_str(" ORDER BY created_at DESC, id ASC");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
            if let Some(offset) = filter.offset {
                sql.push_str(&format!(" OFFSET {}", offset));
            }
        }

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(params.iter()), Self::row_to_order)?;

        let mut orders = Vec::new();
        for row in rows {
            orders.push(row?);
        }
        Ok(orders)
    }

    // ==========================================
    // 聚合计数（SQL 口径,与引擎口径共用规则表）
    // ==========================================

    /// 单条 SQL 产出驾驶舱统计
    pub fn count_order_stats(&self, customer_id: &str) -> RepositoryResult<OrderStats> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT COUNT(*),
                    COALESCE(SUM(CASE WHEN {pred} THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(COALESCE(weight_kg, 0)), 0),
                    COALESCE(SUM(COALESCE(volume_cbm, 0)), 0)
             FROM orders WHERE customer_id = ?1",
            pred = completed_predicate_sql()
        );
        let stats = conn.query_row(&sql, [customer_id], |row| {
            let total: u64 = row.get(0)?;
            let completed: u64 = row.get(1)?;
            Ok(OrderStats {
                total,
                in_progress: total - completed,
                completed,
                total_weight_kg: row.get(2)?,
                total_volume_cbm: row.get(3)?,
            })
        })?;
        Ok(stats)
    }

    /// 按生命周期阶段统计订单分布（六桶齐全,空桶为 0）
    pub fn count_stage_breakdown(&self, customer_id: &str) -> RepositoryResult<Vec<StageBucket>> {
        let conn = self.get_conn()?;
        let mut buckets = Vec::with_capacity(LifecycleStage::ALL.len());
        for stage in LifecycleStage::ALL {
            let sql = format!(
                "SELECT COUNT(*) FROM orders WHERE customer_id = ?1 AND ({})",
                stage_predicate_sql(stage)
            );
            let count: u64 = conn.query_row(&sql, [customer_id], |row| row.get(0))?;
            buckets.push(StageBucket {
                stage,
                label: stage.label().to_string(),
                count,
            });
        }
        Ok(buckets)
    }

    // ==========================================
    // 行映射
    // ==========================================

    /// 行转换为 OrderRecord（读路径宽容: 关键字段缺失按空串读入,
    /// 由上层 is_malformed 判定,不在此处报错丢行）
    fn row_to_order(row: &Row) -> rusqlite::Result<OrderRecord> {
        Ok(OrderRecord {
            id: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            customer_id: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            order_no: row.get(2)?,
            overall_status: OverallStatus::from_raw(row.get::<_, Option<String>>(3)?.as_deref()),
            ship_status: ShipStatus::from_raw(row.get::<_, Option<String>>(4)?.as_deref()),
            customs_status: CustomsStatus::from_raw(row.get::<_, Option<String>>(5)?.as_deref()),
            delivery_status: DeliveryStatus::from_raw(row.get::<_, Option<String>>(6)?.as_deref()),
            doc_swap_status: DocSwapStatus::from_raw(row.get::<_, Option<String>>(7)?.as_deref()),
            etd: parse_ts(row.get(8)?),
            eta: parse_ts(row.get(9)?),
            ata: parse_ts(row.get(10)?),
            doc_swap_time: parse_ts(row.get(11)?),
            customs_release_time: parse_ts(row.get(12)?),
            weight_kg: row.get(13)?,
            volume_cbm: row.get(14)?,
            created_at: parse_ts(row.get(15)?),
            updated_at: parse_ts(row.get(16)?),
        })
    }
}

const SELECT_COLUMNS: &str = "id, customer_id, order_no, \
     overall_status, ship_status, customs_status, delivery_status, doc_swap_status, \
     etd, eta, ata, doc_swap_time, customs_release_time, \
     weight_kg, volume_cbm, created_at, updated_at";

/// 空 token（NotSet/Unrecognized）落库为 NULL
fn token_or_null(token: &str) -> Option<&str> {
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// RFC3339 文本时间戳解析（非法文本按缺失处理,读路径不报错）
fn parse_ts(raw: Option<String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    })
}
