// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use freight_portal::domain::order::OrderRecord;
use freight_portal::domain::types::{
    CustomsStatus, DeliveryStatus, DocSwapStatus, OverallStatus, ShipStatus,
};

/// 固定时间戳辅助
pub fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
}

// ==========================================
// OrderRecord 构建器
// ==========================================

pub struct OrderBuilder {
    record: OrderRecord,
}

impl OrderBuilder {
    pub fn new(id: &str) -> Self {
        OrderBuilder {
            record: OrderRecord {
                id: id.to_string(),
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
                weight_kg: None,
                volume_cbm: None,
                created_at: Some(ts(2026, 6, 1)),
                updated_at: Some(ts(2026, 6, 1)),
            },
        }
    }

    pub fn customer(mut self, customer_id: &str) -> Self {
        self.record.customer_id = customer_id.to_string();
        self
    }

    pub fn order_no(mut self, order_no: &str) -> Self {
        self.record.order_no = Some(order_no.to_string());
        self
    }

    pub fn overall(mut self, status: OverallStatus) -> Self {
        self.record.overall_status = status;
        self
    }

    pub fn ship(mut self, status: ShipStatus) -> Self {
        self.record.ship_status = status;
        self
    }

    pub fn customs(mut self, status: CustomsStatus) -> Self {
        self.record.customs_status = status;
        self
    }

    pub fn delivery(mut self, status: DeliveryStatus) -> Self {
        self.record.delivery_status = status;
        self
    }

    pub fn doc_swap(mut self, status: DocSwapStatus) -> Self {
        self.record.doc_swap_status = status;
        self
    }

    pub fn etd(mut self, t: DateTime<Utc>) -> Self {
        self.record.etd = Some(t);
        self
    }

    pub fn ata(mut self, t: DateTime<Utc>) -> Self {
        self.record.ata = Some(t);
        self
    }

    pub fn customs_release_time(mut self, t: DateTime<Utc>) -> Self {
        self.record.customs_release_time = Some(t);
        self
    }

    pub fn weight(mut self, kg: f64) -> Self {
        self.record.weight_kg = Some(kg);
        self
    }

    pub fn volume(mut self, cbm: f64) -> Self {
        self.record.volume_cbm = Some(cbm);
        self
    }

    pub fn created_at(mut self, t: DateTime<Utc>) -> Self {
        self.record.created_at = Some(t);
        self
    }

    pub fn no_created_at(mut self) -> Self {
        self.record.created_at = None;
        self
    }

    pub fn build(self) -> OrderRecord {
        self.record
    }
}
