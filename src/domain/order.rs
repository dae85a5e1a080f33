// ==========================================
// KhoVan Analytics - Thực thể đơn hàng
// ==========================================
// RawRecord: bản ghi thô key→value, key tùy nguồn
// (English / tiếng Việt / snake_case / camelCase)
// CanonicalOrder: bản ghi đã chuẩn hóa, đầu vào của Aggregator
// ==========================================

use crate::domain::types::{OrderStatus, PaymentMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bản ghi thô từ nguồn upload.
///
/// Map giữ nguyên thứ tự key trong tài liệu gốc (serde_json
/// preserve_order) - shape contract cần "property dạng mảng đầu tiên".
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Một dòng sản phẩm trong field "detail" của đơn hàng
///
/// Bất biến: quantity >= 1 (số lượng 0 được ép về 1 khi parse)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLineItem {
    pub name: String,
    pub quantity: u32,
}

/// Đơn hàng đã chuẩn hóa
///
/// Mọi field đều có giá trị mặc định an toàn: lỗi parse ở mức field
/// không bao giờ loại bản ghi khỏi thống kê (xem ingest::error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalOrder {
    /// Mã đơn - alias "id"/"order_id", fallback "Order-{n}" theo vị trí
    pub order_id: String,

    /// Ngày đặt - None nếu không parse được (bị loại khỏi dateRange,
    /// vẫn tính vào mọi thống kê khác)
    pub order_date: Option<DateTime<Utc>>,

    /// Kênh bán đã chuẩn hóa (nhãn mở: input lạ được giữ nguyên)
    pub channel: String,

    /// Kênh bán thô trước khi phân loại - bộ SLA cần dò "express"
    pub raw_channel: Option<String>,

    /// Tổng tiền đơn (>= 0, mặc định 0)
    pub amount: f64,

    /// Tiền thu hộ COD (>= 0, mặc định 0)
    pub cod_amount: f64,

    pub status: OrderStatus,

    /// Nhãn SLA - "P1 - Gấp 🚀" .. "P4 - Chờ xử lý 🕒",
    /// hoặc giá trị verbatim nếu nguồn có field SLA riêng
    pub sla: String,

    pub payment_method: PaymentMethod,

    /// Đơn vị vận chuyển (mặc định "Unknown")
    pub transporter: String,

    pub city: Option<String>,
    pub district: Option<String>,

    /// Danh sách sản phẩm parse từ field "detail" - giữ cả dòng
    /// phí vận chuyển (Aggregator mới là nơi loại chúng)
    pub product_line_items: Vec<ProductLineItem>,
}
