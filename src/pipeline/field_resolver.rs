// ==========================================
// KhoVan Analytics - Field Resolver
// ==========================================
// Mỗi field chuẩn có một danh sách alias theo thứ tự ưu tiên,
// giá trị không-rỗng đầu tiên thắng. Khi nhiều alias cùng có mặt
// với giá trị khác nhau, alias đứng trước được lấy mà không kiểm
// tra chéo (hành vi giữ nguyên từ nguồn - xem DESIGN.md).
//
// Quy tắc coercion:
// - số: parser khoan dung, input không phải số → 0
// - ngày: thử lần lượt các định dạng quen thuộc, fail → None
// ==========================================

use crate::domain::order::RawRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

// ==========================================
// Bảng alias theo field chuẩn
// ==========================================

/// Tổng tiền đơn (alias chính "amount_total" từ hệ thống bán hàng)
pub const AMOUNT_ALIASES: &[&str] = &[
    "amount_total",
    "amount",
    "total",
    "order_total",
    "value",
    "price",
    "total_amount",
    "subtotal",
    "grand_total",
];

/// Tiền thu hộ COD
pub const COD_AMOUNT_ALIASES: &[&str] = &["cod_total", "ecom_cod_amount", "tiền_cod"];

/// Kênh bán - alias chính "customer" (hệ thống gốc ghi tên sàn vào đó)
pub const CHANNEL_ALIASES: &[&str] = &[
    "customer",
    "channel",
    "platform",
    "source",
    "marketplace",
    "sales_channel",
    "vendor",
    "store",
    "shop",
];

/// Trạng thái đơn
pub const STATUS_ALIASES: &[&str] = &[
    "status",
    "state",
    "order_status",
    "order_state",
    "delivery_status",
    "trạng_thái",
    "tình_trạng",
];

/// SLA / độ ưu tiên khai báo sẵn trong nguồn
pub const SLA_ALIASES: &[&str] = &["sla", "priority", "urgency", "service_level"];

/// Phương thức thanh toán
pub const PAYMENT_ALIASES: &[&str] = &[
    "paymentMethod",
    "payment_method",
    "payment",
    "payment_type",
    "pay_method",
    "payment_option",
    "phương_thức_thanh_toán",
    "thanh_toán",
];

/// Ngày đặt hàng
pub const ORDER_DATE_ALIASES: &[&str] = &[
    "orderDate",
    "date_order",
    "created_at",
    "order_date",
    "date_created",
    "timestamp",
    "created",
    "date",
    "time",
    "ngày_đặt",
    "ngày_tạo",
    "thời_gian",
    "ngày",
];

/// Mã đơn hàng
pub const ORDER_ID_ALIASES: &[&str] = &["id", "order_id"];

/// Đơn vị vận chuyển
pub const TRANSPORTER_ALIASES: &[&str] = &["transporter", "shipper", "shipping_method"];

/// Danh sách sản phẩm dạng text
pub const PRODUCT_DETAIL_ALIASES: &[&str] = &["detail", "products"];

pub const CITY_ALIASES: &[&str] = &["city"];
pub const DISTRICT_ALIASES: &[&str] = &["district"];

// ==========================================
// Hàm resolve
// ==========================================

/// Resolve field chuỗi: giá trị không-rỗng đầu tiên theo thứ tự alias
///
/// Giá trị scalar khác chuỗi (số, bool) được chuyển thành chuỗi.
/// Số 0 bị coi là "vắng" và tiếp tục dò alias sau (hành vi nguồn).
pub fn resolve_str(record: &RawRecord, aliases: &[&str]) -> Option<String> {
    for alias in aliases {
        if let Some(value) = record.get(*alias) {
            if let Some(text) = scalar_to_non_empty_string(value) {
                return Some(text);
            }
        }
    }
    None
}

/// Resolve field số với coercion khoan dung
///
/// Giá trị không-rỗng đầu tiên thắng; chuỗi không phải số suy biến
/// về 0 (không dò tiếp alias sau - giữ semantics "first hit").
pub fn resolve_f64(record: &RawRecord, aliases: &[&str]) -> f64 {
    for alias in aliases {
        match record.get(*alias) {
            Some(Value::Number(n)) => {
                let v = n.as_f64().unwrap_or(0.0);
                // số 0 coi như vắng, dò tiếp
                if v != 0.0 {
                    return v;
                }
            }
            Some(Value::String(s)) if !s.trim().is_empty() => {
                return parse_float_permissive(s);
            }
            _ => {}
        }
    }
    0.0
}

/// Resolve field ngày: alias đầu tiên có giá trị, parse được → Some
///
/// Ngày không parse được giữ None - bản ghi bị loại khỏi dateRange
/// nhưng vẫn tham gia mọi thống kê khác.
pub fn resolve_date(record: &RawRecord, aliases: &[&str]) -> Option<DateTime<Utc>> {
    for alias in aliases {
        match record.get(*alias) {
            Some(Value::Number(n)) => {
                // epoch milliseconds
                if let Some(ms) = n.as_i64() {
                    if ms != 0 {
                        if let Some(dt) = DateTime::<Utc>::from_timestamp_millis(ms) {
                            return Some(dt);
                        }
                    }
                }
            }
            Some(Value::String(s)) if !s.trim().is_empty() => {
                return parse_date_permissive(s.trim());
            }
            _ => {}
        }
    }
    None
}

// ==========================================
// Parser khoan dung
// ==========================================

/// Parse số thực kiểu khoan dung: lấy prefix dạng số dài nhất,
/// không có prefix hợp lệ → 0
///
/// "139000" → 139000, "450000 VNĐ" → 450000, "abc" → 0
pub fn parse_float_permissive(input: &str) -> f64 {
    let s = input.trim();
    let bytes = s.as_bytes();

    let mut i = 0;
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => {
                seen_digit = true;
                i += 1;
                end = i;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                i += 1;
                end = i;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// Parse ngày với các định dạng thường gặp trong dữ liệu upload
///
/// Thứ tự thử: "YYYY-MM-DD HH:MM:SS" (định dạng hệ thống gốc),
/// ISO 8601 / RFC 3339, "YYYY-MM-DDTHH:MM:SS", "YYYY-MM-DD", "DD/MM/YYYY"
pub fn parse_date_permissive(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%d/%m/%Y") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }
    None
}

/// Scalar → chuỗi không-rỗng (đã trim)
fn scalar_to_non_empty_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        // số 0 coi như vắng, dò tiếp alias sau (cùng quy tắc với resolve_f64)
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
