// ==========================================
// KhoVan Analytics - Chuẩn hóa bản ghi
// ==========================================
// RawRecord → CanonicalOrder, không bao giờ fail:
// field hỏng suy biến về giá trị mặc định, bản ghi luôn
// được giữ lại (bất biến totalOrders == số bản ghi vào).
// ==========================================

use crate::classify::{classify_channel, classify_payment_method, classify_sla, classify_status};
use crate::classify::SlaContext;
use crate::domain::order::{CanonicalOrder, RawRecord};
use crate::pipeline::field_resolver::{
    resolve_date, resolve_f64, resolve_str, AMOUNT_ALIASES, CHANNEL_ALIASES, CITY_ALIASES,
    COD_AMOUNT_ALIASES, DISTRICT_ALIASES, ORDER_DATE_ALIASES, ORDER_ID_ALIASES, PAYMENT_ALIASES,
    PRODUCT_DETAIL_ALIASES, SLA_ALIASES, STATUS_ALIASES, TRANSPORTER_ALIASES,
};
use crate::pipeline::product_parser::parse_product_list;
use chrono::{DateTime, Utc};

/// Đơn vị vận chuyển mặc định khi nguồn không ghi
pub const UNKNOWN_TRANSPORTER: &str = "Unknown";

/// Chuẩn hóa một bản ghi thô thành đơn hàng chuẩn
///
/// # Tham số
/// - record: bản ghi thô từ parser
/// - index: vị trí bản ghi trong batch (tạo mã đơn fallback)
/// - now: mốc thời gian tính SLA, tiêm từ ngoài để test được
pub fn normalize_record(record: &RawRecord, index: usize, now: DateTime<Utc>) -> CanonicalOrder {
    let order_id = resolve_str(record, ORDER_ID_ALIASES)
        .unwrap_or_else(|| format!("Order-{}", index + 1));

    let order_date = resolve_date(record, ORDER_DATE_ALIASES);

    let raw_channel = resolve_str(record, CHANNEL_ALIASES);
    let channel = classify_channel(raw_channel.as_deref());

    // tiền âm trong nguồn là lỗi nhập liệu, kẹp về 0
    let amount = resolve_f64(record, AMOUNT_ALIASES).max(0.0);
    let cod_amount = resolve_f64(record, COD_AMOUNT_ALIASES).max(0.0);

    let status = classify_status(resolve_str(record, STATUS_ALIASES).as_deref());

    let transporter_raw = resolve_str(record, TRANSPORTER_ALIASES);
    let sla = classify_sla(
        &SlaContext {
            explicit: resolve_str(record, SLA_ALIASES).as_deref(),
            order_date,
            raw_channel: raw_channel.as_deref(),
            transporter: transporter_raw.as_deref(),
            amount,
        },
        now,
    );

    let payment_method =
        classify_payment_method(resolve_str(record, PAYMENT_ALIASES).as_deref(), cod_amount);

    let product_line_items = resolve_str(record, PRODUCT_DETAIL_ALIASES)
        .map(|detail| parse_product_list(&detail))
        .unwrap_or_default();

    CanonicalOrder {
        order_id,
        order_date,
        channel,
        raw_channel,
        amount,
        cod_amount,
        status,
        sla,
        payment_method,
        transporter: transporter_raw.unwrap_or_else(|| UNKNOWN_TRANSPORTER.to_string()),
        city: resolve_str(record, CITY_ALIASES),
        district: resolve_str(record, DISTRICT_ALIASES),
        product_line_items,
    }
}
