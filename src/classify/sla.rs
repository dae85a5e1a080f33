// ==========================================
// KhoVan Analytics - Phân loại SLA xử lý đơn
// ==========================================
// Độ ưu tiên tính theo thời gian đơn đã chờ so với "now" được
// tiêm vào từ ngoài (không gọi Utc::now() trong hàm thuần này).
//
// Thứ tự quyết định:
//   1. Field SLA khai báo sẵn → giữ nguyên văn
//   2. Có ngày đặt → express/thời gian chờ quyết định bậc
//   3. Không có ngày → suy từ kênh express và giá trị đơn
// ==========================================

use crate::domain::types::SlaTier;
use chrono::{DateTime, Utc};

/// Ngưỡng thời gian chờ (giờ) cho từng bậc
const P1_MAX_HOURS: i64 = 2;
const P2_MAX_HOURS: i64 = 4;
const P3_MAX_HOURS: i64 = 8;

/// Ngưỡng giá trị đơn coi là lớn khi không có ngày đặt (VNĐ)
const HIGH_VALUE_THRESHOLD: f64 = 1_000_000.0;

/// Ngữ cảnh phân loại SLA cho một đơn
pub struct SlaContext<'a> {
    /// Field SLA khai báo sẵn trong nguồn (giữ nguyên văn nếu có)
    pub explicit: Option<&'a str>,
    /// Ngày đặt hàng đã resolve
    pub order_date: Option<DateTime<Utc>>,
    /// Chuỗi kênh THÔ (trước chuẩn hóa) - để dò "express"
    pub raw_channel: Option<&'a str>,
    /// Đơn vị vận chuyển thô
    pub transporter: Option<&'a str>,
    /// Tổng tiền đơn
    pub amount: f64,
}

/// Phân loại SLA
///
/// # Trả về
/// Nhãn SLA hiển thị: nguyên văn field khai báo, hoặc label
/// của bậc P1..P4 tính từ ngữ cảnh.
pub fn classify_sla(ctx: &SlaContext<'_>, now: DateTime<Utc>) -> String {
    if let Some(explicit) = ctx.explicit {
        let trimmed = explicit.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let is_express = contains_express(ctx.raw_channel) || contains_express(ctx.transporter);

    match ctx.order_date {
        Some(order_date) => {
            let elapsed_hours = (now - order_date).num_hours();
            let tier = if is_express || elapsed_hours < P1_MAX_HOURS {
                SlaTier::P1
            } else if elapsed_hours < P2_MAX_HOURS {
                SlaTier::P2
            } else if elapsed_hours < P3_MAX_HOURS {
                SlaTier::P3
            } else {
                SlaTier::P4
            };
            tier.label().to_string()
        }
        None => {
            // Không có ngày đặt: suy từ kênh và giá trị đơn
            let tier = if contains_express(ctx.raw_channel) {
                SlaTier::P1
            } else if ctx.amount > HIGH_VALUE_THRESHOLD {
                SlaTier::P2
            } else {
                SlaTier::P3
            };
            tier.label().to_string()
        }
    }
}

fn contains_express(value: Option<&str>) -> bool {
    value
        .map(|s| s.to_lowercase().contains("express"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-15T12:00:00+00:00")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn ctx_with_age(hours: i64) -> SlaContext<'static> {
        SlaContext {
            explicit: None,
            order_date: Some(now() - Duration::hours(hours)),
            raw_channel: None,
            transporter: None,
            amount: 0.0,
        }
    }

    #[test]
    fn test_explicit_sla_verbatim() {
        let ctx = SlaContext {
            explicit: Some("Ưu tiên VIP"),
            order_date: Some(now() - Duration::hours(10)),
            raw_channel: None,
            transporter: None,
            amount: 0.0,
        };
        assert_eq!(classify_sla(&ctx, now()), "Ưu tiên VIP");
    }

    #[test]
    fn test_elapsed_time_tiers() {
        assert_eq!(classify_sla(&ctx_with_age(1), now()), SlaTier::P1.label());
        assert_eq!(classify_sla(&ctx_with_age(3), now()), SlaTier::P2.label());
        assert_eq!(classify_sla(&ctx_with_age(5), now()), SlaTier::P3.label());
        assert_eq!(classify_sla(&ctx_with_age(9), now()), SlaTier::P4.label());
    }

    #[test]
    fn test_express_channel_forces_p1() {
        let ctx = SlaContext {
            explicit: None,
            order_date: Some(now() - Duration::hours(10)),
            raw_channel: Some("Shopee Express"),
            transporter: None,
            amount: 0.0,
        };
        assert_eq!(classify_sla(&ctx, now()), SlaTier::P1.label());
    }

    #[test]
    fn test_express_transporter_forces_p1() {
        let ctx = SlaContext {
            explicit: None,
            order_date: Some(now() - Duration::hours(10)),
            raw_channel: None,
            transporter: Some("J&T Express"),
            amount: 0.0,
        };
        assert_eq!(classify_sla(&ctx, now()), SlaTier::P1.label());
    }

    #[test]
    fn test_no_date_fallback() {
        let express = SlaContext {
            explicit: None,
            order_date: None,
            raw_channel: Some("GHN Express"),
            transporter: None,
            amount: 0.0,
        };
        assert_eq!(classify_sla(&express, now()), SlaTier::P1.label());

        let high_value = SlaContext {
            explicit: None,
            order_date: None,
            raw_channel: Some("Shopee"),
            transporter: None,
            amount: 1_500_000.0,
        };
        assert_eq!(classify_sla(&high_value, now()), SlaTier::P2.label());

        let ordinary = SlaContext {
            explicit: None,
            order_date: None,
            raw_channel: Some("Shopee"),
            transporter: None,
            amount: 200_000.0,
        };
        assert_eq!(classify_sla(&ordinary, now()), SlaTier::P3.label());
    }
}
