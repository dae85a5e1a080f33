// ==========================================
// KhoVan Analytics - Phân loại trạng thái đơn
// ==========================================

use crate::domain::types::OrderStatus;

/// Bảng rule trạng thái, rule đầu tiên match thắng.
/// "hủy" và "huỷ" là hai cách viết dấu khác nhau, cần cả hai.
const STATUS_RULES: &[(&[&str], OrderStatus)] = &[
    (
        &["hoàn thành", "completed", "done", "delivered"],
        OrderStatus::Completed,
    ),
    (
        &["đang xử lý", "processing", "đang giao", "shipping"],
        OrderStatus::Processing,
    ),
    (&["hủy", "cancelled", "cancel", "huỷ"], OrderStatus::Cancelled),
    (&["chờ", "pending", "waiting"], OrderStatus::Pending),
    (&["trả hàng", "returned", "return"], OrderStatus::Returned),
];

/// Chuẩn hóa trạng thái đơn
///
/// Field vắng HOẶC chuỗi không khớp rule nào đều về processing:
/// đơn đã vào hệ thống mà chưa rõ trạng thái được coi là đang xử lý.
pub fn classify_status(raw: Option<&str>) -> OrderStatus {
    let lower = match raw {
        Some(s) if !s.trim().is_empty() => s.trim().to_lowercase(),
        _ => return OrderStatus::Processing,
    };

    for (keywords, status) in STATUS_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *status;
        }
    }

    OrderStatus::Processing
}
