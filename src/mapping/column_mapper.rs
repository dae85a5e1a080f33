// ==========================================
// KhoVan Analytics - Bộ ánh xạ cột
// ==========================================
// Với mỗi field template, duyệt header theo thứ tự xuất hiện:
// header đầu tiên match thắng. Một header có thể được gán
// cho nhiều field (không khóa) - trùng lặp hiếm nhưng chấp
// nhận được ở bước gợi ý.
// ==========================================

use crate::mapping::template::ColumnSpec;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Điểm tối thiểu để tự áp dụng mapping không cần hỏi
pub const AUTO_APPLY_THRESHOLD: f64 = 0.7;
/// Điểm tối thiểu để đưa mapping ra xác nhận
pub const CONFIRM_THRESHOLD: f64 = 0.6;

/// Quyết định sau khi chấm điểm mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingDecision {
    /// Điểm >= 0.7: áp dụng thẳng
    AutoApply,
    /// Điểm trong [0.6, 0.7): người dùng xác nhận trước
    NeedsConfirmation,
    /// Điểm < 0.6: từ chối, yêu cầu file đúng template
    Insufficient,
}

/// Kết quả ánh xạ cột
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    /// field chuẩn → header nguồn đã khớp
    pub mapping: BTreeMap<String, String>,
    /// Header nguồn không khớp field nào
    pub unmapped_columns: Vec<String>,
    /// Tỷ lệ field BẮT BUỘC đã khớp, trong [0, 1]
    pub score: f64,
    pub decision: MappingDecision,
}

/// Ánh xạ header file upload vào template
///
/// # Tham số
/// - headers: header đọc từ dòng đầu file, theo thứ tự xuất hiện
/// - template: danh sách field chuẩn (xem template::online_orders_template)
pub fn map_columns_to_template(headers: &[String], template: &[ColumnSpec]) -> ColumnMapping {
    let mut mapping = BTreeMap::new();

    for spec in template {
        for header in headers {
            if header_matches(header, spec) {
                debug!(field = spec.field, header = header.as_str(), "Khớp cột");
                mapping.insert(spec.field.to_string(), header.clone());
                break;
            }
        }
    }

    let unmapped_columns: Vec<String> = headers
        .iter()
        .filter(|h| !mapping.values().any(|mapped| mapped == *h))
        .cloned()
        .collect();

    let required_total = template.iter().filter(|s| s.required).count();
    let required_matched = template
        .iter()
        .filter(|s| s.required && mapping.contains_key(s.field))
        .count();
    let score = if required_total == 0 {
        1.0
    } else {
        required_matched as f64 / required_total as f64
    };

    let decision = if score >= AUTO_APPLY_THRESHOLD {
        MappingDecision::AutoApply
    } else if score >= CONFIRM_THRESHOLD {
        MappingDecision::NeedsConfirmation
    } else {
        MappingDecision::Insufficient
    };

    ColumnMapping {
        mapping,
        unmapped_columns,
        score,
        decision,
    }
}

/// Header có khớp field template không
///
/// Ba cách khớp, cái nào đúng trước thì dừng:
///   1. header chứa từ ĐẦU TIÊN của nhãn template
///   2. nhãn template chứa nguyên header
///   3. header chứa một keyword phụ của field
fn header_matches(header: &str, spec: &ColumnSpec) -> bool {
    let header_lower = header.trim().to_lowercase();
    if header_lower.is_empty() {
        return false;
    }
    let label_lower = spec.label.to_lowercase();

    if let Some(first_word) = label_lower.split_whitespace().next() {
        if header_lower.contains(first_word) {
            return true;
        }
    }
    if label_lower.contains(&header_lower) {
        return true;
    }
    spec.keywords.iter().any(|k| header_lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::template::online_orders_template;

    fn headers(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_template_headers_auto_apply() {
        let template = online_orders_template();
        let hs = headers(&[
            "Mã Đơn Hàng",
            "Ngày Đặt Hàng",
            "Kênh Bán Hàng",
            "Mã Sản Phẩm",
            "Tên Sản Phẩm",
            "Số Lượng",
            "Đơn Giá",
            "Tổng Tiền",
            "Phí Vận Chuyển",
            "Tỉnh/TP Khách Hàng",
            "Trạng Thái Đơn Hàng",
        ]);

        let result = map_columns_to_template(&hs, &template);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.decision, MappingDecision::AutoApply);
        // "Mã Đơn Hàng" đứng trước và chứa "mã" nên bị productCode
        // bắt trước "Mã Sản Phẩm" - quirk đã biết của luật first-match
        assert_eq!(
            result.mapping.get("productCode"),
            Some(&"Mã Đơn Hàng".to_string())
        );
        assert!(result
            .unmapped_columns
            .contains(&"Mã Sản Phẩm".to_string()));
    }

    #[test]
    fn test_english_headers_match_by_keyword() {
        let template = online_orders_template();
        let hs = headers(&[
            "order_id", "order_date", "channel", "product_code", "quantity", "unit_price",
            "total_amount", "status",
        ]);

        let result = map_columns_to_template(&hs, &template);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.decision, MappingDecision::AutoApply);
    }

    #[test]
    fn test_half_coverage_is_insufficient() {
        let template = online_orders_template();
        // 4/8 field bắt buộc → 0.5
        let hs = headers(&["order_id", "order_date", "channel", "status"]);

        let result = map_columns_to_template(&hs, &template);
        assert!((result.score - 0.5).abs() < f64::EPSILON);
        assert_eq!(result.decision, MappingDecision::Insufficient);
    }

    #[test]
    fn test_five_of_eight_needs_confirmation() {
        let template = online_orders_template();
        // khớp 5/8 field bắt buộc → 0.625, nằm trong [0.6, 0.7)
        let hs = headers(&["ngày đặt", "kênh", "số lượng", "đơn giá", "tổng tiền"]);

        let result = map_columns_to_template(&hs, &template);
        assert_eq!(result.decision, MappingDecision::NeedsConfirmation);
    }

    #[test]
    fn test_unmapped_columns_reported() {
        let template = online_orders_template();
        let hs = headers(&["Mã Đơn Hàng", "Ghi Chú Nội Bộ"]);

        let result = map_columns_to_template(&hs, &template);
        assert!(result
            .unmapped_columns
            .contains(&"Ghi Chú Nội Bộ".to_string()));
    }

    #[test]
    fn test_first_matching_header_wins() {
        let template = online_orders_template();
        let hs = headers(&["Ngày Đặt Hàng", "Ngày Giao Hàng"]);

        let result = map_columns_to_template(&hs, &template);
        assert_eq!(
            result.mapping.get("orderDate"),
            Some(&"Ngày Đặt Hàng".to_string())
        );
    }
}
