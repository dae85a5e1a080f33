// ==========================================
// KhoVan Analytics - Parser danh sách sản phẩm
// ==========================================
// Ngữ pháp field "detail":
//   danh sách phân cách bởi dấu phẩy, mỗi mục dạng "tên(số lượng)"
//   với số lượng là số nguyên trong ngoặc ở CUỐI mục;
//   không có ngoặc → cả mục là tên, số lượng = 1
// Ví dụ: "Vali 28L(1), Tag hành lý(2)"
// ==========================================

use crate::domain::order::ProductLineItem;

/// Dấu hiệu một dòng là phí vận chuyển, không phải sản phẩm
/// (bị loại khỏi đếm sản phẩm/danh mục nhưng vẫn giữ trong parse)
const SHIPPING_FEE_MARKERS: &[&str] = &["phí vận chuyển", "thu phí"];

/// Bảng phân loại danh mục sản phẩm (rule đầu tiên match thắng)
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["vali", "túi", "balo"], "Túi & Vali"),
    (&["giày", "dép"], "Giày dép"),
    (&["áo", "quần"], "Thời trang"),
    (&["phụ kiện", "ví"], "Phụ kiện"),
];

/// Danh mục mặc định khi không rule nào match
pub const DEFAULT_CATEGORY: &str = "Khác";

/// Parse chuỗi "detail" thành danh sách (tên, số lượng)
///
/// Số lượng 0 được ép về 1 (bất biến quantity >= 1).
/// Mục rỗng (chuỗi trống giữa hai dấu phẩy) bị bỏ qua.
pub fn parse_product_list(detail: &str) -> Vec<ProductLineItem> {
    detail
        .split(',')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(parse_segment(trimmed))
        })
        .collect()
}

/// Một mục → (tên, số lượng)
fn parse_segment(segment: &str) -> ProductLineItem {
    if let Some((name, quantity)) = split_trailing_quantity(segment) {
        ProductLineItem {
            name: name.trim().to_string(),
            quantity: quantity.max(1),
        }
    } else {
        ProductLineItem {
            name: segment.to_string(),
            quantity: 1,
        }
    }
}

/// Tách "(số nguyên)" ở cuối mục: "Vali 28L(1)" → ("Vali 28L", 1)
fn split_trailing_quantity(segment: &str) -> Option<(&str, u32)> {
    let rest = segment.strip_suffix(')')?;
    let open = rest.rfind('(')?;
    let digits = &rest[open + 1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let quantity = digits.parse::<u32>().ok()?;
    Some((&rest[..open], quantity))
}

/// Dòng này có phải phí vận chuyển không
pub fn is_shipping_fee(name: &str) -> bool {
    let lower = name.to_lowercase();
    SHIPPING_FEE_MARKERS.iter().any(|m| lower.contains(m))
}

/// Phân loại danh mục theo tên sản phẩm (substring, lowercase)
pub fn classify_product_category(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return category;
        }
    }
    DEFAULT_CATEGORY
}
