// ==========================================
// KhoVan Analytics - Phân loại kênh bán
// ==========================================
// Chuẩn hóa chuỗi kênh thô về nhãn kênh hiển thị.
// Chuỗi không khớp rule nào đi thẳng qua (kênh mới xuất hiện
// vẫn được đếm riêng thay vì gộp vào "Khác").
// ==========================================

/// Nhãn khi field kênh hoàn toàn vắng
pub const UNKNOWN_CHANNEL: &str = "Không xác định";

/// Bảng rule kênh bán, thứ tự quan trọng:
/// "tiktok" phải được thử trước "tiki" vì "tiktok" chứa "tik"
const CHANNEL_RULES: &[(&[&str], &str)] = &[
    (&["shopee", "sp"], "Shopee"),
    (&["lazada", "lzd"], "Lazada"),
    (&["tiktok", "tik tok"], "TikTok Shop"),
    (&["sendo", "sd"], "Sendo"),
    (&["tiki"], "Tiki"),
    (&["website", "web", "trang web"], "Website"),
    (&["facebook", "fb"], "Facebook"),
    (&["zalo"], "Zalo"),
    (&["offline", "cửa hàng", "store"], "Offline"),
    (&["instagram", "ig"], "Instagram"),
];

/// Chuẩn hóa kênh bán
///
/// # Tham số
/// - raw: chuỗi kênh thô từ nguồn (None = field vắng)
///
/// # Trả về
/// - Nhãn chuẩn nếu match rule
/// - Chuỗi gốc (đã trim) nếu không match nhưng không rỗng
/// - "Không xác định" nếu vắng hoặc rỗng
pub fn classify_channel(raw: Option<&str>) -> String {
    let trimmed = match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return UNKNOWN_CHANNEL.to_string(),
    };

    let lower = trimmed.to_lowercase();
    for (keywords, label) in CHANNEL_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            // "tiki" trong "tiktok" đã bị rule TikTok bắt trước,
            // nhưng vẫn chặn trường hợp đảo thứ tự bảng
            if *label == "Tiki" && lower.contains("tiktok") {
                continue;
            }
            return label.to_string();
        }
    }

    trimmed.to_string()
}
