// ==========================================
// KhoVan Analytics - Phân loại phương thức thanh toán
// ==========================================

use crate::domain::types::PaymentMethod;

/// Bảng rule phương thức thanh toán
const PAYMENT_RULES: &[(&[&str], PaymentMethod)] = &[
    (&["cod", "tiền mặt", "thu hộ"], PaymentMethod::Cod),
    (
        &["prepaid", "trả trước", "banking", "chuyển khoản"],
        PaymentMethod::Prepaid,
    ),
    (&["credit", "thẻ tín dụng"], PaymentMethod::CreditCard),
    (
        &["momo", "zalopay", "wallet", "ví điện tử"],
        PaymentMethod::EWallet,
    ),
];

/// Chuẩn hóa phương thức thanh toán
///
/// # Tham số
/// - raw: chuỗi thanh toán thô (None = field vắng)
/// - cod_amount: tiền thu hộ đã resolve, dùng cho fallback
///
/// # Trả về
/// Field vắng hoặc không khớp rule nào → suy từ tiền COD:
/// cod_amount > 0 là COD, ngược lại Prepaid.
pub fn classify_payment_method(raw: Option<&str>, cod_amount: f64) -> PaymentMethod {
    if let Some(s) = raw {
        let lower = s.trim().to_lowercase();
        if !lower.is_empty() {
            for (keywords, method) in PAYMENT_RULES {
                if keywords.iter().any(|k| lower.contains(k)) {
                    return *method;
                }
            }
        }
    }

    if cod_amount > 0.0 {
        PaymentMethod::Cod
    } else {
        PaymentMethod::Prepaid
    }
}
