// ==========================================
// KhoVan Analytics - Kiểu domain
// ==========================================
// Trạng thái đơn / phương thức thanh toán là tập đóng.
// Kênh bán và SLA là nhãn mở (classifier cho phép pass-through),
// nên được giữ dạng String trong CanonicalOrder.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Trạng thái đơn hàng (Order Status)
// ==========================================
// Serialize dạng lowercase (khớp dashboard downstream)
// Mặc định: Processing - cả khi field vắng lẫn khi không match rule nào
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed, // hoàn thành / delivered
    Processing, // đang xử lý / đang giao
    Cancelled, // hủy đơn
    Pending,   // chờ xử lý
    Returned,  // trả hàng / thu hồi
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Processing
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Returned => write!(f, "returned"),
        }
    }
}

// ==========================================
// Phương thức thanh toán (Payment Method)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cod,        // thu hộ khi giao
    Prepaid,    // trả trước / chuyển khoản
    CreditCard, // thẻ tín dụng
    EWallet,    // MoMo / ZaloPay / ví điện tử
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cod => write!(f, "COD"),
            PaymentMethod::Prepaid => write!(f, "Prepaid"),
            PaymentMethod::CreditCard => write!(f, "Credit Card"),
            PaymentMethod::EWallet => write!(f, "E-Wallet"),
        }
    }
}

// ==========================================
// Bậc SLA (SLA Tier)
// ==========================================
// Thứ tự: P1 gấp nhất → P4 chờ xử lý
// Nhãn hiển thị giữ nguyên chuỗi gốc (kèm emoji) - dashboard
// downstream match theo substring "P1"/"P2"/...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlaTier {
    P1, // Gấp
    P2, // Cảnh báo
    P3, // Bình thường
    P4, // Chờ xử lý
}

impl SlaTier {
    /// Nhãn hiển thị đầy đủ của bậc SLA
    pub fn label(&self) -> &'static str {
        match self {
            SlaTier::P1 => "P1 - Gấp 🚀",
            SlaTier::P2 => "P2 - Cảnh báo ⚠️",
            SlaTier::P3 => "P3 - Bình thường ✅",
            SlaTier::P4 => "P4 - Chờ xử lý 🕒",
        }
    }
}

impl fmt::Display for SlaTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
