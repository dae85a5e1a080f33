// ==========================================
// KhoVan Analytics - Analysis Snapshot
// ==========================================
// Kết quả tổng hợp của một lượt upload/phân tích.
// Chỉ chứa số liệu gộp, không sở hữu bản ghi đơn lẻ.
// Bất biến sau khi fold hoàn tất.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Khoảng ngày của dataset (chỉ tính bản ghi có ngày hợp lệ)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
}

/// Một sản phẩm trong top-N theo số lượng
///
/// Dùng danh sách thay vì map: thứ tự (giảm dần theo số lượng,
/// hòa thì theo thứ tự gặp đầu tiên) là một phần của hợp đồng đầu ra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub quantity: u64,
}

/// Số đơn COD / trả trước
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodPrepaidSplit {
    pub cod: u64,
    pub prepaid: u64,
}

/// Snapshot phân tích - serialize được thành JSON thuần
/// (mọi map key theo nhãn string, mọi số đều hữu hạn)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    pub total_orders: u64,
    pub total_amount: f64,
    pub total_cod_amount: f64,
    pub avg_order_value: f64,
    /// Trung bình COD = tổng COD / số đơn COD (0 nếu không có đơn COD)
    pub avg_cod_value: f64,

    // Các phân phối đếm theo nhãn
    pub channels: BTreeMap<String, u64>,
    pub transporters: BTreeMap<String, u64>,
    pub statuses: BTreeMap<String, u64>,
    pub sla_distribution: BTreeMap<String, u64>,
    pub payment_methods: BTreeMap<String, u64>,
    pub cities: BTreeMap<String, u64>,
    pub districts: BTreeMap<String, u64>,
    /// Đếm theo số lượng sản phẩm (không phải số đơn)
    pub product_categories: BTreeMap<String, u64>,

    /// Top 10 sản phẩm theo số lượng
    pub top_products: Vec<TopProduct>,

    pub cod_vs_prepaid: CodPrepaidSplit,
    pub date_range: DateRange,
}

/// Kết quả một lượt upload: snapshot + metadata batch
///
/// Tương tự ImportResult của pipeline import: mỗi lượt phân tích
/// được gắn batch id để đối chiếu log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReport {
    pub batch_id: String,
    pub file_name: String,
    pub record_count: usize,
    pub elapsed_ms: u64,
    pub snapshot: AnalysisSnapshot,
}
