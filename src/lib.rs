// ==========================================
// KhoVan Analytics - Thư viện lõi
// ==========================================
// Pipeline: RawRecord → Field Resolver → Classifiers + Product Parser
//           → CanonicalOrder → Aggregator → AnalysisSnapshot
// Định vị: thư viện phân tích thuần, không UI / không persistence
// ==========================================

// ==========================================
// Khai báo module
// ==========================================

// Tầng domain - thực thể & kiểu
pub mod domain;

// Tầng ingest - đọc file, shape contract, lỗi dataset
pub mod ingest;

// Tầng pipeline - resolve field, parse sản phẩm, chuẩn hóa bản ghi
pub mod pipeline;

// Bộ phân loại heuristic (kênh / trạng thái / thanh toán / SLA)
pub mod classify;

// Column mapping cho nguồn dạng bảng
pub mod mapping;

// Tổng hợp (fold thuần + merge + finish)
pub mod aggregate;

// Orchestrator - từ file/value đến snapshot
pub mod analyzer;

// Hệ thống log
pub mod logging;

// ==========================================
// Re-export kiểu lõi
// ==========================================

pub use domain::order::{CanonicalOrder, ProductLineItem, RawRecord};
pub use domain::snapshot::{AnalysisSnapshot, DateRange, TopProduct, UploadReport};
pub use domain::types::{OrderStatus, PaymentMethod, SlaTier};

pub use aggregate::OrderAccumulator;
pub use analyzer::OrderAnalyzer;
pub use ingest::{IngestError, IngestResult, UniversalFileParser};
pub use mapping::{ColumnMapping, ColumnSpec, MappingDecision};

// ==========================================
// Hằng số hệ thống
// ==========================================

// Phiên bản
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Tên hệ thống
pub const APP_NAME: &str = "KhoVan Analytics - Phân tích đơn hàng online";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
