// ==========================================
// KhoVan Analytics - Tầng domain
// ==========================================
// Trách nhiệm: định nghĩa thực thể và kiểu nghiệp vụ
// Không chứa logic ingest, không chứa logic tổng hợp
// ==========================================

pub mod order;
pub mod snapshot;
pub mod types;

// Re-export kiểu lõi
pub use order::{CanonicalOrder, ProductLineItem, RawRecord};
pub use snapshot::{AnalysisSnapshot, CodPrepaidSplit, DateRange, TopProduct, UploadReport};
pub use types::{OrderStatus, PaymentMethod, SlaTier};
