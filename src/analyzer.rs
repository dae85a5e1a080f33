// ==========================================
// KhoVan Analytics - Bộ phân tích đơn hàng
// ==========================================
// Điểm ghép các tầng: ingest → pipeline → aggregate
// Quy trình file: parse → resolve shape → chuẩn hóa → tổng hợp
// ==========================================

use crate::aggregate::OrderAccumulator;
use crate::domain::order::RawRecord;
use crate::domain::snapshot::{AnalysisSnapshot, UploadReport};
use crate::ingest::error::{IngestError, IngestResult};
use crate::ingest::file_parser::UniversalFileParser;
use crate::ingest::shape;
use crate::pipeline::normalize_record;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Bộ phân tích batch đơn hàng upload
pub struct OrderAnalyzer {
    parser: UniversalFileParser,
}

impl Default for OrderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderAnalyzer {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
        }
    }

    /// Phân tích danh sách bản ghi thô với mốc thời gian tiêm vào
    ///
    /// Mọi bản ghi đều vào kết quả (totalOrders == records.len());
    /// bản ghi hỏng suy biến về giá trị mặc định thay vì bị loại.
    pub fn analyze_records_at(
        &self,
        records: &[RawRecord],
        now: DateTime<Utc>,
    ) -> AnalysisSnapshot {
        let mut accumulator = OrderAccumulator::new();
        for (index, record) in records.iter().enumerate() {
            let order = normalize_record(record, index, now);
            accumulator.fold(&order);
        }
        accumulator.finish()
    }

    /// Phân tích danh sách bản ghi thô theo giờ hệ thống
    pub fn analyze_records(&self, records: &[RawRecord]) -> AnalysisSnapshot {
        self.analyze_records_at(records, Utc::now())
    }

    /// Phân tích một giá trị JSON bất kỳ (mảng trần / object bọc / đơn lẻ)
    pub fn analyze_value(&self, value: Value) -> IngestResult<AnalysisSnapshot> {
        let records = shape::resolve_order_array(value)?;
        Ok(self.analyze_records(&records))
    }

    /// Phân tích một file upload, trả về báo cáo đầy đủ
    ///
    /// # Tham số
    /// - file_path: đường dẫn file (.json / .csv / .xlsx / .xls)
    ///
    /// # Trả về
    /// - Ok(UploadReport): mã batch, số bản ghi, thời gian xử lý, snapshot
    /// - Err: lỗi đọc / định dạng / shape / dataset rỗng
    pub fn analyze_file<P: AsRef<Path>>(&self, file_path: P) -> IngestResult<UploadReport> {
        let path = file_path.as_ref();
        let started = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        info!(
            batch_id = batch_id.as_str(),
            file = %path.display(),
            "Bắt đầu phân tích file upload"
        );

        // Giai đoạn 1: parse file thành bản ghi thô
        let records = self.parser.parse(path)?;
        if records.is_empty() {
            return Err(IngestError::EmptyDataset);
        }
        debug!(record_count = records.len(), "Parse file hoàn tất");

        // Giai đoạn 2+3: chuẩn hóa và tổng hợp
        let snapshot = self.analyze_records(&records);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            batch_id = batch_id.as_str(),
            total_orders = snapshot.total_orders,
            total_amount = snapshot.total_amount,
            elapsed_ms,
            "Phân tích hoàn tất"
        );

        Ok(UploadReport {
            batch_id,
            file_name: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
            record_count: records.len(),
            elapsed_ms,
            snapshot,
        })
    }
}
