// ==========================================
// KhoVan Analytics - Bộ phân tích file upload
// ==========================================
// Hỗ trợ: JSON (.json) / CSV (.csv) / Excel (.xlsx/.xls)
// Đầu ra thống nhất: Vec<RawRecord> - pipeline phía sau
// không cần biết nguồn là file gì
// ==========================================

use crate::domain::order::RawRecord;
use crate::ingest::error::{IngestError, IngestResult};
use crate::ingest::shape;
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// Giao diện chung: file → mảng bản ghi thô
pub trait FileParser: Send + Sync {
    /// Parse file thành danh sách bản ghi thô
    ///
    /// # Tham số
    /// - file_path: đường dẫn file
    ///
    /// # Trả về
    /// - Ok(Vec<RawRecord>): danh sách bản ghi
    /// - Err: lỗi đọc file / định dạng / shape
    fn parse_to_raw_records(&self, file_path: &Path) -> IngestResult<Vec<RawRecord>>;
}

// ==========================================
// JSON Parser
// ==========================================
// JSON upload có thể là mảng trần, object bọc mảng, hoặc một đơn
// đơn lẻ - shape contract xử lý trong ingest::shape
pub struct JsonParser;

impl FileParser for JsonParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> IngestResult<Vec<RawRecord>> {
        if !file_path.exists() {
            return Err(IngestError::FileNotFound(file_path.display().to_string()));
        }

        let content = std::fs::read_to_string(file_path)?;
        let value: Value = serde_json::from_str(&content)?;

        shape::resolve_order_array(value)
    }
}

// ==========================================
// CSV Parser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> IngestResult<Vec<RawRecord>> {
        if !file_path.exists() {
            return Err(IngestError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // cho phép độ dài dòng không đều
            .from_reader(file);

        // Đọc header
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // Đọc từng dòng
        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let mut record = RawRecord::new();

            for (col_idx, value) in row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    record.insert(header.clone(), Value::String(value.trim().to_string()));
                }
            }

            // Bỏ qua dòng trống hoàn toàn
            if record
                .values()
                .all(|v| v.as_str().map(|s| s.is_empty()).unwrap_or(false))
            {
                continue;
            }

            records.push(record);
        }

        Ok(records)
    }
}

// ==========================================
// Excel Parser
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> IngestResult<Vec<RawRecord>> {
        if !file_path.exists() {
            return Err(IngestError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| IngestError::ExcelParseError(e.to_string()))?;

        // Đọc sheet đầu tiên
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(IngestError::ExcelParseError(
                "File Excel không có worksheet".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| IngestError::ExcelParseError(e.to_string()))?;

        // Dòng đầu là header
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| IngestError::ExcelParseError("File Excel không có dữ liệu".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // Đọc các dòng dữ liệu
        let mut records = Vec::new();
        for data_row in rows {
            let mut record = RawRecord::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    let value = cell.to_string().trim().to_string();
                    record.insert(header.clone(), Value::String(value));
                }
            }

            // Bỏ qua dòng trống hoàn toàn
            if record
                .values()
                .all(|v| v.as_str().map(|s| s.is_empty()).unwrap_or(false))
            {
                continue;
            }

            records.push(record);
        }

        Ok(records)
    }
}

// ==========================================
// Bộ phân tích tổng hợp (chọn parser theo đuôi file)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> IngestResult<Vec<RawRecord>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => JsonParser.parse_to_raw_records(path),
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(path),
            _ => Err(IngestError::UnsupportedFormat(ext)),
        }
    }
}
