// ==========================================
// KhoVan Analytics - Tầng ingest
// ==========================================
// Trách nhiệm: đọc file upload thành mảng RawRecord
// Hỗ trợ: JSON, CSV, Excel (.xlsx/.xls)
// ==========================================

pub mod error;
pub mod file_parser;
pub mod shape;

pub use error::{IngestError, IngestResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, JsonParser, UniversalFileParser};
pub use shape::resolve_order_array;
