// ==========================================
// KhoVan Analytics - Lỗi tầng ingest
// ==========================================
// Công cụ: thiserror derive macro
// Chính sách khôi phục: lỗi mức dataset (định dạng / shape / rỗng)
// hủy cả lượt phân tích; lỗi mức field KHÔNG là lỗi - chúng suy biến
// về giá trị mặc định ngay trong field resolver.
// ==========================================

use thiserror::Error;

/// Lỗi mức dataset của pipeline phân tích
#[derive(Error, Debug)]
pub enum IngestError {
    // ===== Lỗi file =====
    #[error("File không tồn tại: {0}")]
    FileNotFound(String),

    #[error("Định dạng file không hỗ trợ: {0} (chỉ hỗ trợ .json/.csv/.xlsx/.xls)")]
    UnsupportedFormat(String),

    #[error("Đọc file thất bại: {0}")]
    FileReadError(String),

    // ===== Lỗi parse =====
    #[error("Parse JSON thất bại: {0}")]
    JsonParseError(String),

    #[error("Parse CSV thất bại: {0}")]
    CsvParseError(String),

    #[error("Parse Excel thất bại: {0}")]
    ExcelParseError(String),

    // ===== Lỗi shape dữ liệu =====
    #[error(
        "Dữ liệu không đúng định dạng: {0}. Cần một mảng đơn hàng hoặc object chứa mảng đơn hàng"
    )]
    DataShapeError(String),

    #[error("Không có đơn hàng nào trong dữ liệu")]
    EmptyDataset,

    // ===== Lỗi chung =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::JsonParseError(err.to_string())
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for IngestError {
    fn from(err: calamine::Error) -> Self {
        IngestError::ExcelParseError(err.to_string())
    }
}

/// Alias kiểu Result
pub type IngestResult<T> = Result<T, IngestError>;
