// ==========================================
// KhoVan Analytics - Tầng ánh xạ cột
// ==========================================
// Gợi ý ánh xạ header file upload → field template chuẩn,
// chấm điểm độ phủ field bắt buộc và ra quyết định
// tự áp dụng / cần xác nhận / không đủ.
// ==========================================

pub mod column_mapper;
pub mod template;

pub use column_mapper::{map_columns_to_template, ColumnMapping, MappingDecision};
pub use template::{online_orders_template, ColumnSpec};
