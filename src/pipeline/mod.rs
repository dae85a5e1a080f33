// ==========================================
// KhoVan Analytics - Tầng pipeline
// ==========================================
// Trách nhiệm: từ bản ghi thô đến CanonicalOrder
// Mọi hàm trong tầng này đều thuần và không-fail:
// lỗi mức field suy biến về giá trị mặc định
// ==========================================

pub mod field_resolver;
pub mod normalizer;
pub mod product_parser;

pub use normalizer::normalize_record;
pub use product_parser::{classify_product_category, is_shipping_fee, parse_product_list};
