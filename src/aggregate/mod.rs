// ==========================================
// KhoVan Analytics - Tầng tổng hợp
// ==========================================

pub mod aggregator;

pub use aggregator::OrderAccumulator;
