// ==========================================
// KhoVan Analytics - Tầng phân loại
// ==========================================
// Bốn bộ phân loại, mỗi bộ là một bảng rule có thứ tự:
// rule đầu tiên match thắng. Toàn bộ đều thuần, không-fail.
// ==========================================

pub mod channel;
pub mod payment;
pub mod sla;
pub mod status;

pub use channel::classify_channel;
pub use payment::classify_payment_method;
pub use sla::{classify_sla, SlaContext};
pub use status::classify_status;
