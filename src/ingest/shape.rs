// ==========================================
// KhoVan Analytics - Shape contract đầu vào
// ==========================================
// Các shape gốc được chấp nhận, thử theo thứ tự:
//   (a) mảng trần các bản ghi
//   (b) object có một key phổ biến chứa mảng đơn hàng
//   (c) object có đúng một property dạng mảng (lấy cái đầu tiên)
//   (d) object là MỘT đơn hàng đơn lẻ → bọc thành mảng 1 phần tử
// Không khớp shape nào, hoặc mảng rỗng → lỗi mức dataset
// ==========================================

use crate::domain::order::RawRecord;
use crate::ingest::error::{IngestError, IngestResult};
use serde_json::Value;
use tracing::debug;

/// Các key phổ biến bọc mảng đơn hàng
const WRAPPER_KEYS: &[&str] = &["orders", "data", "items", "results", "records", "order_list"];

/// Field nhận diện một object là đơn hàng đơn lẻ
/// (thử cả dạng có tiền tố "order_")
const ORDER_MARKER_FIELDS: &[&str] = &["id", "order_id", "channel", "amount", "status"];

/// Resolve giá trị JSON bất kỳ thành mảng bản ghi đơn hàng
///
/// # Trả về
/// - Ok(Vec<RawRecord>): mảng bản ghi (luôn >= 1 phần tử)
/// - Err(DataShapeError): không tìm được mảng đơn hàng
/// - Err(EmptyDataset): tìm được mảng nhưng rỗng
pub fn resolve_order_array(value: Value) -> IngestResult<Vec<RawRecord>> {
    let type_name = json_type_name(&value);

    let array = match value {
        Value::Array(items) => Some(items),

        Value::Object(map) => {
            // (b) thử các key bọc phổ biến
            let mut found: Option<Vec<Value>> = None;
            for key in WRAPPER_KEYS {
                if let Some(Value::Array(items)) = map.get(*key) {
                    debug!(key = key, "Tìm thấy mảng đơn hàng trong key bọc");
                    found = Some(items.clone());
                    break;
                }
            }

            // (c) property dạng mảng đầu tiên (theo thứ tự tài liệu)
            if found.is_none() {
                found = map.values().find_map(|v| match v {
                    Value::Array(items) => Some(items.clone()),
                    _ => None,
                });
                if found.is_some() {
                    debug!("Dùng property dạng mảng đầu tiên");
                }
            }

            // (d) object đơn lẻ có field nhận diện đơn hàng
            if found.is_none() && !map.is_empty() && looks_like_single_order(&map) {
                debug!("Phát hiện một đơn hàng đơn lẻ, bọc thành mảng");
                found = Some(vec![Value::Object(map)]);
            }

            found
        }

        _ => None,
    };

    match array {
        Some(items) if items.is_empty() => Err(IngestError::EmptyDataset),
        Some(items) => Ok(items.into_iter().map(value_to_record).collect()),
        None => Err(IngestError::DataShapeError(type_name.to_string())),
    }
}

/// Object có phải một đơn hàng đơn lẻ không
fn looks_like_single_order(map: &RawRecord) -> bool {
    ORDER_MARKER_FIELDS.iter().any(|field| {
        map.contains_key(*field) || map.contains_key(format!("order_{}", field).as_str())
    })
}

/// Phần tử mảng → bản ghi thô
///
/// Phần tử không phải object vẫn được tính là một đơn (mọi field
/// vắng → toàn giá trị mặc định), giữ bất biến totalOrders == N.
fn value_to_record(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        _ => RawRecord::new(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let records = resolve_order_array(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_wrapper_key_data() {
        let value = json!({"error": false, "message": "OK", "data": [{"id": 1}]});
        let records = resolve_order_array(value).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_wrapper_key_order_list() {
        let value = json!({"order_list": [{"id": 7}, {"id": 8}, {"id": 9}]});
        let records = resolve_order_array(value).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_first_array_valued_property() {
        // Không có key bọc quen thuộc - lấy property dạng mảng đầu tiên
        let value = json!({"meta": "x", "don_hang": [{"id": 1}], "khac": [{"id": 2}, {"id": 3}]});
        let records = resolve_order_array(value).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_single_order_wrapped() {
        let value = json!({"order_id": "SO001", "customer": "Shopee"});
        let records = resolve_order_array(value).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get("order_id").and_then(|v| v.as_str()),
            Some("SO001")
        );
    }

    #[test]
    fn test_empty_array_is_empty_dataset() {
        assert!(matches!(
            resolve_order_array(json!([])),
            Err(IngestError::EmptyDataset)
        ));
        assert!(matches!(
            resolve_order_array(json!({"data": []})),
            Err(IngestError::EmptyDataset)
        ));
    }

    #[test]
    fn test_non_array_non_object_is_shape_error() {
        assert!(matches!(
            resolve_order_array(json!("chuỗi")),
            Err(IngestError::DataShapeError(_))
        ));
        assert!(matches!(
            resolve_order_array(json!(42)),
            Err(IngestError::DataShapeError(_))
        ));
    }

    #[test]
    fn test_object_without_markers_is_shape_error() {
        let value = json!({"foo": "bar", "baz": 1});
        assert!(matches!(
            resolve_order_array(value),
            Err(IngestError::DataShapeError(_))
        ));
    }
}
