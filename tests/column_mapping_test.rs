// ==========================================
// KhoVan Analytics - Test ánh xạ cột
// ==========================================
// Kịch bản thực tế: header đọc từ file CSV upload,
// gợi ý mapping và ngưỡng quyết định.
// ==========================================

use khovan_analytics::mapping::{map_columns_to_template, online_orders_template};
use khovan_analytics::{logging, MappingDecision, UniversalFileParser};
use std::io::Write;

fn headers(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_csv_headers_through_mapping() {
    logging::init_test();
    // header lấy từ file thật qua parser
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("tạo file tạm thất bại");
    writeln!(
        file,
        "order_id,order_date,channel,product_code,quantity,unit_price,total_amount,status"
    )
    .unwrap();
    writeln!(file, "SO001,2025-01-15,Shopee,SP01,1,450000,450000,done").unwrap();

    let records = UniversalFileParser.parse(file.path()).unwrap();
    let file_headers: Vec<String> = records[0].keys().cloned().collect();

    let result = map_columns_to_template(&file_headers, &online_orders_template());
    assert_eq!(result.score, 1.0);
    assert_eq!(result.decision, MappingDecision::AutoApply);
}

#[test]
fn test_decision_thresholds() {
    logging::init_test();
    let template = online_orders_template();

    // 8/8 bắt buộc → auto apply
    let full = map_columns_to_template(
        &headers(&[
            "order_id", "order_date", "channel", "product_code", "quantity", "unit_price",
            "total_amount", "status",
        ]),
        &template,
    );
    assert_eq!(full.decision, MappingDecision::AutoApply);

    // 5/8 = 0.625 → cần xác nhận
    let partial = map_columns_to_template(
        &headers(&["ngày đặt", "kênh", "số lượng", "đơn giá", "tổng tiền"]),
        &template,
    );
    assert!((partial.score - 0.625).abs() < 1e-9);
    assert_eq!(partial.decision, MappingDecision::NeedsConfirmation);

    // 4/8 = 0.5 → không đủ
    let poor = map_columns_to_template(
        &headers(&["order_id", "order_date", "channel", "status"]),
        &template,
    );
    assert!((poor.score - 0.5).abs() < 1e-9);
    assert_eq!(poor.decision, MappingDecision::Insufficient);
}

#[test]
fn test_no_headers_match() {
    logging::init_test();
    let result = map_columns_to_template(
        &headers(&["cột lạ 1", "cột lạ 2"]),
        &online_orders_template(),
    );
    assert_eq!(result.score, 0.0);
    assert_eq!(result.decision, MappingDecision::Insufficient);
    assert_eq!(result.unmapped_columns.len(), 2);
}
