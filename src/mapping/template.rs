// ==========================================
// KhoVan Analytics - Template đơn hàng online
// ==========================================

/// Mô tả một field trong template nhập liệu
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Khóa field chuẩn (dùng trong mapping kết quả)
    pub field: &'static str,
    /// Nhãn tiếng Việt hiển thị trên template
    pub label: &'static str,
    /// Field bắt buộc (tham gia tính điểm ánh xạ)
    pub required: bool,
    /// Keyword phụ để dò header (ngoài nhãn)
    pub keywords: &'static [&'static str],
}

/// Template chuẩn cho file upload đơn hàng online: 11 field, 8 bắt buộc
pub fn online_orders_template() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec {
            field: "orderId",
            label: "Mã Đơn Hàng",
            required: true,
            keywords: &["order", "mã", "id"],
        },
        ColumnSpec {
            field: "orderDate",
            label: "Ngày Đặt Hàng",
            required: true,
            keywords: &["date", "ngày"],
        },
        ColumnSpec {
            field: "channel",
            label: "Kênh Bán Hàng",
            required: true,
            keywords: &["channel", "kênh"],
        },
        ColumnSpec {
            field: "productCode",
            label: "Mã Sản Phẩm",
            required: true,
            keywords: &["product", "sản phẩm", "mã"],
        },
        ColumnSpec {
            field: "productName",
            label: "Tên Sản Phẩm",
            required: false,
            keywords: &[],
        },
        ColumnSpec {
            field: "quantity",
            label: "Số Lượng",
            required: true,
            keywords: &["quantity", "số lượng", "sl"],
        },
        ColumnSpec {
            field: "unitPrice",
            label: "Đơn Giá",
            required: true,
            keywords: &["price", "giá", "đơn giá"],
        },
        ColumnSpec {
            field: "totalAmount",
            label: "Tổng Tiền",
            required: true,
            keywords: &["total", "tổng", "amount"],
        },
        ColumnSpec {
            field: "shippingFee",
            label: "Phí Vận Chuyển",
            required: false,
            keywords: &[],
        },
        ColumnSpec {
            field: "customerProvince",
            label: "Tỉnh/TP Khách Hàng",
            required: false,
            keywords: &[],
        },
        ColumnSpec {
            field: "orderStatus",
            label: "Trạng Thái Đơn Hàng",
            required: true,
            keywords: &["status", "trạng thái"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_shape() {
        let template = online_orders_template();
        assert_eq!(template.len(), 11);
        assert_eq!(template.iter().filter(|s| s.required).count(), 8);
    }
}
