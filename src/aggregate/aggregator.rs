// ==========================================
// KhoVan Analytics - Bộ tổng hợp đơn hàng
// ==========================================
// Fold thuần trên CanonicalOrder: fold từng đơn, merge hai
// accumulator (kết hợp được, phần tử trung hòa là ::new()),
// finish chốt các giá trị dẫn xuất (trung bình, top N).
//
// Số lượng sản phẩm giữ theo thứ tự xuất hiện đầu tiên;
// sort ở finish là stable nên sản phẩm gặp trước đứng trước
// khi bằng số lượng.
// ==========================================

use crate::domain::order::CanonicalOrder;
use crate::domain::snapshot::{AnalysisSnapshot, CodPrepaidSplit, DateRange, TopProduct};
use crate::domain::types::PaymentMethod;
use crate::pipeline::product_parser::{classify_product_category, is_shipping_fee};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Số sản phẩm giữ lại trong bảng xếp hạng
const TOP_PRODUCTS_LIMIT: usize = 10;

/// Accumulator tổng hợp, khởi tạo rỗng rồi fold từng đơn vào
#[derive(Debug, Clone, Default)]
pub struct OrderAccumulator {
    total_orders: u64,
    total_amount: f64,
    total_cod_amount: f64,
    channels: BTreeMap<String, u64>,
    transporters: BTreeMap<String, u64>,
    statuses: BTreeMap<String, u64>,
    sla_distribution: BTreeMap<String, u64>,
    payment_methods: BTreeMap<String, u64>,
    cities: BTreeMap<String, u64>,
    districts: BTreeMap<String, u64>,
    product_categories: BTreeMap<String, u64>,
    /// (tên, tổng số lượng) theo thứ tự gặp lần đầu
    product_quantities: Vec<(String, u64)>,
    cod_orders: u64,
    prepaid_orders: u64,
    earliest: Option<DateTime<Utc>>,
    latest: Option<DateTime<Utc>>,
}

impl OrderAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold một đơn hàng vào accumulator
    pub fn fold(&mut self, order: &CanonicalOrder) {
        self.total_orders += 1;
        self.total_amount += order.amount;
        self.total_cod_amount += order.cod_amount;

        bump(&mut self.channels, &order.channel);
        bump(&mut self.transporters, &order.transporter);
        bump(&mut self.statuses, &order.status.to_string());
        bump(&mut self.sla_distribution, &order.sla);
        bump(&mut self.payment_methods, &order.payment_method.to_string());

        if order.payment_method == PaymentMethod::Cod {
            self.cod_orders += 1;
        } else {
            self.prepaid_orders += 1;
        }

        if let Some(city) = &order.city {
            bump(&mut self.cities, city);
        }
        if let Some(district) = &order.district {
            bump(&mut self.districts, district);
        }

        for item in &order.product_line_items {
            // dòng phí vận chuyển và tên rỗng không phải sản phẩm
            if item.name.is_empty() || is_shipping_fee(&item.name) {
                continue;
            }
            let quantity = u64::from(item.quantity);
            self.add_product_quantity(&item.name, quantity);
            *self
                .product_categories
                .entry(classify_product_category(&item.name).to_string())
                .or_insert(0) += quantity;
        }

        if let Some(date) = order.order_date {
            self.earliest = Some(self.earliest.map_or(date, |e| e.min(date)));
            self.latest = Some(self.latest.map_or(date, |l| l.max(date)));
        }
    }

    /// Gộp accumulator khác vào (kết hợp được, dùng cho xử lý theo lô)
    pub fn merge(&mut self, other: OrderAccumulator) {
        self.total_orders += other.total_orders;
        self.total_amount += other.total_amount;
        self.total_cod_amount += other.total_cod_amount;
        self.cod_orders += other.cod_orders;
        self.prepaid_orders += other.prepaid_orders;

        merge_counts(&mut self.channels, other.channels);
        merge_counts(&mut self.transporters, other.transporters);
        merge_counts(&mut self.statuses, other.statuses);
        merge_counts(&mut self.sla_distribution, other.sla_distribution);
        merge_counts(&mut self.payment_methods, other.payment_methods);
        merge_counts(&mut self.cities, other.cities);
        merge_counts(&mut self.districts, other.districts);
        merge_counts(&mut self.product_categories, other.product_categories);

        for (name, quantity) in other.product_quantities {
            self.add_product_quantity(&name, quantity);
        }

        self.earliest = min_opt(self.earliest, other.earliest);
        self.latest = max_opt(self.latest, other.latest);
    }

    /// Chốt snapshot: tính trung bình và top sản phẩm
    pub fn finish(self) -> AnalysisSnapshot {
        let avg_order_value = if self.total_orders > 0 {
            self.total_amount / self.total_orders as f64
        } else {
            0.0
        };
        // trung bình COD chia cho SỐ ĐƠN COD, không phải tổng đơn
        let avg_cod_value = if self.cod_orders > 0 {
            self.total_cod_amount / self.cod_orders as f64
        } else {
            0.0
        };

        let mut top_products: Vec<TopProduct> = self
            .product_quantities
            .into_iter()
            .map(|(name, quantity)| TopProduct { name, quantity })
            .collect();
        // sort stable: bằng số lượng thì giữ thứ tự gặp lần đầu
        top_products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top_products.truncate(TOP_PRODUCTS_LIMIT);

        AnalysisSnapshot {
            total_orders: self.total_orders,
            total_amount: self.total_amount,
            total_cod_amount: self.total_cod_amount,
            avg_order_value,
            avg_cod_value,
            channels: self.channels,
            transporters: self.transporters,
            statuses: self.statuses,
            sla_distribution: self.sla_distribution,
            payment_methods: self.payment_methods,
            cities: self.cities,
            districts: self.districts,
            product_categories: self.product_categories,
            top_products,
            cod_vs_prepaid: CodPrepaidSplit {
                cod: self.cod_orders,
                prepaid: self.prepaid_orders,
            },
            date_range: DateRange {
                earliest: self.earliest,
                latest: self.latest,
            },
        }
    }

    fn add_product_quantity(&mut self, name: &str, quantity: u64) {
        match self
            .product_quantities
            .iter_mut()
            .find(|(existing, _)| existing == name)
        {
            Some((_, total)) => *total += quantity,
            None => self.product_quantities.push((name.to_string(), quantity)),
        }
    }
}

fn bump(counts: &mut BTreeMap<String, u64>, key: &str) {
    *counts.entry(key.to_string()).or_insert(0) += 1;
}

fn merge_counts(into: &mut BTreeMap<String, u64>, from: BTreeMap<String, u64>) {
    for (key, count) in from {
        *into.entry(key).or_insert(0) += count;
    }
}

fn min_opt(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, y) => x.or(y),
    }
}

fn max_opt(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, y) => x.or(y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::ProductLineItem;
    use crate::domain::types::{OrderStatus, SlaTier};

    fn order(id: &str, channel: &str, amount: f64) -> CanonicalOrder {
        CanonicalOrder {
            order_id: id.to_string(),
            order_date: None,
            channel: channel.to_string(),
            raw_channel: None,
            amount,
            cod_amount: 0.0,
            status: OrderStatus::Processing,
            sla: SlaTier::P3.label().to_string(),
            payment_method: PaymentMethod::Prepaid,
            transporter: "GHN".to_string(),
            city: None,
            district: None,
            product_line_items: Vec::new(),
        }
    }

    #[test]
    fn test_basic_totals_and_averages() {
        let mut acc = OrderAccumulator::new();
        acc.fold(&order("1", "Shopee", 100_000.0));
        acc.fold(&order("2", "Shopee", 300_000.0));
        acc.fold(&order("3", "Lazada", 200_000.0));

        let snapshot = acc.finish();
        assert_eq!(snapshot.total_orders, 3);
        assert_eq!(snapshot.total_amount, 600_000.0);
        assert_eq!(snapshot.avg_order_value, 200_000.0);
        assert_eq!(snapshot.channels.get("Shopee"), Some(&2));
        assert_eq!(snapshot.channels.get("Lazada"), Some(&1));
    }

    #[test]
    fn test_avg_cod_divides_by_cod_orders_only() {
        let mut acc = OrderAccumulator::new();
        let mut cod_order = order("1", "Shopee", 100_000.0);
        cod_order.cod_amount = 100_000.0;
        cod_order.payment_method = PaymentMethod::Cod;
        acc.fold(&cod_order);
        acc.fold(&order("2", "Shopee", 500_000.0));

        let snapshot = acc.finish();
        assert_eq!(snapshot.avg_cod_value, 100_000.0);
        assert_eq!(snapshot.cod_vs_prepaid.cod, 1);
        assert_eq!(snapshot.cod_vs_prepaid.prepaid, 1);
    }

    #[test]
    fn test_top_products_sorted_with_first_seen_tiebreak() {
        let mut acc = OrderAccumulator::new();
        let mut o = order("1", "Shopee", 0.0);
        o.product_line_items = vec![
            ProductLineItem {
                name: "Vali 28L".to_string(),
                quantity: 1,
            },
            ProductLineItem {
                name: "Tag hành lý".to_string(),
                quantity: 1,
            },
            ProductLineItem {
                name: "Balo du lịch".to_string(),
                quantity: 3,
            },
        ];
        acc.fold(&o);

        let snapshot = acc.finish();
        let names: Vec<&str> = snapshot
            .top_products
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        // số lượng bằng nhau: "Vali 28L" gặp trước nên đứng trước
        assert_eq!(names, vec!["Balo du lịch", "Vali 28L", "Tag hành lý"]);
    }

    #[test]
    fn test_top_products_truncated_to_ten() {
        let mut acc = OrderAccumulator::new();
        let mut o = order("1", "Shopee", 0.0);
        o.product_line_items = (0..15)
            .map(|i| ProductLineItem {
                name: format!("Sản phẩm {}", i),
                quantity: 1,
            })
            .collect();
        acc.fold(&o);

        assert_eq!(acc.finish().top_products.len(), 10);
    }

    #[test]
    fn test_shipping_fee_lines_excluded_from_products() {
        let mut acc = OrderAccumulator::new();
        let mut o = order("1", "Shopee", 0.0);
        o.product_line_items = vec![
            ProductLineItem {
                name: "Vali 28L".to_string(),
                quantity: 1,
            },
            ProductLineItem {
                name: "Thu phí vận chuyển".to_string(),
                quantity: 1,
            },
        ];
        acc.fold(&o);

        let snapshot = acc.finish();
        assert_eq!(snapshot.top_products.len(), 1);
        assert_eq!(snapshot.product_categories.get("Túi & Vali"), Some(&1));
        assert!(snapshot.product_categories.get("Khác").is_none());
    }

    #[test]
    fn test_categories_count_quantities() {
        let mut acc = OrderAccumulator::new();
        let mut o = order("1", "Shopee", 0.0);
        o.product_line_items = vec![ProductLineItem {
            name: "Giày thể thao".to_string(),
            quantity: 4,
        }];
        acc.fold(&o);

        assert_eq!(acc.finish().product_categories.get("Giày dép"), Some(&4));
    }

    #[test]
    fn test_merge_equals_sequential_fold() {
        let orders: Vec<CanonicalOrder> = vec![
            order("1", "Shopee", 100_000.0),
            order("2", "Lazada", 200_000.0),
            order("3", "Tiki", 300_000.0),
            order("4", "Shopee", 400_000.0),
        ];

        let mut sequential = OrderAccumulator::new();
        for o in &orders {
            sequential.fold(o);
        }

        let mut left = OrderAccumulator::new();
        left.fold(&orders[0]);
        left.fold(&orders[1]);
        let mut right = OrderAccumulator::new();
        right.fold(&orders[2]);
        right.fold(&orders[3]);
        left.merge(right);

        let a = sequential.finish();
        let b = left.finish();
        assert_eq!(a.total_orders, b.total_orders);
        assert_eq!(a.total_amount, b.total_amount);
        assert_eq!(a.channels, b.channels);
        assert_eq!(a.avg_order_value, b.avg_order_value);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let mut acc = OrderAccumulator::new();
        acc.fold(&order("1", "Shopee", 100_000.0));
        acc.merge(OrderAccumulator::new());

        let snapshot = acc.finish();
        assert_eq!(snapshot.total_orders, 1);
        assert_eq!(snapshot.total_amount, 100_000.0);
    }

    #[test]
    fn test_date_range() {
        use chrono::TimeZone;
        let mut acc = OrderAccumulator::new();
        let mut o1 = order("1", "Shopee", 0.0);
        o1.order_date = Some(Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap());
        let mut o2 = order("2", "Shopee", 0.0);
        o2.order_date = Some(Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap());
        let o3 = order("3", "Shopee", 0.0); // không có ngày
        acc.fold(&o1);
        acc.fold(&o2);
        acc.fold(&o3);

        let snapshot = acc.finish();
        assert_eq!(
            snapshot.date_range.earliest,
            Some(Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap())
        );
        assert_eq!(
            snapshot.date_range.latest,
            Some(Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap())
        );
    }
}
