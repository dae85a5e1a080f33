// ==========================================
// KhoVan Analytics - CLI phân tích file đơn hàng
// ==========================================
// Cách dùng: khovan-analytics <đường_dẫn_file>
// In báo cáo phân tích dạng JSON ra stdout
// ==========================================

use anyhow::{bail, Context, Result};
use khovan_analytics::{logging, OrderAnalyzer};

fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let file_path = match args.next() {
        Some(path) => path,
        None => {
            bail!(
                "Thiếu đường dẫn file.\nCách dùng: khovan-analytics <file.json|file.csv|file.xlsx>"
            );
        }
    };

    let analyzer = OrderAnalyzer::new();
    let report = analyzer
        .analyze_file(&file_path)
        .with_context(|| format!("Phân tích file thất bại: {}", file_path))?;

    let output = serde_json::to_string_pretty(&report).context("Serialize báo cáo thất bại")?;
    println!("{}", output);

    Ok(())
}
