// ==========================================
// 家畜体重估算系统 - 导出层
// ==========================================
// 职责: 将瞬态计算结果渲染为 CSV
// 红线: 不做任何计算, 数值原样输出 (不舍入)
// ==========================================

pub mod csv_export;
pub mod error;

pub use csv_export::{
    write_breed_comparison, write_carcass_breakdown, write_formula_comparison,
    write_variation_grid,
};
pub use error::{ExportError, ExportResult};
