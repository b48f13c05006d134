// ==========================================
// 家畜体重估算系统 - CSV 导出
// ==========================================
// 职责: 公式对比 / 品种排名 / 变异网格 / 胴体分解 → CSV
// 约定:
//   - 第一行为表头
//   - 数值以完整精度输出, 舍入交给使用方
//   - 输出目标为任意 std::io::Write (文件 / stdout / 内存)
// ==========================================

use crate::domain::{CarcassBreakdown, FormulaComparison, RankedBreed, VariationGrid};
use crate::export::error::ExportResult;
use std::io::Write;
use tracing::debug;

/// 公式对比表: 每个公式一行, 保持注册顺序
pub fn write_formula_comparison<W: Write>(
    comparison: &FormulaComparison,
    out: W,
) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "formula",
        "raw_weight_kg",
        "corrected_weight_kg",
        "assigned",
        "formula_text",
        "citation",
    ])?;

    for row in &comparison.rows {
        writer.write_record([
            row.formula_name.clone(),
            row.raw_weight.to_string(),
            row.corrected_weight.to_string(),
            row.is_assigned.to_string(),
            row.formula_text.clone(),
            row.citation.clone(),
        ])?;
    }

    writer.flush()?;
    debug!(rows = comparison.rows.len(), "公式对比 CSV 导出完成");
    Ok(())
}

/// 品种排名表: rank 从 1 开始
pub fn write_breed_comparison<W: Write>(ranking: &[RankedBreed], out: W) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["rank", "breed", "corrected_weight_kg", "formula"])?;

    for row in ranking {
        writer.write_record([
            row.rank.to_string(),
            row.breed_name.clone(),
            row.corrected_weight.to_string(),
            row.formula_name.clone(),
        ])?;
    }

    writer.flush()?;
    debug!(rows = ranking.len(), "品种排名 CSV 导出完成");
    Ok(())
}

/// 变异网格: 长表格式, 每个单元格一行 (胸围优先)
pub fn write_variation_grid<W: Write>(grid: &VariationGrid, out: W) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["chest_girth_cm", "body_length_cm", "corrected_weight_kg"])?;

    for (ld, pb, weight) in grid.cells() {
        writer.write_record([ld.to_string(), pb.to_string(), weight.to_string()])?;
    }

    writer.flush()?;
    debug!(cells = grid.cell_count(), "变异网格 CSV 导出完成");
    Ok(())
}

/// 胴体分解表
///
/// 行顺序: 活重, 胴体, 净肉, 骨脂, 各非胴体组分 (文献顺序, Other 在末尾)
/// percent 列均为占活重百分比
pub fn write_carcass_breakdown<W: Write>(breakdown: &CarcassBreakdown, out: W) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["item", "percent_of_live_weight", "weight_kg"])?;

    let bone_and_fat_percent = breakdown.carcass_percent - breakdown.meat_percent_of_body;
    let fixed_rows = [
        ("live_weight", 100.0, breakdown.live_weight),
        ("carcass", breakdown.carcass_percent, breakdown.carcass_weight),
        ("meat", breakdown.meat_percent_of_body, breakdown.meat_weight),
        ("bone_and_fat", bone_and_fat_percent, breakdown.bone_and_fat_weight),
    ];
    for (item, percent, weight) in fixed_rows {
        writer.write_record([item.to_string(), percent.to_string(), weight.to_string()])?;
    }

    for component in &breakdown.non_carcass_weights {
        writer.write_record([
            component.component.to_string(),
            component.percent.to_string(),
            component.weight_kg.to_string(),
        ])?;
    }

    writer.flush()?;
    debug!(
        components = breakdown.non_carcass_weights.len(),
        "胴体分解 CSV 导出完成"
    );
    Ok(())
}
