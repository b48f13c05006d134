// ==========================================
// 家畜体重估算系统 - 公式对比引擎
// ==========================================
// 职责: 同一组测量值下, 计算畜种全部已注册公式的结果
// 红线: 所有行使用所选品种的同一组校正系数
//       行顺序 = 公式注册顺序
// ==========================================

use crate::domain::{FormulaComparison, FormulaComparisonRow, MeasurementAxis, Sex, Species};
use crate::engine::estimator::apply_formula;
use crate::error::{ensure_measurement, CalcResult};
use crate::reference::ReferenceData;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy)]
pub struct FormulaComparator<'a> {
    reference: &'a ReferenceData,
}

impl<'a> FormulaComparator<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn compare(
        &self,
        species: Species,
        breed: &str,
        sex: Sex,
        chest_girth_cm: f64,
        body_length_cm: f64,
    ) -> CalcResult<FormulaComparison> {
        let ld = ensure_measurement(MeasurementAxis::ChestGirth.field_name(), chest_girth_cm)?;
        let pb = ensure_measurement(MeasurementAxis::BodyLength.field_name(), body_length_cm)?;

        let profile = self.reference.breed(species, breed)?;
        let formulas = self.reference.formulas(species)?;

        let rows: Vec<FormulaComparisonRow> = formulas
            .iter()
            .map(|formula| {
                let (raw_weight, corrected_weight) = apply_formula(formula, profile, sex, ld, pb);
                FormulaComparisonRow {
                    formula_name: formula.name.clone(),
                    raw_weight,
                    corrected_weight,
                    formula_text: formula.formula_text.clone(),
                    description: formula.description.clone(),
                    citation: formula.citation.clone(),
                    is_assigned: formula.name == profile.assigned_formula,
                }
            })
            .collect();

        debug!(breed = %profile.name, formulas = rows.len(), "公式对比完成");

        Ok(FormulaComparison {
            species,
            breed: profile.name.clone(),
            sex,
            chest_girth: ld,
            body_length: pb,
            rows,
        })
    }
}
