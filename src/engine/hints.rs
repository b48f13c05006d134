// ==========================================
// 家畜体重估算系统 - 测量提示引擎
// ==========================================
// 职责: 为表单层提供品种的默认值、输入边界与测量值评估
// 默认值 = 典型范围中点
// 输入边界 = [min × (1 - tol), max × (1 + tol)]
// 红线: 评估结果只用于提示, 从不阻断计算
// ==========================================

use crate::domain::{
    AxisAssessment, MeasurementAssessment, MeasurementAxis, MeasurementHints, MeasurementRange,
    Species,
};
use crate::error::{ensure_measurement, CalcResult};
use crate::reference::ReferenceData;

/// 默认输入容差 (%)
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, Copy)]
pub struct MeasurementHintProvider<'a> {
    reference: &'a ReferenceData,
    tolerance_ratio: f64,
}

impl<'a> MeasurementHintProvider<'a> {
    /// # 参数
    /// - tolerance_percent: 非法值 (负数/非有限) 回退到默认 20%
    pub fn new(reference: &'a ReferenceData, tolerance_percent: f64) -> Self {
        let tolerance_percent = if tolerance_percent.is_finite() && tolerance_percent >= 0.0 {
            tolerance_percent
        } else {
            DEFAULT_TOLERANCE_PERCENT
        };
        Self {
            reference,
            tolerance_ratio: tolerance_percent / 100.0,
        }
    }

    pub fn hints(&self, species: Species, breed: &str) -> CalcResult<MeasurementHints> {
        let profile = self.reference.breed(species, breed)?;
        let chest = profile.chest_girth_range;
        let length = profile.body_length_range;

        Ok(MeasurementHints {
            species,
            breed: profile.name.clone(),
            chest_girth_typical: chest,
            body_length_typical: length,
            chest_girth_bounds: chest.widened(self.tolerance_ratio),
            body_length_bounds: length.widened(self.tolerance_ratio),
            default_chest_girth: chest.midpoint(),
            default_body_length: length.midpoint(),
            age_ranges: profile.age_ranges.clone(),
        })
    }

    pub fn assess(
        &self,
        species: Species,
        breed: &str,
        chest_girth_cm: f64,
        body_length_cm: f64,
    ) -> CalcResult<MeasurementAssessment> {
        let ld = ensure_measurement(MeasurementAxis::ChestGirth.field_name(), chest_girth_cm)?;
        let pb = ensure_measurement(MeasurementAxis::BodyLength.field_name(), body_length_cm)?;
        let profile = self.reference.breed(species, breed)?;

        Ok(MeasurementAssessment {
            chest_girth: self.assess_axis(MeasurementAxis::ChestGirth, ld, profile.chest_girth_range),
            body_length: self.assess_axis(MeasurementAxis::BodyLength, pb, profile.body_length_range),
        })
    }

    fn assess_axis(&self, axis: MeasurementAxis, value: f64, typical: MeasurementRange) -> AxisAssessment {
        AxisAssessment {
            axis,
            value,
            status: typical.status_of(value),
            within_tolerance: typical.widened(self.tolerance_ratio).contains(value),
        }
    }
}
