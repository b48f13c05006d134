// ==========================================
// 家畜体重估算系统 - 体重估算引擎
// ==========================================
// 职责: 品种 → 指定公式 → 原始体重 → 品种/性别校正
// 输入: 畜种/品种/性别 + 胸围/体长 (cm)
// 输出: EstimationResult (含附注)
// 红线: 不截断、不取整; 超出典型范围与非正结果只附注, 不报错
// ==========================================

use crate::domain::{
    BreedProfile, EstimationNote, EstimationResult, FormulaDefinition, MeasurementAxis,
    MeasurementRange, RangeStatus, Sex, Species,
};
use crate::error::{ensure_measurement, CalcResult};
use crate::reference::ReferenceData;
use tracing::{debug, instrument, warn};

// ==========================================
// WeightEstimator - 体重估算引擎
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct WeightEstimator<'a> {
    reference: &'a ReferenceData,
}

impl<'a> WeightEstimator<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// 估算校正后体重
    ///
    /// # 参数
    /// - chest_girth_cm / body_length_cm: 必须为有限正数
    ///
    /// # 返回
    /// - EstimationResult: corrected = raw × 品种系数 × 性别系数
    #[instrument(level = "debug", skip(self))]
    pub fn estimate(
        &self,
        species: Species,
        breed: &str,
        sex: Sex,
        chest_girth_cm: f64,
        body_length_cm: f64,
    ) -> CalcResult<EstimationResult> {
        let result = self.evaluate(species, breed, sex, chest_girth_cm, body_length_cm)?;

        for note in &result.notes {
            match note {
                EstimationNote::OutOfTypicalRange {
                    axis,
                    value,
                    status,
                    ..
                } => {
                    warn!(breed = %result.breed, axis = %axis, value, status = %status, "测量值超出品种典型范围");
                }
                EstimationNote::NonPositiveResult { raw_weight } => {
                    warn!(
                        breed = %result.breed,
                        formula = %result.formula_used,
                        raw_weight,
                        "公式输出非正值, 原样返回"
                    );
                }
            }
        }

        debug!(
            breed = %result.breed,
            formula = %result.formula_used,
            raw_weight = result.raw_weight,
            corrected_weight = result.corrected_weight,
            "体重估算完成"
        );
        Ok(result)
    }

    /// 与 estimate 相同, 但不输出日志 (网格/曲线扫描逐点调用)
    pub(crate) fn evaluate(
        &self,
        species: Species,
        breed: &str,
        sex: Sex,
        chest_girth_cm: f64,
        body_length_cm: f64,
    ) -> CalcResult<EstimationResult> {
        // === 步骤 1: 输入校验 ===
        let ld = ensure_measurement(MeasurementAxis::ChestGirth.field_name(), chest_girth_cm)?;
        let pb = ensure_measurement(MeasurementAxis::BodyLength.field_name(), body_length_cm)?;

        // === 步骤 2: 解析品种与指定公式 ===
        let (profile, formula) = self.reference.resolve(species, breed)?;

        // === 步骤 3: 计算 ===
        let (raw_weight, corrected_weight) = apply_formula(formula, profile, sex, ld, pb);

        // === 步骤 4: 附注 ===
        let mut notes = Vec::new();
        push_range_note(&mut notes, MeasurementAxis::ChestGirth, ld, profile.chest_girth_range);
        push_range_note(&mut notes, MeasurementAxis::BodyLength, pb, profile.body_length_range);
        if raw_weight <= 0.0 {
            notes.push(EstimationNote::NonPositiveResult { raw_weight });
        }

        Ok(EstimationResult {
            species,
            breed: profile.name.clone(),
            sex,
            chest_girth: ld,
            body_length: pb,
            raw_weight,
            corrected_weight,
            formula_used: formula.name.clone(),
            formula_text: formula.formula_text.clone(),
            citation: formula.citation.clone(),
            notes,
        })
    }
}

/// 对任一公式应用某品种的校正系数, 返回 (原始, 校正后)
///
/// 公式对比与估算共用此函数, 保证两者对同一公式结果一致
pub(crate) fn apply_formula(
    formula: &FormulaDefinition,
    profile: &BreedProfile,
    sex: Sex,
    chest_girth_cm: f64,
    body_length_cm: f64,
) -> (f64, f64) {
    let raw = formula.evaluate(chest_girth_cm, body_length_cm);
    let corrected = raw * profile.breed_factor * profile.sex_factor.get(sex);
    (raw, corrected)
}

fn push_range_note(
    notes: &mut Vec<EstimationNote>,
    axis: MeasurementAxis,
    value: f64,
    typical: MeasurementRange,
) {
    let status = typical.status_of(value);
    if status != RangeStatus::WithinTypical {
        notes.push(EstimationNote::OutOfTypicalRange {
            axis,
            value,
            status,
            typical,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    fn data() -> ReferenceData {
        ReferenceData::builtin()
    }

    // ==========================================
    // 测试 1: 基准算例
    // ==========================================

    #[test]
    fn test_sapi_bali_male_schoorl() {
        let data = data();
        let estimator = WeightEstimator::new(&data);
        let result = estimator
            .estimate(Species::Cattle, "Sapi Bali", Sex::Male, 180.0, 150.0)
            .unwrap();

        assert_eq!(result.formula_used, "Schoorl (Indonesia)");
        assert_eq!(result.formula_text, "(LD + 22)² / 100");
        assert_relative_eq!(result.raw_weight, 408.04, epsilon = 1e-9);
        assert_relative_eq!(result.corrected_weight, 448.844, epsilon = 1e-9);
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_nsa_negative_result_is_not_clamped() {
        let data = data();
        let estimator = WeightEstimator::new(&data);
        let result = estimator
            .estimate(Species::Sheep, "Domba Merino", Sex::Female, 40.0, 40.0)
            .unwrap();

        assert_relative_eq!(result.raw_weight, -3.80968, epsilon = 1e-9);
        assert!(result.corrected_weight < 0.0);
        assert_relative_eq!(result.corrected_weight, -3.80968 * 1.05 * 0.85, epsilon = 1e-9);
        assert!(result.has_non_positive_result());
        assert!(result.is_atypical());
    }

    // ==========================================
    // 测试 2: 性别系数比例
    // ==========================================

    #[test]
    fn test_sex_ratio_matches_factor_ratio() {
        let data = data();
        let estimator = WeightEstimator::new(&data);
        let male = estimator
            .estimate(Species::Goat, "Kambing Boer", Sex::Male, 95.0, 80.0)
            .unwrap();
        let female = estimator
            .estimate(Species::Goat, "Kambing Boer", Sex::Female, 95.0, 80.0)
            .unwrap();

        assert_eq!(male.raw_weight, female.raw_weight);
        assert_relative_eq!(
            male.corrected_weight / female.corrected_weight,
            1.15 / 0.9,
            max_relative = 1e-12
        );
    }

    // ==========================================
    // 测试 3: 典型范围附注
    // ==========================================

    #[test]
    fn test_out_of_range_is_noted_not_rejected() {
        let data = data();
        let estimator = WeightEstimator::new(&data);
        let result = estimator
            .estimate(Species::Goat, "Kambing Kacang", Sex::Male, 45.0, 90.0)
            .unwrap();

        assert!(result.corrected_weight > 0.0);
        assert_eq!(result.notes.len(), 2);
        assert!(matches!(
            result.notes[0],
            EstimationNote::OutOfTypicalRange {
                axis: MeasurementAxis::ChestGirth,
                status: RangeStatus::BelowTypical,
                ..
            }
        ));
        assert!(matches!(
            result.notes[1],
            EstimationNote::OutOfTypicalRange {
                axis: MeasurementAxis::BodyLength,
                status: RangeStatus::AboveTypical,
                ..
            }
        ));
    }

    // ==========================================
    // 测试 4: 错误
    // ==========================================

    #[test]
    fn test_invalid_measurements_rejected() {
        let data = data();
        let estimator = WeightEstimator::new(&data);
        let err = estimator
            .estimate(Species::Cattle, "Sapi Bali", Sex::Male, 0.0, 150.0)
            .unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidMeasurement { field: "chest_girth_cm", .. }
        ));

        let err = estimator
            .estimate(Species::Cattle, "Sapi Bali", Sex::Male, 180.0, f64::NAN)
            .unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidMeasurement { field: "body_length_cm", .. }
        ));
    }

    #[test]
    fn test_breed_of_other_species_is_unknown() {
        let data = data();
        let estimator = WeightEstimator::new(&data);
        let err = estimator
            .estimate(Species::Sheep, "Sapi Bali", Sex::Male, 180.0, 150.0)
            .unwrap_err();
        assert!(matches!(err, CalcError::UnknownBreed { .. }));
    }

    #[test]
    fn test_dangling_formula_is_unknown_formula() {
        let mut data = data();
        data.species[0].breeds[0].assigned_formula = "Hilang".to_string();
        let estimator = WeightEstimator::new(&data);
        let err = estimator
            .estimate(Species::Cattle, "Sapi Bali", Sex::Male, 180.0, 150.0)
            .unwrap_err();
        assert!(matches!(err, CalcError::UnknownFormula { .. }));
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let data = data();
        let estimator = WeightEstimator::new(&data);
        let a = estimator
            .estimate(Species::Cattle, "Sapi Limousin", Sex::Female, 221.3, 187.9)
            .unwrap();
        let b = estimator
            .estimate(Species::Cattle, "Sapi Limousin", Sex::Female, 221.3, 187.9)
            .unwrap();
        assert_eq!(a.corrected_weight.to_bits(), b.corrected_weight.to_bits());
        assert_eq!(a, b);
    }
}
