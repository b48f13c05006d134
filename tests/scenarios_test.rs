// ==========================================
// 文献场景集成测试
// ==========================================
// 测试目标: 固定输入下的已知数值结果
// ==========================================

use approx::assert_relative_eq;
use livestock_weight::reference;
use livestock_weight::{
    CalcError, CarcassEngine, EstimationNote, FormulaComparator, NonCarcassComponent, Sex,
    Species, WeightEstimator,
};

// ==========================================
// 测试 1: 牛 Schoorl 公式
// ==========================================
#[test]
fn test_cattle_schoorl_bali_male() {
    let data = reference::global().expect("内置参考数据应通过校验");
    let result = WeightEstimator::new(data)
        .estimate(Species::Cattle, "Sapi Bali", Sex::Male, 180.0, 150.0)
        .unwrap();

    // (180 + 22)² / 100 = 408.04
    assert_relative_eq!(result.raw_weight, 408.04, epsilon = 1e-9);
    // 408.04 × 1.0 × 1.1
    assert_relative_eq!(result.corrected_weight, 448.844, epsilon = 1e-9);
    assert_eq!(result.formula_used, "Schoorl (Indonesia)");
    assert!(result.notes.is_empty());
}

// ==========================================
// 测试 2: 仿射公式输出负值, 原样返回
// ==========================================
#[test]
fn test_nsa_formula_returns_negative_value_unclamped() {
    let data = reference::global().unwrap();
    let result = WeightEstimator::new(data)
        .estimate(Species::Sheep, "Domba Merino", Sex::Male, 40.0, 40.0)
        .unwrap();

    // 0.0000627 × 40 × 40 − 3.91
    assert_relative_eq!(result.raw_weight, -3.80968, epsilon = 1e-9);
    assert!(result.corrected_weight < 0.0);
    assert!(result
        .notes
        .iter()
        .any(|n| matches!(n, EstimationNote::NonPositiveResult { raw_weight } if *raw_weight < 0.0)));

    // 公式对比中同一公式的原始值一致
    let comparison = FormulaComparator::new(data)
        .compare(Species::Sheep, "Domba Merino", Sex::Male, 40.0, 40.0)
        .unwrap();
    let row = comparison.get(&result.formula_used).unwrap();
    assert_eq!(row.raw_weight, result.raw_weight);
}

// ==========================================
// 测试 3: 胴体分解
// ==========================================
#[test]
fn test_bali_carcass_decomposition() {
    let data = reference::global().unwrap();
    let breakdown = CarcassEngine::new(data)
        .decompose(448.844, Species::Cattle, "Sapi Bali", Sex::Male)
        .unwrap();

    assert_relative_eq!(breakdown.carcass_weight, 235.6431, epsilon = 1e-9);
    assert_relative_eq!(breakdown.meat_weight, 176.732325, epsilon = 1e-9);
    assert_relative_eq!(breakdown.bone_and_fat_weight, 58.910775, epsilon = 1e-9);
    assert_eq!(
        breakdown.meat_weight + breakdown.bone_and_fat_weight,
        breakdown.carcass_weight
    );

    // 头 6.5%
    assert_relative_eq!(
        breakdown.component_weight(NonCarcassComponent::Head).unwrap(),
        448.844 * 0.065,
        epsilon = 1e-9
    );
    assert!(breakdown.component_weight(NonCarcassComponent::Other).is_some());
    assert!(!breakdown.over_allocated);
}

// ==========================================
// 测试 4: 无效输入直接拒绝
// ==========================================
#[test]
fn test_invalid_inputs_are_rejected() {
    let data = reference::global().unwrap();
    let estimator = WeightEstimator::new(data);

    let err = estimator
        .estimate(Species::Cattle, "Sapi Bali", Sex::Male, 0.0, 150.0)
        .unwrap_err();
    assert!(matches!(err, CalcError::InvalidMeasurement { .. }));

    let err = estimator
        .estimate(Species::Cattle, "Sapi Bali", Sex::Male, 180.0, f64::NAN)
        .unwrap_err();
    assert!(matches!(err, CalcError::InvalidMeasurement { .. }));

    let err = estimator
        .estimate(Species::Goat, "Sapi Bali", Sex::Male, 180.0, 150.0)
        .unwrap_err();
    assert!(matches!(err, CalcError::UnknownBreed { .. }));

    let err = CarcassEngine::new(data)
        .decompose(0.0, Species::Cattle, "Sapi Bali", Sex::Male)
        .unwrap_err();
    assert!(matches!(err, CalcError::NonPositiveLiveWeight(_)));
}

// ==========================================
// 测试 5: 超出典型范围照常计算
// ==========================================
#[test]
fn test_out_of_typical_range_still_computes() {
    let data = reference::global().unwrap();
    let result = WeightEstimator::new(data)
        .estimate(Species::Cattle, "Sapi Bali", Sex::Female, 300.0, 300.0)
        .unwrap();

    assert!(result.corrected_weight > 0.0);
    assert!(result.is_atypical());
    assert_eq!(result.notes.len(), 2);
}
