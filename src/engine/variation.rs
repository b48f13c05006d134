// ==========================================
// 家畜体重估算系统 - 变异网格引擎
// ==========================================
// 职责: 以中心测量值为基准, 生成 胸围 × 体长 的体重网格
// 轴取值: center × (1 + v × (-1 + 2i / (N - 1))), i = 0..N-1
//   N 为奇数时中间下标恰为 center (无累积误差)
// 红线: 每个单元格都走 WeightEstimator, 不复制校正逻辑
// ==========================================

use crate::domain::{MeasurementAxis, Sex, Species, VariationGrid};
use crate::engine::WeightEstimator;
use crate::error::{ensure_measurement, CalcError, CalcResult};
use crate::reference::ReferenceData;
use tracing::{debug, instrument};

/// 网格每轴步数上下限
pub const MIN_GRID_STEPS: usize = 2;
pub const MAX_GRID_STEPS: usize = 101;

#[derive(Debug, Clone, Copy)]
pub struct VariationGridGenerator<'a> {
    estimator: WeightEstimator<'a>,
}

impl<'a> VariationGridGenerator<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            estimator: WeightEstimator::new(reference),
        }
    }

    /// 生成 steps × steps 网格
    ///
    /// # 参数
    /// - variation_percent: (0, 100), 10 表示 ±10%
    /// - steps: ≥ 2
    #[instrument(level = "debug", skip(self))]
    #[allow(clippy::too_many_arguments)]
    pub fn generate(
        &self,
        species: Species,
        breed: &str,
        sex: Sex,
        center_chest_girth: f64,
        center_body_length: f64,
        variation_percent: f64,
        steps: usize,
    ) -> CalcResult<VariationGrid> {
        // === 步骤 1: 参数校验 ===
        let ld = ensure_measurement(MeasurementAxis::ChestGirth.field_name(), center_chest_girth)?;
        let pb = ensure_measurement(MeasurementAxis::BodyLength.field_name(), center_body_length)?;
        if !(MIN_GRID_STEPS..=MAX_GRID_STEPS).contains(&steps) {
            return Err(CalcError::InvalidGridSpec(format!(
                "steps 必须在 [{}, {}] 之间, 实际 {}",
                MIN_GRID_STEPS, MAX_GRID_STEPS, steps
            )));
        }
        if !(variation_percent.is_finite() && variation_percent > 0.0 && variation_percent < 100.0) {
            return Err(CalcError::InvalidGridSpec(format!(
                "variation_percent 必须在 (0, 100) 之间, 实际 {}",
                variation_percent
            )));
        }

        // === 步骤 2: 轴取值 ===
        let ratio = variation_percent / 100.0;
        let chest_girth_values = axis_values(ld, ratio, steps);
        let body_length_values = axis_values(pb, ratio, steps);

        // === 步骤 3: 逐格估算 ===
        let mut breed_name = breed.to_string();
        let mut weights = Vec::with_capacity(steps);
        for &cell_ld in &chest_girth_values {
            let mut row = Vec::with_capacity(steps);
            for &cell_pb in &body_length_values {
                let result = self.estimator.evaluate(species, breed, sex, cell_ld, cell_pb)?;
                breed_name = result.breed;
                row.push(result.corrected_weight);
            }
            weights.push(row);
        }

        debug!(steps, cells = steps * steps, "变异网格生成完成");

        Ok(VariationGrid {
            species,
            breed: breed_name,
            sex,
            center_chest_girth: ld,
            center_body_length: pb,
            variation_percent,
            chest_girth_values,
            body_length_values,
            weights,
        })
    }
}

/// 线性等分 [center × (1 - ratio), center × (1 + ratio)]
fn axis_values(center: f64, ratio: f64, steps: usize) -> Vec<f64> {
    let last = steps.saturating_sub(1).max(1) as f64;
    (0..steps)
        .map(|i| center * (1.0 + ratio * (-1.0 + 2.0 * i as f64 / last)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_values_are_symmetric() {
        let values = axis_values(180.0, 0.1, 5);
        assert_eq!(values.len(), 5);
        assert_relative_eq!(values[0], 162.0, epsilon = 1e-9);
        assert_relative_eq!(values[1], 171.0, epsilon = 1e-9);
        assert_eq!(values[2], 180.0);
        assert_relative_eq!(values[4], 198.0, epsilon = 1e-9);
    }

    #[test]
    fn test_grid_shape_and_exact_center() {
        let data = ReferenceData::builtin();
        let generator = VariationGridGenerator::new(&data);
        let estimator = WeightEstimator::new(&data);

        for steps in [3usize, 5, 7] {
            let grid = generator
                .generate(Species::Cattle, "Sapi Limousin", Sex::Male, 221.7, 193.3, 12.5, steps)
                .unwrap();
            assert_eq!(grid.steps(), steps);
            assert_eq!(grid.cell_count(), steps * steps);

            let center = estimator
                .estimate(Species::Cattle, "Sapi Limousin", Sex::Male, 221.7, 193.3)
                .unwrap();
            let mid = steps / 2;
            assert_eq!(grid.cell(mid, mid), Some(center.corrected_weight));
        }
    }

    #[test]
    fn test_even_steps_have_no_center_but_full_shape() {
        let data = ReferenceData::builtin();
        let grid = VariationGridGenerator::new(&data)
            .generate(Species::Goat, "Kambing Boer", Sex::Female, 95.0, 80.0, 10.0, 4)
            .unwrap();
        assert_eq!(grid.cell_count(), 16);
        assert_relative_eq!(grid.chest_girth_values[0], 85.5, epsilon = 1e-9);
        assert_relative_eq!(grid.body_length_values[3], 88.0, epsilon = 1e-9);
    }

    #[test]
    fn test_weights_increase_along_chest_girth() {
        let data = ReferenceData::builtin();
        let grid = VariationGridGenerator::new(&data)
            .generate(Species::Sheep, "Domba Garut", Sex::Male, 85.0, 75.0, 20.0, 3)
            .unwrap();
        for j in 0..3 {
            assert!(grid.weights[0][j] < grid.weights[1][j]);
            assert!(grid.weights[1][j] < grid.weights[2][j]);
        }
    }

    #[test]
    fn test_invalid_specs() {
        let data = ReferenceData::builtin();
        let generator = VariationGridGenerator::new(&data);
        let cases = [
            (10.0, 1usize),
            (10.0, 0),
            (0.0, 3),
            (-5.0, 3),
            (100.0, 3),
            (f64::NAN, 3),
            // 超出上限: 在分配任何单元格之前拒绝
            (10.0, MAX_GRID_STEPS + 1),
            (10.0, usize::MAX),
        ];
        for (variation, steps) in cases {
            assert!(matches!(
                generator.generate(Species::Cattle, "Sapi Bali", Sex::Male, 180.0, 150.0, variation, steps),
                Err(CalcError::InvalidGridSpec(_))
            ));
        }
    }

    #[test]
    fn test_grid_is_deterministic() {
        let data = ReferenceData::builtin();
        let generator = VariationGridGenerator::new(&data);
        let a = generator
            .generate(Species::Cattle, "Sapi Bali", Sex::Female, 175.0, 140.0, 15.0, 5)
            .unwrap();
        let b = generator
            .generate(Species::Cattle, "Sapi Bali", Sex::Female, 175.0, 140.0, 15.0, 5)
            .unwrap();
        assert_eq!(a, b);
    }
}
