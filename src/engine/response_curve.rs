// ==========================================
// 家畜体重估算系统 - 响应曲线
// ==========================================
// 职责: 固定一个测量值, 扫描另一个测量值, 得到体重曲线
// 扫描区间: [typical.min × 0.9, typical.max × 1.1]
// ==========================================

use crate::domain::{CurvePoint, MeasurementAxis, ResponseCurve, Sex, Species};
use crate::engine::distribution::linspace;
use crate::engine::WeightEstimator;
use crate::error::{ensure_measurement, CalcError, CalcResult};
use crate::reference::ReferenceData;
use tracing::{debug, instrument};

pub const DEFAULT_CURVE_POINTS: usize = 50;
/// 曲线点数上下限
pub const MIN_CURVE_POINTS: usize = 2;
pub const MAX_CURVE_POINTS: usize = 1000;
const SWEEP_LOW: f64 = 0.9;
const SWEEP_HIGH: f64 = 1.1;

#[derive(Debug, Clone, Copy)]
pub struct ResponseCurveGenerator<'a> {
    reference: &'a ReferenceData,
    estimator: WeightEstimator<'a>,
    points: usize,
}

impl<'a> ResponseCurveGenerator<'a> {
    pub fn new(reference: &'a ReferenceData, points: usize) -> Self {
        Self {
            reference,
            estimator: WeightEstimator::new(reference),
            points,
        }
    }

    /// # 参数
    /// - axis: 扫描轴
    /// - fixed_value: 另一轴的测量值 (cm)
    #[instrument(level = "debug", skip(self))]
    pub fn generate(
        &self,
        species: Species,
        breed: &str,
        sex: Sex,
        axis: MeasurementAxis,
        fixed_value: f64,
    ) -> CalcResult<ResponseCurve> {
        if !(MIN_CURVE_POINTS..=MAX_CURVE_POINTS).contains(&self.points) {
            return Err(CalcError::InvalidGridSpec(format!(
                "响应曲线点数必须在 [{}, {}] 之间, 实际 {}",
                MIN_CURVE_POINTS, MAX_CURVE_POINTS, self.points
            )));
        }
        let fixed_axis = match axis {
            MeasurementAxis::ChestGirth => MeasurementAxis::BodyLength,
            MeasurementAxis::BodyLength => MeasurementAxis::ChestGirth,
        };
        let fixed = ensure_measurement(fixed_axis.field_name(), fixed_value)?;

        let profile = self.reference.breed(species, breed)?;
        let typical_band = match axis {
            MeasurementAxis::ChestGirth => profile.chest_girth_range,
            MeasurementAxis::BodyLength => profile.body_length_range,
        };

        let points = linspace(typical_band.min * SWEEP_LOW, typical_band.max * SWEEP_HIGH, self.points)
            .into_iter()
            .map(|measurement| {
                let (ld, pb) = match axis {
                    MeasurementAxis::ChestGirth => (measurement, fixed),
                    MeasurementAxis::BodyLength => (fixed, measurement),
                };
                let result = self.estimator.evaluate(species, breed, sex, ld, pb)?;
                Ok(CurvePoint {
                    measurement,
                    weight: result.corrected_weight,
                })
            })
            .collect::<CalcResult<Vec<_>>>()?;

        debug!(breed = %profile.name, axis = %axis, points = points.len(), "响应曲线生成完成");

        Ok(ResponseCurve {
            species,
            breed: profile.name.clone(),
            sex,
            axis,
            fixed_value: fixed,
            typical_band,
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_chest_girth_sweep_range() {
        let data = ReferenceData::builtin();
        let curve = ResponseCurveGenerator::new(&data, DEFAULT_CURVE_POINTS)
            .generate(Species::Cattle, "Sapi Bali", Sex::Male, MeasurementAxis::ChestGirth, 150.0)
            .unwrap();

        assert_eq!(curve.points.len(), 50);
        assert_relative_eq!(curve.points[0].measurement, 126.0, epsilon = 1e-9);
        assert_relative_eq!(curve.points[49].measurement, 231.0, epsilon = 1e-9);
        // Schoorl: (126 + 22)² / 100 × 1.1
        assert_relative_eq!(curve.points[0].weight, 148.0 * 148.0 / 100.0 * 1.1, epsilon = 1e-9);
        for pair in curve.points.windows(2) {
            assert!(pair[0].weight < pair[1].weight);
        }
    }

    #[test]
    fn test_curve_points_match_estimator() {
        let data = ReferenceData::builtin();
        let estimator = WeightEstimator::new(&data);
        let curve = ResponseCurveGenerator::new(&data, 7)
            .generate(Species::Goat, "Kambing Boer", Sex::Female, MeasurementAxis::BodyLength, 95.0)
            .unwrap();

        assert_eq!(curve.fixed_value, 95.0);
        for point in &curve.points {
            let expected = estimator
                .estimate(Species::Goat, "Kambing Boer", Sex::Female, 95.0, point.measurement)
                .unwrap();
            assert_eq!(point.weight, expected.corrected_weight);
        }
    }

    #[test]
    fn test_point_count_out_of_bounds_rejected() {
        let data = ReferenceData::builtin();
        for points in [0, 1, MAX_CURVE_POINTS + 1, usize::MAX] {
            assert!(matches!(
                ResponseCurveGenerator::new(&data, points).generate(
                    Species::Sheep,
                    "Domba Garut",
                    Sex::Male,
                    MeasurementAxis::ChestGirth,
                    70.0
                ),
                Err(CalcError::InvalidGridSpec(_))
            ));
        }

        let curve = ResponseCurveGenerator::new(&data, MAX_CURVE_POINTS)
            .generate(Species::Sheep, "Domba Garut", Sex::Male, MeasurementAxis::ChestGirth, 70.0)
            .unwrap();
        assert_eq!(curve.points.len(), MAX_CURVE_POINTS);
    }
}
