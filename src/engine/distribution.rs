// ==========================================
// 家畜体重估算系统 - 分布曲线 (启发式)
// ==========================================
// 说明: 参数为固定经验值, 不是对实测数据的拟合
// 体重分布:
//   band.min = chest_min² × length_min / D × 性别系数
//   band.max = chest_max² × length_max / D × 性别系数
//   D: 牛 11000, 山羊 20000, 绵羊 18000
//   mean = (min + max) / 2, sd = (max - min) / 4
//   曲线 200 点, 覆盖 [min × 0.8, max × 1.2]
// 胴体率分布:
//   mean = 胴体率, sd = 1.2, 曲线 100 点, 覆盖 mean ± 5
// ==========================================

use crate::domain::{
    CarcassPercentDistribution, DensityPoint, Sex, Species, WeightDistribution, WeightPosition,
};
use crate::error::CalcResult;
use crate::reference::ReferenceData;
use std::f64::consts::PI;
use tracing::debug;

pub const WEIGHT_CURVE_POINTS: usize = 200;
pub const CARCASS_CURVE_POINTS: usize = 100;
pub const CARCASS_PERCENT_STD_DEV: f64 = 1.2;
pub const CARCASS_PERCENT_SPAN: f64 = 5.0;

/// 体重带除数
pub fn band_divisor(species: Species) -> f64 {
    match species {
        Species::Cattle => 11000.0,
        Species::Goat => 20000.0,
        Species::Sheep => 18000.0,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DistributionEngine<'a> {
    reference: &'a ReferenceData,
}

impl<'a> DistributionEngine<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// 品种体重分布, 并标记当前体重所在位置
    pub fn weight_distribution(
        &self,
        species: Species,
        breed: &str,
        sex: Sex,
        current_weight: f64,
    ) -> CalcResult<WeightDistribution> {
        let profile = self.reference.breed(species, breed)?;
        let chest = profile.chest_girth_range;
        let length = profile.body_length_range;
        let divisor = band_divisor(species);
        let sex_factor = profile.sex_factor.get(sex);

        let expected_min = chest.min * chest.min * length.min / divisor * sex_factor;
        let expected_max = chest.max * chest.max * length.max / divisor * sex_factor;
        let mean = (expected_min + expected_max) / 2.0;
        let std_dev = (expected_max - expected_min) / 4.0;

        let position = if current_weight < expected_min {
            WeightPosition::BelowBand
        } else if current_weight > expected_max {
            WeightPosition::AboveBand
        } else {
            WeightPosition::WithinBand
        };

        let curve = density_curve(
            expected_min * 0.8,
            expected_max * 1.2,
            WEIGHT_CURVE_POINTS,
            mean,
            std_dev,
        );

        debug!(breed = %profile.name, expected_min, expected_max, ?position, "体重分布计算完成");

        Ok(WeightDistribution {
            species,
            breed: profile.name.clone(),
            sex,
            expected_min,
            expected_max,
            mean,
            std_dev,
            current_weight,
            position,
            curve,
        })
    }

    pub fn carcass_percent_distribution(
        &self,
        species: Species,
        breed: &str,
        sex: Sex,
    ) -> CalcResult<CarcassPercentDistribution> {
        let profile = self.reference.slaughter_profile(species, breed)?;
        let mean = profile.carcass_percent.get(sex);
        let std_dev = CARCASS_PERCENT_STD_DEV;

        Ok(CarcassPercentDistribution {
            species,
            breed: profile.breed.clone(),
            sex,
            mean,
            std_dev,
            curve: density_curve(
                mean - CARCASS_PERCENT_SPAN,
                mean + CARCASS_PERCENT_SPAN,
                CARCASS_CURVE_POINTS,
                mean,
                std_dev,
            ),
        })
    }
}

/// 正态概率密度; sd ≤ 0 或非有限时返回 None
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> Option<f64> {
    if !(std_dev.is_finite() && std_dev > 0.0) {
        return None;
    }
    let z = (x - mean) / std_dev;
    Some((-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt()))
}

/// 线性等分 [start, end], 含两端点
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

fn density_curve(start: f64, end: f64, points: usize, mean: f64, std_dev: f64) -> Vec<DensityPoint> {
    if normal_pdf(mean, mean, std_dev).is_none() {
        return Vec::new();
    }
    linspace(start, end, points)
        .into_iter()
        .filter_map(|x| normal_pdf(x, mean, std_dev).map(|density| DensityPoint { x, density }))
        .collect()
}
