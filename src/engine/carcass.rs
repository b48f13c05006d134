// ==========================================
// 家畜体重估算系统 - 胴体分解引擎
// ==========================================
// 职责: 活重 × 屠宰档案 → 胴体/净肉/骨脂/非胴体组分
// 规则:
//   carcass   = live × carcass% / 100
//   meat      = carcass × meat% / 100
//   bone_fat  = carcass - meat (余量定义, 质量守恒)
//   component = live × component% / 100
//   accounted < 100 → 追加 Other = live × (100 - accounted) / 100
//   accounted ≥ 100 → 不追加, 不缩放
// ==========================================

use crate::domain::{
    CarcassBreakdown, ComponentWeight, EstimationResult, NonCarcassComponent, Sex, Species,
};
use crate::error::{CalcError, CalcResult};
use crate::reference::ReferenceData;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Copy)]
pub struct CarcassEngine<'a> {
    reference: &'a ReferenceData,
}

impl<'a> CarcassEngine<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// 按活重分解
    ///
    /// # 错误
    /// - NonPositiveLiveWeight: live_weight_kg ≤ 0 或非有限值
    #[instrument(level = "debug", skip(self))]
    pub fn decompose(
        &self,
        live_weight_kg: f64,
        species: Species,
        breed: &str,
        sex: Sex,
    ) -> CalcResult<CarcassBreakdown> {
        if !(live_weight_kg.is_finite() && live_weight_kg > 0.0) {
            return Err(CalcError::NonPositiveLiveWeight(live_weight_kg));
        }
        let profile = self.reference.slaughter_profile(species, breed)?;

        // === 胴体 ===
        let carcass_percent = profile.carcass_percent.get(sex);
        let carcass_weight = live_weight_kg * carcass_percent / 100.0;
        let meat_weight = carcass_weight * profile.meat_percent_of_carcass / 100.0;
        let bone_and_fat_weight = carcass_weight - meat_weight;

        // === 非胴体组分 (文献顺序) ===
        let mut non_carcass_weights: Vec<ComponentWeight> = profile
            .non_carcass_percent
            .iter()
            .map(|share| ComponentWeight {
                component: share.component,
                percent: share.percent,
                weight_kg: live_weight_kg * share.percent / 100.0,
            })
            .collect();

        // === 余量 ===
        let accounted = profile.accounted_percent(sex);
        let over_allocated = accounted > 100.0;
        if accounted < 100.0 {
            let residual = 100.0 - accounted;
            non_carcass_weights.push(ComponentWeight {
                component: NonCarcassComponent::Other,
                percent: residual,
                weight_kg: live_weight_kg * residual / 100.0,
            });
        } else if over_allocated {
            warn!(breed = %profile.breed, accounted, "屠宰档案超额分配, 保持原值");
        }

        debug!(
            breed = %profile.breed,
            carcass_weight,
            meat_weight,
            components = non_carcass_weights.len(),
            "胴体分解完成"
        );

        Ok(CarcassBreakdown {
            live_weight: live_weight_kg,
            carcass_weight,
            carcass_percent,
            meat_weight,
            meat_percent_of_carcass: profile.meat_percent_of_carcass,
            meat_percent_of_body: meat_weight / live_weight_kg * 100.0,
            bone_and_fat_weight,
            non_carcass_weights,
            over_allocated,
            citation: profile.citation.clone(),
        })
    }

    /// 以估算结果的校正体重作为活重
    pub fn decompose_estimation(&self, estimation: &EstimationResult) -> CalcResult<CarcassBreakdown> {
        self.decompose(
            estimation.corrected_weight,
            estimation.species,
            &estimation.breed,
            estimation.sex,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComponentShare;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // ==========================================
    // 测试 1: 基准算例 (Sapi Bali 公, 448.844 kg)
    // ==========================================

    #[test]
    fn test_sapi_bali_breakdown() {
        let data = ReferenceData::builtin();
        let breakdown = CarcassEngine::new(&data)
            .decompose(448.844, Species::Cattle, "Sapi Bali", Sex::Male)
            .unwrap();

        assert_relative_eq!(breakdown.carcass_weight, 235.6431, epsilon = 1e-9);
        assert_relative_eq!(breakdown.meat_weight, 176.732325, epsilon = 1e-9);
        assert_relative_eq!(breakdown.bone_and_fat_weight, 58.910775, epsilon = 1e-9);
        assert_eq!(
            breakdown.meat_weight + breakdown.bone_and_fat_weight,
            breakdown.carcass_weight
        );
        assert_relative_eq!(breakdown.meat_percent_of_body, 39.375, epsilon = 1e-9);
        assert!(!breakdown.over_allocated);
    }

    #[test]
    fn test_residual_other_component() {
        let data = ReferenceData::builtin();
        let breakdown = CarcassEngine::new(&data)
            .decompose(448.844, Species::Cattle, "Sapi Bali", Sex::Male)
            .unwrap();

        // 52.5 + 44.1 = 96.6 → Other 3.4%
        assert_eq!(breakdown.non_carcass_weights.len(), 12);
        let other = breakdown.non_carcass_weights.last().unwrap();
        assert_eq!(other.component, NonCarcassComponent::Other);
        assert_relative_eq!(other.percent, 3.4, epsilon = 1e-9);
        assert_relative_eq!(
            breakdown.non_carcass_components_total(),
            448.844 * (100.0 - 52.5) / 100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_every_builtin_breed_conserves_mass() {
        let data = ReferenceData::builtin();
        let engine = CarcassEngine::new(&data);
        for species in Species::ALL {
            for breed in data.breeds(species).unwrap() {
                for sex in Sex::ALL {
                    let b = engine.decompose(100.0, species, &breed.name, sex).unwrap();
                    assert_eq!(b.meat_weight + b.bone_and_fat_weight, b.carcass_weight);
                    assert_abs_diff_eq!(
                        b.non_carcass_components_total(),
                        b.non_carcass_weight(),
                        epsilon = 1e-9
                    );
                }
            }
        }
    }

    // ==========================================
    // 测试 2: 超额分配
    // ==========================================

    #[test]
    fn test_over_allocation_adds_no_residual() {
        let mut data = ReferenceData::builtin();
        data.species[0].slaughter[0].non_carcass_percent.push(ComponentShare {
            component: NonCarcassComponent::Other,
            percent: 10.0,
        });
        let breakdown = CarcassEngine::new(&data)
            .decompose(200.0, Species::Cattle, "Sapi Bali", Sex::Male)
            .unwrap();

        assert!(breakdown.over_allocated);
        // 11 个文献组分 + 数据中的 Other, 无合成余量
        assert_eq!(breakdown.non_carcass_weights.len(), 12);
        assert_relative_eq!(
            breakdown.component_weight(NonCarcassComponent::Other).unwrap(),
            20.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(breakdown.carcass_weight, 105.0, epsilon = 1e-9);
    }

    // ==========================================
    // 测试 3: 错误
    // ==========================================

    #[test]
    fn test_non_positive_live_weight_rejected() {
        let data = ReferenceData::builtin();
        let engine = CarcassEngine::new(&data);
        for live in [0.0, -3.2, f64::NAN] {
            assert!(matches!(
                engine.decompose(live, Species::Sheep, "Domba Merino", Sex::Male),
                Err(CalcError::NonPositiveLiveWeight(_))
            ));
        }
    }

    #[test]
    fn test_unknown_breed_rejected() {
        let data = ReferenceData::builtin();
        assert!(matches!(
            CarcassEngine::new(&data).decompose(100.0, Species::Goat, "Domba Garut", Sex::Male),
            Err(CalcError::UnknownBreed { .. })
        ));
    }
}
