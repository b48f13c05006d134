// ==========================================
// 家畜体重估算系统 - 品种对比引擎
// ==========================================
// 职责: 固定测量值与性别, 计算畜种下每个品种的校正体重
// 说明: 每个品种使用自己的指定公式与系数 (公式逐行变化)
//       排序属于展示选择, 由 rank_breeds 完成
// ==========================================

use crate::domain::{rank_breeds, BreedComparisonRow, RankedBreed, Sex, SortDirection, Species};
use crate::engine::WeightEstimator;
use crate::error::CalcResult;
use crate::reference::ReferenceData;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy)]
pub struct BreedComparator<'a> {
    reference: &'a ReferenceData,
    estimator: WeightEstimator<'a>,
}

impl<'a> BreedComparator<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            reference,
            estimator: WeightEstimator::new(reference),
        }
    }

    /// 按品种注册顺序返回
    #[instrument(level = "debug", skip(self))]
    pub fn compare(
        &self,
        species: Species,
        sex: Sex,
        chest_girth_cm: f64,
        body_length_cm: f64,
    ) -> CalcResult<Vec<BreedComparisonRow>> {
        let rows = self
            .reference
            .breeds(species)?
            .iter()
            .map(|breed| {
                let result = self.estimator.evaluate(
                    species,
                    &breed.name,
                    sex,
                    chest_girth_cm,
                    body_length_cm,
                )?;
                Ok(BreedComparisonRow {
                    breed_name: result.breed,
                    corrected_weight: result.corrected_weight,
                    formula_name: result.formula_used,
                })
            })
            .collect::<CalcResult<Vec<_>>>()?;

        debug!(breeds = rows.len(), "品种对比完成");
        Ok(rows)
    }

    pub fn compare_ranked(
        &self,
        species: Species,
        sex: Sex,
        chest_girth_cm: f64,
        body_length_cm: f64,
        direction: SortDirection,
    ) -> CalcResult<Vec<RankedBreed>> {
        let rows = self.compare(species, sex, chest_girth_cm, body_length_cm)?;
        Ok(rank_breeds(&rows, direction))
    }
}
