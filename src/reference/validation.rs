// ==========================================
// 家畜体重估算系统 - 参考数据校验
// ==========================================
// 职责: 启动时一次性校验参考数据的内部一致性
// 红线: 不一致 → 直接失败 (InconsistentReferenceData)
//       超额分配 → 只告警, 不失败, 不改写数据
// ==========================================

use super::{ReferenceData, SpeciesTables};
use crate::domain::{Sex, Species};
use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// 屠宰档案超额分配告警 (胴体率 + 非胴体 > 100%)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverAllocation {
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub accounted_percent: f64,
}

impl ReferenceData {
    /// 校验全部畜种
    ///
    /// # 返回
    /// - Ok(告警列表): 数据可用, 附带超额分配告警
    /// - Err(InconsistentReferenceData): 第一处不一致
    pub fn validate(&self) -> CalcResult<Vec<OverAllocation>> {
        let mut seen = HashSet::new();
        let mut warnings = Vec::new();

        for tables in &self.species {
            if !seen.insert(tables.species) {
                return Err(inconsistent(format!("畜种重复注册: {}", tables.species)));
            }
            validate_species(tables)?;
            warnings.extend(over_allocations(tables));
        }

        for w in &warnings {
            warn!(
                species = %w.species,
                breed = %w.breed,
                sex = %w.sex,
                accounted_percent = w.accounted_percent,
                "屠宰档案超额分配, 不追加 Other 组分"
            );
        }
        debug!(species = self.species.len(), warnings = warnings.len(), "参考数据校验通过");
        Ok(warnings)
    }
}

fn inconsistent(msg: String) -> CalcError {
    CalcError::InconsistentReferenceData(msg)
}

fn validate_species(tables: &SpeciesTables) -> CalcResult<()> {
    let species = tables.species;

    if tables.formulas.is_empty() {
        return Err(inconsistent(format!("{}: 未注册任何公式", species)));
    }

    // === 公式 ===
    let mut formula_names = HashSet::new();
    for formula in &tables.formulas {
        if !formula_names.insert(formula.name.as_str()) {
            return Err(inconsistent(format!("{}: 公式名称重复 '{}'", species, formula.name)));
        }
        if !formula.kind.has_valid_coefficients() {
            return Err(inconsistent(format!("{}: 公式 '{}' 系数无效", species, formula.name)));
        }
    }

    // === 品种 ===
    let mut breed_names = HashSet::new();
    for breed in &tables.breeds {
        if !breed_names.insert(breed.name.as_str()) {
            return Err(inconsistent(format!("{}: 品种名称重复 '{}'", species, breed.name)));
        }
        if !formula_names.contains(breed.assigned_formula.as_str()) {
            return Err(inconsistent(format!(
                "{}: 品种 '{}' 指定的公式 '{}' 未注册",
                species, breed.name, breed.assigned_formula
            )));
        }
        let factors = [breed.breed_factor, breed.sex_factor.male, breed.sex_factor.female];
        if factors.iter().any(|f| !(f.is_finite() && *f > 0.0)) {
            return Err(inconsistent(format!("{}: 品种 '{}' 校正系数必须为正数", species, breed.name)));
        }
        if !breed.chest_girth_range.is_well_formed() || !breed.body_length_range.is_well_formed() {
            return Err(inconsistent(format!("{}: 品种 '{}' 测量范围无效", species, breed.name)));
        }
        if let Some(age) = breed.age_ranges.iter().find(|a| a.min > a.max) {
            return Err(inconsistent(format!(
                "{}: 品种 '{}' 年龄范围无效 ({})",
                species, breed.name, age.stage
            )));
        }
    }

    // === 屠宰档案 (与品种一一对应) ===
    let mut slaughter_names = HashSet::new();
    for profile in &tables.slaughter {
        if !slaughter_names.insert(profile.breed.as_str()) {
            return Err(inconsistent(format!("{}: 屠宰档案重复 '{}'", species, profile.breed)));
        }
        if !breed_names.contains(profile.breed.as_str()) {
            return Err(inconsistent(format!(
                "{}: 屠宰档案 '{}' 没有对应品种",
                species, profile.breed
            )));
        }
        let percents = [
            profile.carcass_percent.male,
            profile.carcass_percent.female,
            profile.meat_percent_of_carcass,
        ];
        let component_percents = profile.non_carcass_percent.iter().map(|c| c.percent);
        if percents
            .into_iter()
            .chain(component_percents)
            .any(|p| !is_percentage(p))
        {
            return Err(inconsistent(format!(
                "{}: 屠宰档案 '{}' 百分比超出 [0, 100]",
                species, profile.breed
            )));
        }
    }
    if let Some(missing) = breed_names.difference(&slaughter_names).next() {
        return Err(inconsistent(format!("{}: 品种 '{}' 缺少屠宰档案", species, missing)));
    }

    Ok(())
}

fn is_percentage(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

fn over_allocations(tables: &SpeciesTables) -> Vec<OverAllocation> {
    tables
        .slaughter
        .iter()
        .flat_map(|profile| {
            Sex::ALL.into_iter().filter_map(move |sex| {
                profile.is_over_allocated(sex).then(|| OverAllocation {
                    species: tables.species,
                    breed: profile.breed.clone(),
                    sex,
                    accounted_percent: profile.accounted_percent(sex),
                })
            })
        })
        .collect()
}
