// ==========================================
// 家畜体重估算系统 - 参考数据层
// ==========================================
// 职责: 畜种 → 公式 / 品种档案 / 屠宰档案 的只读注册表
// 生命周期: 进程启动时构建并校验一次, 之后只读
// 顺序: 所有列表保持文献注册顺序 (对比结果依赖此顺序)
// ==========================================

mod cattle;
mod goat;
mod sheep;
pub mod validation;

pub use validation::OverAllocation;

use crate::domain::{
    AgeRange, BreedProfile, ComponentShare, FormulaDefinition, LifeStage, MeasurementRange,
    NonCarcassComponent, SexFactors, SexPercentages, SlaughterProfile, Species,
};
use crate::error::{CalcError, CalcResult};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

// ==========================================
// SpeciesTables - 单个畜种的全部参考数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesTables {
    pub species: Species,
    pub formulas: Vec<FormulaDefinition>,
    pub breeds: Vec<BreedProfile>,
    pub slaughter: Vec<SlaughterProfile>,
}

impl SpeciesTables {
    pub fn formula(&self, name: &str) -> Option<&FormulaDefinition> {
        self.formulas.iter().find(|f| f.name == name)
    }

    pub fn breed(&self, name: &str) -> Option<&BreedProfile> {
        self.breeds.iter().find(|b| b.name == name)
    }

    pub fn slaughter_profile(&self, breed: &str) -> Option<&SlaughterProfile> {
        self.slaughter.iter().find(|s| s.breed == breed)
    }
}

// ==========================================
// ReferenceData - 注册表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub species: Vec<SpeciesTables>,
}

impl ReferenceData {
    /// 内置文献数据 (未校验)
    pub fn builtin() -> Self {
        Self {
            species: vec![cattle::tables(), goat::tables(), sheep::tables()],
        }
    }

    /// 内置文献数据, 校验通过后返回
    pub fn load_builtin() -> CalcResult<Self> {
        let data = Self::builtin();
        data.validate()?;
        Ok(data)
    }

    /// 从 JSON 文本加载覆盖数据 (结构与内置表一致)
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let data: ReferenceData = serde_json::from_str(json)
            .map_err(|e| CalcError::ReferenceDataParse(e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    /// 从 JSON 文件加载覆盖数据
    pub fn from_path(path: &Path) -> CalcResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CalcError::ReferenceDataParse(format!("{}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "加载参考数据覆盖文件");
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::ReferenceDataParse(e.to_string()))
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn tables(&self, species: Species) -> CalcResult<&SpeciesTables> {
        self.species
            .iter()
            .find(|t| t.species == species)
            .ok_or_else(|| CalcError::UnknownSpecies(species.to_string()))
    }

    /// 已注册的畜种 (注册顺序)
    pub fn species_list(&self) -> Vec<Species> {
        self.species.iter().map(|t| t.species).collect()
    }

    pub fn formulas(&self, species: Species) -> CalcResult<&[FormulaDefinition]> {
        Ok(&self.tables(species)?.formulas)
    }

    pub fn breeds(&self, species: Species) -> CalcResult<&[BreedProfile]> {
        Ok(&self.tables(species)?.breeds)
    }

    pub fn breed_names(&self, species: Species) -> CalcResult<Vec<&str>> {
        Ok(self
            .breeds(species)?
            .iter()
            .map(|b| b.name.as_str())
            .collect())
    }

    pub fn breed(&self, species: Species, breed: &str) -> CalcResult<&BreedProfile> {
        self.tables(species)?
            .breed(breed)
            .ok_or_else(|| CalcError::UnknownBreed {
                species: species.to_string(),
                breed: breed.to_string(),
            })
    }

    pub fn formula(&self, species: Species, formula: &str) -> CalcResult<&FormulaDefinition> {
        self.tables(species)?
            .formula(formula)
            .ok_or_else(|| CalcError::UnknownFormula {
                species: species.to_string(),
                formula: formula.to_string(),
            })
    }

    pub fn slaughter_profile(&self, species: Species, breed: &str) -> CalcResult<&SlaughterProfile> {
        self.tables(species)?
            .slaughter_profile(breed)
            .ok_or_else(|| CalcError::UnknownBreed {
                species: species.to_string(),
                breed: breed.to_string(),
            })
    }

    /// 品种 + 其指定公式
    pub fn resolve(
        &self,
        species: Species,
        breed: &str,
    ) -> CalcResult<(&BreedProfile, &FormulaDefinition)> {
        let profile = self.breed(species, breed)?;
        let formula = self.formula(species, &profile.assigned_formula)?;
        Ok((profile, formula))
    }
}

// ==========================================
// 进程级单例
// ==========================================
static GLOBAL: OnceCell<ReferenceData> = OnceCell::new();

/// 内置参考数据 (首次调用时构建并校验)
pub fn global() -> CalcResult<&'static ReferenceData> {
    GLOBAL.get_or_try_init(|| {
        debug!("构建内置参考数据");
        ReferenceData::load_builtin()
    })
}

// ==========================================
// 数据表构建辅助
// ==========================================

/// 文献中非胴体组分的固定顺序
const LITERATURE_COMPONENTS: [NonCarcassComponent; 11] = [
    NonCarcassComponent::Head,
    NonCarcassComponent::Hide,
    NonCarcassComponent::Feet,
    NonCarcassComponent::Tail,
    NonCarcassComponent::Blood,
    NonCarcassComponent::Heart,
    NonCarcassComponent::Liver,
    NonCarcassComponent::Lungs,
    NonCarcassComponent::Spleen,
    NonCarcassComponent::DigestiveTract,
    NonCarcassComponent::Fat,
];

/// 年龄范围顺序: 成年, 青年, 幼年 (月)
fn breed(
    name: &str,
    assigned_formula: &str,
    breed_factor: f64,
    sex_factor: (f64, f64),
    chest_girth: (f64, f64),
    body_length: (f64, f64),
    ages: [(f64, f64); 3],
) -> BreedProfile {
    let stages = [LifeStage::Adult, LifeStage::Young, LifeStage::Juvenile];
    BreedProfile {
        name: name.to_string(),
        assigned_formula: assigned_formula.to_string(),
        breed_factor,
        sex_factor: SexFactors::new(sex_factor.0, sex_factor.1),
        chest_girth_range: MeasurementRange::new(chest_girth.0, chest_girth.1),
        body_length_range: MeasurementRange::new(body_length.0, body_length.1),
        age_ranges: stages
            .iter()
            .zip(ages.iter())
            .map(|(&stage, &(min, max))| AgeRange::months(stage, min, max))
            .collect(),
    }
}

fn slaughter(
    breed: &str,
    carcass_percent: (f64, f64),
    non_carcass: [f64; 11],
    meat_percent_of_carcass: f64,
    citation: &str,
) -> SlaughterProfile {
    SlaughterProfile {
        breed: breed.to_string(),
        carcass_percent: SexPercentages::new(carcass_percent.0, carcass_percent.1),
        non_carcass_percent: LITERATURE_COMPONENTS
            .iter()
            .zip(non_carcass.iter())
            .map(|(&component, &percent)| ComponentShare { component, percent })
            .collect(),
        meat_percent_of_carcass,
        citation: citation.to_string(),
    }
}
