// ==========================================
// 家畜体重估算系统 - 品种档案领域模型
// ==========================================
// 职责: 品种 → 指定公式、校正系数、典型测量范围、年龄范围
// 红线: 典型范围只作提示与默认值, 不做硬校验
// ==========================================

use crate::domain::types::{LifeStage, RangeStatus, Sex};
use serde::{Deserialize, Serialize};

// ==========================================
// MeasurementRange - 闭区间 [min, max] (cm)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRange {
    pub min: f64,
    pub max: f64,
}

impl MeasurementRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 区间中点 (表单默认值)
    pub fn midpoint(&self) -> f64 {
        self.min + (self.max - self.min) / 2.0
    }

    /// 判定值相对典型范围的位置
    pub fn status_of(&self, value: f64) -> RangeStatus {
        if value < self.min {
            RangeStatus::BelowTypical
        } else if value > self.max {
            RangeStatus::AboveTypical
        } else {
            RangeStatus::WithinTypical
        }
    }

    /// 按容差放宽后的输入边界
    ///
    /// # 参数
    /// - tolerance_ratio: 0.2 表示 [min × 0.8, max × 1.2]
    pub fn widened(&self, tolerance_ratio: f64) -> MeasurementRange {
        MeasurementRange {
            min: self.min * (1.0 - tolerance_ratio),
            max: self.max * (1.0 + tolerance_ratio),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }
}

// ==========================================
// AgeRange - 生长阶段年龄范围 (仅展示)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    pub stage: LifeStage,
    pub min: f64,
    pub max: f64,
    pub unit: String, // 目前均为 "months"
}

impl AgeRange {
    pub fn months(stage: LifeStage, min: f64, max: f64) -> Self {
        Self {
            stage,
            min,
            max,
            unit: "months".to_string(),
        }
    }
}

// ==========================================
// SexFactors - 性别校正系数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SexFactors {
    pub male: f64,
    pub female: f64,
}

impl SexFactors {
    pub const fn new(male: f64, female: f64) -> Self {
        Self { male, female }
    }

    pub fn get(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

// ==========================================
// BreedProfile - 品种档案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedProfile {
    pub name: String,
    pub assigned_formula: String, // 必须引用同畜种下已注册的公式
    pub breed_factor: f64,
    pub sex_factor: SexFactors,
    pub chest_girth_range: MeasurementRange,
    pub body_length_range: MeasurementRange,
    #[serde(default)]
    pub age_ranges: Vec<AgeRange>,
}

impl BreedProfile {
    /// 某性别下的合成校正系数 (品种 × 性别)
    pub fn correction_factor(&self, sex: Sex) -> f64 {
        self.breed_factor * self.sex_factor.get(sex)
    }

    pub fn age_range(&self, stage: LifeStage) -> Option<&AgeRange> {
        self.age_ranges.iter().find(|a| a.stage == stage)
    }
}
