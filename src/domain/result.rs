// ==========================================
// 家畜体重估算系统 - 计算结果 (瞬态)
// ==========================================
// 职责: 估算/对比/胴体分解/变异网格的输出结构
// 说明: 每次输入变化重新计算, 不缓存, 不持久化
//       所有结构均可直接序列化给展示层
// ==========================================

use crate::domain::breed::MeasurementRange;
use crate::domain::types::{MeasurementAxis, NonCarcassComponent, RangeStatus, Sex, Species};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ==========================================
// EstimationNote - 结果附注 (非错误)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimationNote {
    /// 测量值超出品种典型范围, 结果照常计算
    OutOfTypicalRange {
        axis: MeasurementAxis,
        value: f64,
        status: RangeStatus,
        typical: MeasurementRange,
    },
    /// 公式输出非正值 (仿射公式在小尺寸时出现), 数值原样保留
    NonPositiveResult { raw_weight: f64 },
}

// ==========================================
// EstimationResult - 体重估算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub chest_girth: f64,
    pub body_length: f64,
    pub raw_weight: f64,
    pub corrected_weight: f64,
    pub formula_used: String,
    pub formula_text: String,
    pub citation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<EstimationNote>,
}

impl EstimationResult {
    pub fn has_non_positive_result(&self) -> bool {
        self.notes
            .iter()
            .any(|n| matches!(n, EstimationNote::NonPositiveResult { .. }))
    }

    pub fn is_atypical(&self) -> bool {
        self.notes
            .iter()
            .any(|n| matches!(n, EstimationNote::OutOfTypicalRange { .. }))
    }
}

// ==========================================
// CarcassBreakdown - 胴体分解
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeight {
    pub component: NonCarcassComponent,
    pub percent: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarcassBreakdown {
    pub live_weight: f64,
    pub carcass_weight: f64,
    pub carcass_percent: f64,
    pub meat_weight: f64,
    pub meat_percent_of_carcass: f64,
    pub meat_percent_of_body: f64,
    pub bone_and_fat_weight: f64,
    pub non_carcass_weights: Vec<ComponentWeight>, // 文献顺序, Other 在末尾
    pub over_allocated: bool,                      // 胴体 + 非胴体 > 100%
    pub citation: String,
}

impl CarcassBreakdown {
    /// 非胴体总重 (活重 - 胴体重)
    pub fn non_carcass_weight(&self) -> f64 {
        self.live_weight - self.carcass_weight
    }

    pub fn component_weight(&self, component: NonCarcassComponent) -> Option<f64> {
        self.non_carcass_weights
            .iter()
            .find(|c| c.component == component)
            .map(|c| c.weight_kg)
    }

    pub fn non_carcass_components_total(&self) -> f64 {
        self.non_carcass_weights.iter().map(|c| c.weight_kg).sum()
    }
}

// ==========================================
// 公式对比
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaComparisonRow {
    pub formula_name: String,
    pub raw_weight: f64,
    pub corrected_weight: f64,
    pub formula_text: String,
    pub description: String,
    pub citation: String,
    pub is_assigned: bool, // 是否为该品种指定公式
}

/// 公式对比结果 (保持公式注册顺序)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaComparison {
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub chest_girth: f64,
    pub body_length: f64,
    pub rows: Vec<FormulaComparisonRow>,
}

impl FormulaComparison {
    pub fn get(&self, formula_name: &str) -> Option<&FormulaComparisonRow> {
        self.rows.iter().find(|r| r.formula_name == formula_name)
    }
}

// ==========================================
// 品种对比
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedComparisonRow {
    pub breed_name: String,
    pub corrected_weight: f64,
    pub formula_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedBreed {
    pub rank: usize, // 从 1 开始
    pub breed_name: String,
    pub corrected_weight: f64,
    pub formula_name: String,
}

/// 按体重排序, 同值按品种名字典序
pub fn rank_breeds(rows: &[BreedComparisonRow], direction: SortDirection) -> Vec<RankedBreed> {
    let mut sorted: Vec<&BreedComparisonRow> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        let by_weight = match direction {
            SortDirection::Ascending => a.corrected_weight.total_cmp(&b.corrected_weight),
            SortDirection::Descending => b.corrected_weight.total_cmp(&a.corrected_weight),
        };
        match by_weight {
            Ordering::Equal => a.breed_name.cmp(&b.breed_name),
            other => other,
        }
    });

    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, row)| RankedBreed {
            rank: idx + 1,
            breed_name: row.breed_name.clone(),
            corrected_weight: row.corrected_weight,
            formula_name: row.formula_name.clone(),
        })
        .collect()
}

// ==========================================
// VariationGrid - 变异/敏感性网格
// ==========================================
// weights[i][j] 对应 chest_girth_values[i] × body_length_values[j]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationGrid {
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub center_chest_girth: f64,
    pub center_body_length: f64,
    pub variation_percent: f64,
    pub chest_girth_values: Vec<f64>,
    pub body_length_values: Vec<f64>,
    pub weights: Vec<Vec<f64>>,
}

impl VariationGrid {
    pub fn steps(&self) -> usize {
        self.chest_girth_values.len()
    }

    pub fn cell_count(&self) -> usize {
        self.weights.iter().map(|row| row.len()).sum()
    }

    pub fn cell(&self, chest_idx: usize, length_idx: usize) -> Option<f64> {
        self.weights.get(chest_idx)?.get(length_idx).copied()
    }

    /// 展开为 (胸围, 体长, 体重) 长表, 行优先
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.chest_girth_values
            .iter()
            .zip(self.weights.iter())
            .flat_map(move |(&ld, row)| {
                self.body_length_values
                    .iter()
                    .zip(row.iter())
                    .map(move |(&pb, &w)| (ld, pb, w))
            })
    }
}
