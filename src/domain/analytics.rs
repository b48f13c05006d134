// ==========================================
// 家畜体重估算系统 - 展示辅助数据集
// ==========================================
// 职责: 表单提示、响应曲线、分布曲线、胴体流向图的数据结构
// 说明: 分布曲线使用固定启发式参数, 不是拟合模型
// ==========================================

use crate::domain::breed::{AgeRange, MeasurementRange};
use crate::domain::types::{MeasurementAxis, RangeStatus, Sex, Species};
use serde::{Deserialize, Serialize};

// ==========================================
// 表单提示
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementHints {
    pub species: Species,
    pub breed: String,
    pub chest_girth_typical: MeasurementRange,
    pub body_length_typical: MeasurementRange,
    pub chest_girth_bounds: MeasurementRange, // 放宽后的输入边界
    pub body_length_bounds: MeasurementRange,
    pub default_chest_girth: f64,
    pub default_body_length: f64,
    pub age_ranges: Vec<AgeRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAssessment {
    pub axis: MeasurementAxis,
    pub value: f64,
    pub status: RangeStatus,
    pub within_tolerance: bool,
}

/// 测量值评估 (只提示, 不阻断计算)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementAssessment {
    pub chest_girth: AxisAssessment,
    pub body_length: AxisAssessment,
}

impl MeasurementAssessment {
    pub fn is_typical(&self) -> bool {
        self.chest_girth.status == RangeStatus::WithinTypical
            && self.body_length.status == RangeStatus::WithinTypical
    }

    pub fn is_within_tolerance(&self) -> bool {
        self.chest_girth.within_tolerance && self.body_length.within_tolerance
    }
}

// ==========================================
// 响应曲线: 单轴扫描, 另一轴固定
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub measurement: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCurve {
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub axis: MeasurementAxis,
    pub fixed_value: f64, // 另一轴的固定测量值
    pub typical_band: MeasurementRange,
    pub points: Vec<CurvePoint>,
}

// ==========================================
// 分布曲线 (启发式)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub x: f64,
    pub density: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightPosition {
    BelowBand,
    WithinBand,
    AboveBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightDistribution {
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub expected_min: f64,
    pub expected_max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub current_weight: f64,
    pub position: WeightPosition,
    pub curve: Vec<DensityPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarcassPercentDistribution {
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub mean: f64,
    pub std_dev: f64,
    pub curve: Vec<DensityPoint>,
}

// ==========================================
// 胴体流向图 (Sankey)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,    // 稳定标识 (live_weight / carcass / component.head ...)
    pub label: String, // 本地化标签
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: usize, // nodes 下标
    pub target: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarcassFlow {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl CarcassFlow {
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// 某节点流出总量
    pub fn outflow(&self, id: &str) -> f64 {
        match self.node_index(id) {
            Some(idx) => self
                .links
                .iter()
                .filter(|l| l.source == idx)
                .map(|l| l.value)
                .sum(),
            None => 0.0,
        }
    }
}
