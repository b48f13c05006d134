// ==========================================
// 家畜体重估算系统 - 领域模型层
// ==========================================
// 职责: 定义参考数据实体、枚举类型、瞬态计算结果
// 红线: 不含计算逻辑 (公式求值除外), 不含数据加载
// ==========================================

pub mod analytics;
pub mod breed;
pub mod formula;
pub mod result;
pub mod slaughter;
pub mod types;

// 重导出核心类型
pub use analytics::{
    AxisAssessment, CarcassFlow, CarcassPercentDistribution, CurvePoint, DensityPoint, FlowLink,
    FlowNode, MeasurementAssessment, MeasurementHints, ResponseCurve, WeightDistribution,
    WeightPosition,
};
pub use breed::{AgeRange, BreedProfile, MeasurementRange, SexFactors};
pub use formula::{FormulaDefinition, FormulaKind};
pub use result::{
    rank_breeds, BreedComparisonRow, CarcassBreakdown, ComponentWeight, EstimationNote,
    EstimationResult, FormulaComparison, FormulaComparisonRow, RankedBreed, SortDirection,
    VariationGrid,
};
pub use slaughter::{ComponentShare, SexPercentages, SlaughterProfile};
pub use types::{LifeStage, MeasurementAxis, NonCarcassComponent, RangeStatus, Sex, Species};
