// ==========================================
// 家畜体重估算系统 - 引擎层
// ==========================================
// 职责: 纯计算, 输入全部通过参数传入, 输出为瞬态结果
// 红线: 引擎不持有可变状态, 不做 I/O
//       参考数据通过 &ReferenceData 显式传入
// ==========================================

pub mod breed_comparator;
pub mod carcass;
pub mod distribution;
pub mod estimator;
pub mod flow;
pub mod formula_comparator;
pub mod hints;
pub mod response_curve;
pub mod variation;

// 重导出核心引擎
pub use breed_comparator::BreedComparator;
pub use carcass::CarcassEngine;
pub use distribution::DistributionEngine;
pub use estimator::WeightEstimator;
pub use flow::build_carcass_flow;
pub use formula_comparator::FormulaComparator;
pub use hints::MeasurementHintProvider;
pub use response_curve::ResponseCurveGenerator;
pub use variation::VariationGridGenerator;
