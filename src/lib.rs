// ==========================================
// 家畜体重估算系统 - 核心库
// ==========================================
// 依据: 胸围 (LD) + 体长 (PB) 经验公式, 文献参考数据
// 适用: 牛 (Sapi) / 山羊 (Kambing) / 绵羊 (Domba)
// 系统定位: 计算核心, 展示层 (表单/图表) 不在本库内
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 参考数据层 - 文献数据表
pub mod reference;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 计算器配置
pub mod config;

// API 层 - 输入契约与报告
pub mod api;

// 导出层 - CSV
pub mod export;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{LifeStage, MeasurementAxis, NonCarcassComponent, RangeStatus, Sex, Species};

// 领域实体与结果
pub use domain::{
    BreedProfile, CarcassBreakdown, EstimationNote, EstimationResult, FormulaComparison,
    FormulaDefinition, FormulaKind, RankedBreed, SlaughterProfile, SortDirection, VariationGrid,
};

// 参考数据
pub use reference::ReferenceData;

// 引擎
pub use engine::{
    BreedComparator, CarcassEngine, DistributionEngine, FormulaComparator,
    MeasurementHintProvider, ResponseCurveGenerator, VariationGridGenerator, WeightEstimator,
};

// API
pub use api::{ApiError, ApiResult, CalculationReport, CalculationRequest, CalculatorApi};

// 错误
pub use error::{CalcError, CalcResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "家畜体重估算系统";
