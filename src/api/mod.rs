// ==========================================
// 家畜体重估算系统 - API 层
// ==========================================
// 职责: 接收字符串形式的输入契约, 调用各引擎, 汇总计算报告
// 红线: 不含计算逻辑, 只做解析/编排/本地化
// ==========================================

pub mod calculator_api;
pub mod error;

// 重导出核心类型
pub use calculator_api::{
    CalculationReport, CalculationRequest, CalculatorApi, CitationEntry, CitationSource,
    SpeciesSummary,
};
pub use error::{ApiError, ApiResult};
