// ==========================================
// 家畜体重估算系统 - API层错误类型
// ==========================================
// 职责: 汇总计算/配置/导出错误, 供调用方统一处理
// ==========================================

use crate::config::ConfigError;
use crate::error::CalcError;
use crate::export::ExportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 计算错误 (未知选择器 / 无效测量值 / 参考数据)
    // ==========================================
    #[error(transparent)]
    Calc(#[from] CalcError),

    // ==========================================
    // 配置与导出
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("导出错误: {0}")]
    Export(#[from] ExportError),

    // ==========================================
    // 请求错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 是否为未知选择器错误 (畜种/品种/性别/公式)
    pub fn is_unknown_selector(&self) -> bool {
        matches!(
            self,
            ApiError::Calc(
                CalcError::UnknownSpecies(_)
                    | CalcError::UnknownBreed { .. }
                    | CalcError::UnknownSex(_)
                    | CalcError::UnknownFormula { .. }
            )
        )
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
