// ==========================================
// 家畜体重估算系统 - 计算错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================
// 职责: 定义计算核心的错误分类
// 说明: 超出典型范围/非正结果不是错误,以 EstimationNote 形式附在结果上
// ==========================================

use thiserror::Error;

/// 计算核心错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    // ===== 选择器错误 (调用方 bug, 直接失败) =====
    #[error("未知畜种: {0}")]
    UnknownSpecies(String),

    #[error("未知品种: species={species}, breed={breed}")]
    UnknownBreed { species: String, breed: String },

    #[error("未知性别: {0}")]
    UnknownSex(String),

    #[error("未知公式: species={species}, formula={formula}")]
    UnknownFormula { species: String, formula: String },

    // ===== 输入错误 =====
    #[error("测量值无效 ({field}): {value} (必须为有限正数)")]
    InvalidMeasurement { field: &'static str, value: f64 },

    #[error("活重必须为正数: {0}")]
    NonPositiveLiveWeight(f64),

    #[error("网格参数无效: {0}")]
    InvalidGridSpec(String),

    // ===== 参考数据错误 =====
    #[error("参考数据不一致: {0}")]
    InconsistentReferenceData(String),

    #[error("参考数据解析失败: {0}")]
    ReferenceDataParse(String),
}

/// Result 类型别名
pub type CalcResult<T> = Result<T, CalcError>;

/// 校验单个测量值: 必须为有限正数
pub fn ensure_measurement(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidMeasurement { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_measurement_accepts_positive() {
        assert_eq!(ensure_measurement("chest_girth_cm", 180.0), Ok(180.0));
    }

    #[test]
    fn test_ensure_measurement_rejects_zero_negative_and_non_finite() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ensure_measurement("body_length_cm", value).unwrap_err();
            assert!(matches!(
                err,
                CalcError::InvalidMeasurement { field: "body_length_cm", .. }
            ));
        }
    }

    #[test]
    fn test_error_messages_carry_selector() {
        let err = CalcError::UnknownBreed {
            species: "cattle".to_string(),
            breed: "Sapi Unicorn".to_string(),
        };
        assert!(err.to_string().contains("Sapi Unicorn"));
    }
}
