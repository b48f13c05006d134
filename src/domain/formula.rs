// ==========================================
// 家畜体重估算系统 - 经验公式领域模型
// ==========================================
// 职责: 以数据形式描述回归公式 (系数固定, 无运行时状态)
// 输入: 胸围 LD (cm), 体长 PB (cm)
// 输出: 原始体重 (kg), 不做截断
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// FormulaKind - 公式形态
// ==========================================
// 每个变体对应一种函数形态, 系数作为数据存放
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormulaKind {
    /// LD² × PB / divisor (Winter, Lambourne, Arjodarmoko)
    GirthSquaredLengthOver { divisor: f64 },

    /// coefficient × LD² × PB (Denmark, New Zealand, Khan, Valdez)
    GirthSquaredLengthTimes { coefficient: f64 },

    /// (LD + shift)² / divisor (Schoorl), 不使用体长
    ShiftedGirthSquaredOver { shift: f64, divisor: f64 },

    /// coefficient × LD × PB + intercept (NSA Australia)
    ///
    /// 截距为负, 小尺寸输入会得到负值, 原样返回
    GirthLengthAffine { coefficient: f64, intercept: f64 },
}

impl FormulaKind {
    /// 计算原始体重
    pub fn evaluate(&self, chest_girth_cm: f64, body_length_cm: f64) -> f64 {
        let ld = chest_girth_cm;
        let pb = body_length_cm;
        match *self {
            FormulaKind::GirthSquaredLengthOver { divisor } => (ld * ld * pb) / divisor,
            FormulaKind::GirthSquaredLengthTimes { coefficient } => coefficient * (ld * ld) * pb,
            FormulaKind::ShiftedGirthSquaredOver { shift, divisor } => {
                let shifted = ld + shift;
                (shifted * shifted) / divisor
            }
            FormulaKind::GirthLengthAffine {
                coefficient,
                intercept,
            } => (coefficient * ld * pb) + intercept,
        }
    }

    /// 是否存在非正输出的可能 (仿射模型带负截距)
    pub fn can_yield_non_positive(&self) -> bool {
        matches!(self, FormulaKind::GirthLengthAffine { intercept, .. } if *intercept < 0.0)
    }

    /// 系数是否可用 (有限且除数非零)
    pub fn has_valid_coefficients(&self) -> bool {
        match *self {
            FormulaKind::GirthSquaredLengthOver { divisor } => divisor.is_finite() && divisor != 0.0,
            FormulaKind::GirthSquaredLengthTimes { coefficient } => coefficient.is_finite(),
            FormulaKind::ShiftedGirthSquaredOver { shift, divisor } => {
                shift.is_finite() && divisor.is_finite() && divisor != 0.0
            }
            FormulaKind::GirthLengthAffine {
                coefficient,
                intercept,
            } => coefficient.is_finite() && intercept.is_finite(),
        }
    }
}

// ==========================================
// FormulaDefinition - 公式定义
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaDefinition {
    pub name: String,         // 畜种内唯一名称
    pub formula_text: String, // 展示用公式文本
    pub description: String,  // 展示用说明
    pub citation: String,     // 文献引用
    pub kind: FormulaKind,    // 计算形态与系数
}

impl FormulaDefinition {
    pub fn new(
        name: &str,
        formula_text: &str,
        description: &str,
        citation: &str,
        kind: FormulaKind,
    ) -> Self {
        Self {
            name: name.to_string(),
            formula_text: formula_text.to_string(),
            description: description.to_string(),
            citation: citation.to_string(),
            kind,
        }
    }

    /// 计算原始体重 (未校正)
    pub fn evaluate(&self, chest_girth_cm: f64, body_length_cm: f64) -> f64 {
        self.kind.evaluate(chest_girth_cm, body_length_cm)
    }
}
