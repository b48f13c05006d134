// ==========================================
// 家畜体重估算系统 - 屠宰统计领域模型
// ==========================================
// 职责: 品种的胴体率、非胴体组分占比、净肉率
// 说明: 胴体率 + 非胴体占比之和不要求恰为 100
//       不足部分在派生时记入 Other, 超出部分保持原样
// ==========================================

use crate::domain::types::{NonCarcassComponent, Sex};
use serde::{Deserialize, Serialize};

/// 按性别区分的百分比
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SexPercentages {
    pub male: f64,
    pub female: f64,
}

impl SexPercentages {
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

/// 单个非胴体组分占活重的百分比
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentShare {
    pub component: NonCarcassComponent,
    pub percent: f64,
}

// ==========================================
// SlaughterProfile - 屠宰档案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaughterProfile {
    pub breed: String,
    pub carcass_percent: SexPercentages,
    pub non_carcass_percent: Vec<ComponentShare>, // 保持文献顺序
    pub meat_percent_of_carcass: f64,
    pub citation: String,
}

impl SlaughterProfile {
    /// 非胴体组分占比合计
    pub fn non_carcass_total(&self) -> f64 {
        self.non_carcass_percent.iter().map(|c| c.percent).sum()
    }

    /// 已分配占比 = 胴体率 + 非胴体合计
    pub fn accounted_percent(&self, sex: Sex) -> f64 {
        self.carcass_percent.get(sex) + self.non_carcass_total()
    }

    /// 是否超额分配 (> 100%)
    pub fn is_over_allocated(&self, sex: Sex) -> bool {
        self.accounted_percent(sex) > 100.0
    }

    pub fn share_of(&self, component: NonCarcassComponent) -> Option<f64> {
        self.non_carcass_percent
            .iter()
            .find(|c| c.component == component)
            .map(|c| c.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile() -> SlaughterProfile {
        SlaughterProfile {
            breed: "Test".to_string(),
            carcass_percent: SexPercentages::new(52.5, 49.0),
            non_carcass_percent: vec![
                ComponentShare {
                    component: NonCarcassComponent::Head,
                    percent: 6.5,
                },
                ComponentShare {
                    component: NonCarcassComponent::Hide,
                    percent: 8.0,
                },
            ],
            meat_percent_of_carcass: 75.0,
            citation: String::new(),
        }
    }

    #[test]
    fn test_accounted_percent() {
        let p = profile();
        assert_relative_eq!(p.non_carcass_total(), 14.5);
        assert_relative_eq!(p.accounted_percent(Sex::Male), 67.0);
        assert_relative_eq!(p.accounted_percent(Sex::Female), 63.5);
        assert!(!p.is_over_allocated(Sex::Male));
    }

    #[test]
    fn test_share_lookup() {
        let p = profile();
        assert_eq!(p.share_of(NonCarcassComponent::Hide), Some(8.0));
        assert_eq!(p.share_of(NonCarcassComponent::Blood), None);
    }
}
