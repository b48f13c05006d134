// ==========================================
// 家畜体重估算系统 - 领域类型定义
// ==========================================
// 职责: 畜种/性别/生长阶段/非胴体组分等封闭枚举
// 说明: 解析时同时接受英文与印尼语名称 (表单层两种都会传)
// ==========================================

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 畜种 (Species)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Cattle, // 牛 (Sapi)
    Goat,   // 山羊 (Kambing)
    Sheep,  // 绵羊 (Domba)
}

impl Species {
    /// 全部畜种 (固定顺序)
    pub const ALL: [Species; 3] = [Species::Cattle, Species::Goat, Species::Sheep];

    /// 印尼语名称
    pub fn local_name(&self) -> &'static str {
        match self {
            Species::Cattle => "Sapi",
            Species::Goat => "Kambing",
            Species::Sheep => "Domba",
        }
    }

    /// 国际化 key
    pub fn label_key(&self) -> &'static str {
        match self {
            Species::Cattle => "species.cattle",
            Species::Goat => "species.goat",
            Species::Sheep => "species.sheep",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Cattle => write!(f, "cattle"),
            Species::Goat => write!(f, "goat"),
            Species::Sheep => write!(f, "sheep"),
        }
    }
}

impl FromStr for Species {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "cattle" | "cow" | "sapi" => Ok(Species::Cattle),
            "goat" | "kambing" => Ok(Species::Goat),
            "sheep" | "domba" => Ok(Species::Sheep),
            _ => Err(CalcError::UnknownSpecies(s.to_string())),
        }
    }
}

// ==========================================
// 性别 (Sex)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,   // 公 (Jantan)
    Female, // 母 (Betina)
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn local_name(&self) -> &'static str {
        match self {
            Sex::Male => "Jantan",
            Sex::Female => "Betina",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Sex::Male => "sex.male",
            Sex::Female => "sex.female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "jantan" => Ok(Sex::Male),
            "female" | "f" | "betina" => Ok(Sex::Female),
            _ => Err(CalcError::UnknownSex(s.to_string())),
        }
    }
}

// ==========================================
// 生长阶段 (Life Stage)
// ==========================================
// 仅用于展示年龄范围,不参与计算
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Adult,    // 成年 (Dewasa)
    Young,    // 青年 (Muda)
    Juvenile, // 幼年 (Anak)
}

impl LifeStage {
    pub fn label_key(&self) -> &'static str {
        match self {
            LifeStage::Adult => "life_stage.adult",
            LifeStage::Young => "life_stage.young",
            LifeStage::Juvenile => "life_stage.juvenile",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeStage::Adult => write!(f, "adult"),
            LifeStage::Young => write!(f, "young"),
            LifeStage::Juvenile => write!(f, "juvenile"),
        }
    }
}

// ==========================================
// 非胴体组分 (Non-carcass Component)
// ==========================================
// Other 为派生时合成的余量组分,参考数据中不出现
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonCarcassComponent {
    Head,           // 头 (Kepala)
    Hide,           // 皮 (Kulit)
    Feet,           // 蹄 (Kaki)
    Tail,           // 尾 (Ekor)
    Blood,          // 血 (Darah)
    Heart,          // 心 (Jantung)
    Liver,          // 肝 (Hati)
    Lungs,          // 肺 (Paru-paru)
    Spleen,         // 脾 (Limpa)
    DigestiveTract, // 消化道 (Saluran Pencernaan)
    Fat,            // 脂肪 (Lemak)
    Other,          // 其他 (余量)
}

impl NonCarcassComponent {
    pub fn label_key(&self) -> &'static str {
        match self {
            NonCarcassComponent::Head => "component.head",
            NonCarcassComponent::Hide => "component.hide",
            NonCarcassComponent::Feet => "component.feet",
            NonCarcassComponent::Tail => "component.tail",
            NonCarcassComponent::Blood => "component.blood",
            NonCarcassComponent::Heart => "component.heart",
            NonCarcassComponent::Liver => "component.liver",
            NonCarcassComponent::Lungs => "component.lungs",
            NonCarcassComponent::Spleen => "component.spleen",
            NonCarcassComponent::DigestiveTract => "component.digestive_tract",
            NonCarcassComponent::Fat => "component.fat",
            NonCarcassComponent::Other => "component.other",
        }
    }
}

impl fmt::Display for NonCarcassComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NonCarcassComponent::Head => "head",
            NonCarcassComponent::Hide => "hide",
            NonCarcassComponent::Feet => "feet",
            NonCarcassComponent::Tail => "tail",
            NonCarcassComponent::Blood => "blood",
            NonCarcassComponent::Heart => "heart",
            NonCarcassComponent::Liver => "liver",
            NonCarcassComponent::Lungs => "lungs",
            NonCarcassComponent::Spleen => "spleen",
            NonCarcassComponent::DigestiveTract => "digestive_tract",
            NonCarcassComponent::Fat => "fat",
            NonCarcassComponent::Other => "other",
        };
        write!(f, "{}", name)
    }
}

// ==========================================
// 典型范围判定 (Range Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeStatus {
    BelowTypical,
    WithinTypical,
    AboveTypical,
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeStatus::BelowTypical => write!(f, "BELOW_TYPICAL"),
            RangeStatus::WithinTypical => write!(f, "WITHIN_TYPICAL"),
            RangeStatus::AboveTypical => write!(f, "ABOVE_TYPICAL"),
        }
    }
}

// ==========================================
// 测量轴 (Measurement Axis)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementAxis {
    ChestGirth, // 胸围 (LD)
    BodyLength, // 体长 (PB)
}

impl MeasurementAxis {
    /// 错误/日志中使用的字段名
    pub fn field_name(&self) -> &'static str {
        match self {
            MeasurementAxis::ChestGirth => "chest_girth_cm",
            MeasurementAxis::BodyLength => "body_length_cm",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            MeasurementAxis::ChestGirth => "axis.chest_girth",
            MeasurementAxis::BodyLength => "axis.body_length",
        }
    }
}

impl fmt::Display for MeasurementAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_parse_accepts_local_names() {
        assert_eq!("Sapi".parse::<Species>().unwrap(), Species::Cattle);
        assert_eq!(" kambing ".parse::<Species>().unwrap(), Species::Goat);
        assert_eq!("SHEEP".parse::<Species>().unwrap(), Species::Sheep);
    }

    #[test]
    fn test_species_parse_unknown() {
        assert_eq!(
            "llama".parse::<Species>(),
            Err(CalcError::UnknownSpecies("llama".to_string()))
        );
    }

    #[test]
    fn test_sex_parse() {
        assert_eq!("Jantan".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("female".parse::<Sex>().unwrap(), Sex::Female);
        assert!(matches!("castrated".parse::<Sex>(), Err(CalcError::UnknownSex(_))));
    }

    #[test]
    fn test_display_matches_serde() {
        let json = serde_json::to_string(&Species::Cattle).unwrap();
        assert_eq!(json, format!("\"{}\"", Species::Cattle));
        let json = serde_json::to_string(&NonCarcassComponent::DigestiveTract).unwrap();
        assert_eq!(json, format!("\"{}\"", NonCarcassComponent::DigestiveTract));
    }
}
