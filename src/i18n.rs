// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文 (默认) 和印尼语
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
//       标签函数显式传入 locale, 计算路径不读全局语言
// ==========================================

use crate::domain::{LifeStage, MeasurementAxis, NonCarcassComponent, Sex, Species};

/// 已提供翻译的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "id"];

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言 (仅供命令行入口使用)
///
/// # 参数
/// - locale: 语言代码 ("en" 或 "id")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息 (当前语言)
///
/// # 示例
/// ```no_run
/// use livestock_weight::i18n::t;
/// let msg = t("species.cattle");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息 (指定语言)
pub fn t_in(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息 (带参数)
pub fn t_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    let mut result = t_in(key, locale);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

// ==========================================
// 领域标签
// ==========================================

pub fn species_label(species: Species, locale: &str) -> String {
    t_in(species.label_key(), locale)
}

pub fn sex_label(sex: Sex, locale: &str) -> String {
    t_in(sex.label_key(), locale)
}

pub fn life_stage_label(stage: LifeStage, locale: &str) -> String {
    t_in(stage.label_key(), locale)
}

pub fn component_label(component: NonCarcassComponent, locale: &str) -> String {
    t_in(component.label_key(), locale)
}

pub fn axis_label(axis: MeasurementAxis, locale: &str) -> String {
    t_in(axis.label_key(), locale)
}

/// 流向图固定节点标签 (live_weight / carcass / non_carcass / meat / bone_and_fat)
pub fn flow_label(node_id: &str, locale: &str) -> String {
    t_in(&format!("flow.{}", node_id), locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态, 且测试默认并行执行;
    // 修改全局语言的测试需要串行化
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("id");
        assert_eq!(current_locale(), "id");
        assert_eq!(t("species.goat"), "Kambing");

        set_locale("en");
        assert_eq!(current_locale(), "en");
        assert_eq!(t("species.goat"), "Goat");
    }

    #[test]
    fn test_explicit_locale_labels() {
        assert_eq!(species_label(Species::Cattle, "en"), "Cattle");
        assert_eq!(species_label(Species::Cattle, "id"), "Sapi");
        assert_eq!(sex_label(Sex::Female, "id"), "Betina");
        assert_eq!(life_stage_label(LifeStage::Juvenile, "id"), "Anak");
        assert_eq!(
            component_label(NonCarcassComponent::DigestiveTract, "id"),
            "Saluran Pencernaan"
        );
        assert_eq!(flow_label("bone_and_fat", "en"), "Bone & Fat");
        assert_eq!(flow_label("live_weight", "id"), "Berat Hidup");
        assert_eq!(axis_label(MeasurementAxis::ChestGirth, "id"), "Lingkar Dada");
    }

    #[test]
    fn test_unsupported_locale_falls_back_to_english() {
        assert!(!is_supported("fr"));
        assert_eq!(species_label(Species::Sheep, "fr"), "Sheep");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = t_with_args("note.out_of_range", "en", &[("axis", "chest_girth_cm")]);
        assert!(msg.contains("chest_girth_cm"));
        let msg = t_with_args("note.out_of_range", "id", &[("axis", "chest_girth_cm")]);
        assert!(msg.contains("chest_girth_cm"));
        assert!(msg.contains("di luar"));
    }
}
