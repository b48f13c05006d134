// ==========================================
// 家畜体重估算系统 - 配置层
// ==========================================
// 职责: 计算器配置管理, 支持文件 + 命令行覆写
// 存储: 扁平 JSON 文件 (key → string)
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, default_config_path, resolve_config_path, CalculatorConfig, ConfigError,
    ConfigManager, LogFormat, CONFIG_PATH_ENV,
};
