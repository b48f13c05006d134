// ==========================================
// 家畜体重估算系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写
// 存储: 扁平 JSON 文件 (key → string)
// 路径解析: 显式路径 → 环境变量 LIVESTOCK_WEIGHT_CONFIG
//           → dirs::config_dir()/livestock-weight/config.json
// 红线: 文件不存在 = 全部默认值, 不是错误
//       单项值无法解析 = 回退默认值 + warn, 不是错误
// ==========================================

use crate::engine::response_curve::{MAX_CURVE_POINTS, MIN_CURVE_POINTS};
use crate::engine::variation::{MAX_GRID_STEPS, MIN_GRID_STEPS};
use crate::i18n;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "LIVESTOCK_WEIGHT_CONFIG";

const CONFIG_DIR_NAME: &str = "livestock-weight";
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误 ({origin}): {message}")]
    Parse { origin: String, message: String },

    #[error("配置序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ==========================================
// LogFormat - 日志输出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("未知日志格式: {}", other)),
        }
    }
}

// ==========================================
// CalculatorConfig - 生效配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub locale: String,
    pub default_variation_percent: f64,
    pub default_grid_steps: usize,
    pub response_curve_points: usize,
    pub range_tolerance_percent: f64,
    pub log_format: LogFormat,
    pub reference_data_path: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            locale: i18n::DEFAULT_LOCALE.to_string(),
            default_variation_percent: 10.0,
            default_grid_steps: 3,
            response_curve_points: 50,
            range_tolerance_percent: 20.0,
            log_format: LogFormat::Text,
            reference_data_path: None,
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: BTreeMap<String, String>,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 全部默认值
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// 按解析顺序加载配置
    ///
    /// # 参数
    /// - explicit_path: 命令行显式指定的路径 (最高优先级)
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_value = std::env::var(CONFIG_PATH_ENV).ok();
        match resolve_config_path(explicit_path, env_value.as_deref()) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                debug!(path = %path.display(), "配置文件不存在, 使用默认配置");
                Ok(Self::with_defaults())
            }
            None => Ok(Self::with_defaults()),
        }
    }

    /// 从指定文件加载
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manager = Self::parse(&content, &path.display().to_string())?;
        manager.source = Some(path.to_path_buf());
        info!(path = %path.display(), keys = manager.values.len(), "配置文件已加载");
        Ok(manager)
    }

    /// 从 JSON 文本加载
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Self::parse(json, "<inline>")
    }

    fn parse(json: &str, origin: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;

        let mut values = BTreeMap::new();
        for (key, value) in raw {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => continue,
                other => {
                    warn!(config_key = %key, raw_value = %other, "配置值必须为标量, 已忽略");
                    continue;
                }
            };
            if !config_keys::ALL.contains(&key.as_str()) {
                warn!(config_key = %key, "未知配置键, 已忽略");
                continue;
            }
            values.insert(key, text);
        }

        Ok(Self {
            values,
            source: None,
        })
    }

    /// 配置来源文件 (默认配置时为 None)
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 读取原始配置值
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 覆写配置值 (命令行参数优先于文件)
    pub fn set_config_value(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn parse_or_default<T>(&self, key: &str, default: T, is_valid: impl Fn(&T) -> bool) -> T
    where
        T: FromStr,
    {
        match self.get_config_value(key) {
            None => default,
            Some(raw) => match raw.trim().parse::<T>() {
                Ok(value) if is_valid(&value) => value,
                _ => {
                    warn!(config_key = key, raw_value = %raw, "配置值无效, 使用默认值");
                    default
                }
            },
        }
    }

    // ===== 各配置项 =====

    pub fn get_locale(&self) -> String {
        let default = CalculatorConfig::default().locale;
        match self.get_config_value(config_keys::LOCALE) {
            None => default,
            Some(raw) => {
                let locale = raw.trim().to_lowercase();
                if i18n::is_supported(&locale) {
                    locale
                } else {
                    warn!(config_key = config_keys::LOCALE, raw_value = %raw, "不支持的语言, 使用默认值");
                    default
                }
            }
        }
    }

    pub fn get_default_variation_percent(&self) -> f64 {
        self.parse_or_default(
            config_keys::DEFAULT_VARIATION_PERCENT,
            CalculatorConfig::default().default_variation_percent,
            |v: &f64| v.is_finite() && *v > 0.0 && *v < 100.0,
        )
    }

    pub fn get_default_grid_steps(&self) -> usize {
        self.parse_or_default(
            config_keys::DEFAULT_GRID_STEPS,
            CalculatorConfig::default().default_grid_steps,
            |v: &usize| (MIN_GRID_STEPS..=MAX_GRID_STEPS).contains(v),
        )
    }

    pub fn get_response_curve_points(&self) -> usize {
        self.parse_or_default(
            config_keys::RESPONSE_CURVE_POINTS,
            CalculatorConfig::default().response_curve_points,
            |v: &usize| (MIN_CURVE_POINTS..=MAX_CURVE_POINTS).contains(v),
        )
    }

    pub fn get_range_tolerance_percent(&self) -> f64 {
        self.parse_or_default(
            config_keys::RANGE_TOLERANCE_PERCENT,
            CalculatorConfig::default().range_tolerance_percent,
            |v: &f64| v.is_finite() && *v >= 0.0 && *v < 100.0,
        )
    }

    pub fn get_log_format(&self) -> LogFormat {
        self.parse_or_default(config_keys::LOG_FORMAT, LogFormat::Text, |_| true)
    }

    pub fn get_reference_data_path(&self) -> Option<PathBuf> {
        self.get_config_value(config_keys::REFERENCE_DATA_PATH)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    /// 汇总为生效配置
    pub fn calculator_config(&self) -> CalculatorConfig {
        CalculatorConfig {
            locale: self.get_locale(),
            default_variation_percent: self.get_default_variation_percent(),
            default_grid_steps: self.get_default_grid_steps(),
            response_curve_points: self.get_response_curve_points(),
            range_tolerance_percent: self.get_range_tolerance_percent(),
            log_format: self.get_log_format(),
            reference_data_path: self.get_reference_data_path(),
        }
    }

    /// 生效配置快照 (JSON), 随计算报告一起输出
    pub fn snapshot(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(&self.calculator_config())?)
    }
}

/// 解析配置文件路径
///
/// # 返回
/// - None: 无显式路径、无环境变量, 且系统没有配置目录
pub fn resolve_config_path(explicit: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    default_config_path()
}

/// 用户配置目录下的默认路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const LOCALE: &str = "locale";

    // 变异网格
    pub const DEFAULT_VARIATION_PERCENT: &str = "default_variation_percent";
    pub const DEFAULT_GRID_STEPS: &str = "default_grid_steps";

    // 响应曲线
    pub const RESPONSE_CURVE_POINTS: &str = "response_curve_points";

    // 表单输入容差
    pub const RANGE_TOLERANCE_PERCENT: &str = "range_tolerance_percent";

    pub const LOG_FORMAT: &str = "log_format";

    // 参考数据覆盖文件
    pub const REFERENCE_DATA_PATH: &str = "reference_data_path";

    pub const ALL: [&str; 7] = [
        LOCALE,
        DEFAULT_VARIATION_PERCENT,
        DEFAULT_GRID_STEPS,
        RESPONSE_CURVE_POINTS,
        RANGE_TOLERANCE_PERCENT,
        LOG_FORMAT,
        REFERENCE_DATA_PATH,
    ];
}
