// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// 日志输出到 stderr, stdout 留给计算结果
// ==========================================

use crate::config::LogFormat;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter() -> EnvFilter {
    // 从环境变量读取日志级别, 默认为 info
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志系统 (文本格式)
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器 (默认: info)
///   例如: RUST_LOG=debug 或 RUST_LOG=livestock_weight=trace
///
/// # 示例
/// ```no_run
/// use livestock_weight::logging;
/// logging::init();
/// ```
pub fn init() -> bool {
    init_with_format(LogFormat::Text)
}

/// 按指定格式初始化日志系统
///
/// # 返回
/// - true: 本次调用安装了全局订阅器
/// - false: 进程内已有订阅器, 本次格式未生效 (记录 debug 日志)
pub fn init_with_format(format: LogFormat) -> bool {
    let builder = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    match result {
        Ok(()) => true,
        Err(err) => {
            // 已有订阅器时由它接收这条日志
            tracing::debug!(requested_format = %format, error = %err, "日志系统已初始化, 忽略重复初始化");
            false
        }
    }
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别, 便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
