//! # 美化输出工具
//!
//! 提供统一的终端消息样式。所有消息写到 stderr，
//! stdout 只留给报告本身。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `utils/logging.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 格式化一条诊断消息的级别标签
pub fn severity_tag(level: log::Level) -> String {
    match level {
        log::Level::Error => "[ERR]".red().bold().to_string(),
        log::Level::Warn => "[WARN]".yellow().bold().to_string(),
        log::Level::Info => "[*]".blue().bold().to_string(),
        log::Level::Debug => "[DBG]".dimmed().to_string(),
        log::Level::Trace => "[TRC]".dimmed().to_string(),
    }
}
