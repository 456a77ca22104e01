//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! - `<INPUT>`: MOPAC 输出文件路径（必需，位置参数）
//! - `--log-level`: 解析器诊断信息的最低级别，可由环境变量
//!   `MOPAC_REPORT_LOG_LEVEL` 设置，默认 `error`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/report.rs`

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// mopac-report - MOPAC 输出文件性质报告
#[derive(Parser, Debug)]
#[command(name = "mopac-report")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Print atoms, final geometry, energy, mass, frequencies and rotational constants from a MOPAC output file", long_about = None)]
pub struct Cli {
    /// MOPAC output file (.out)
    pub input: PathBuf,

    /// Minimum severity of parser diagnostics written to stderr
    #[arg(
        long,
        value_enum,
        env = "MOPAC_REPORT_LOG_LEVEL",
        default_value_t = Severity::Error
    )]
    pub log_level: Severity,
}

/// 诊断信息级别
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Severity {
    /// Discard all diagnostics
    Off,
    /// Errors only
    #[default]
    Error,
    /// Warnings and errors
    Warn,
    /// Progress summaries
    Info,
    /// Section-level parsing details
    Debug,
    /// Everything
    Trace,
}

impl Severity {
    /// 转换为 `log` 的级别过滤器
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Severity::Off => LevelFilter::Off,
            Severity::Error => LevelFilter::Error,
            Severity::Warn => LevelFilter::Warn,
            Severity::Info => LevelFilter::Info,
            Severity::Debug => LevelFilter::Debug,
            Severity::Trace => LevelFilter::Trace,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
            Severity::Debug => write!(f, "debug"),
            Severity::Trace => write!(f, "trace"),
        }
    }
}
