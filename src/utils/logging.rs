//! # 诊断日志
//!
//! 基于 `log` facade 的诊断通道。全局只初始化一次 `env_logger`，
//! 每个解析器实例持有自己的 [`Diagnostics`]，级别过滤作用于实例而非全局。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用 `init_logger`
//! - 被 `parsers/` 使用 `Diagnostics`
//! - 使用 `log`, `env_logger` crate

use crate::utils::output;
use log::{Level, LevelFilter};
use std::fmt;
use std::io::Write;

/// 初始化全局日志后端（写到 stderr）
///
/// 默认放行所有级别，实际过滤由各 [`Diagnostics`] 实例完成；
/// 设置 `RUST_LOG` 可以在全局再收紧一次。
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}",
                output::severity_tag(record.level()),
                record.args()
            )
        })
        .try_init()
        .ok();
}

/// 单个解析器实例的诊断通道
#[derive(Debug)]
pub struct Diagnostics {
    target: String,
    min_level: LevelFilter,
    #[cfg(test)]
    forwarded: std::cell::Cell<usize>,
}

impl Diagnostics {
    pub fn new(target: impl Into<String>, min_level: LevelFilter) -> Self {
        Diagnostics {
            target: target.into(),
            min_level,
            #[cfg(test)]
            forwarded: std::cell::Cell::new(0),
        }
    }

    /// 不输出任何诊断
    #[cfg(test)]
    pub fn silent() -> Self {
        Diagnostics::new("mopac", LevelFilter::Off)
    }

    /// 该级别的消息是否会被转发
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.min_level
    }

    pub fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        log::log!(target: self.target.as_str(), level, "{}", args);
        #[cfg(test)]
        self.forwarded.set(self.forwarded.get() + 1);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warn, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, args);
    }

    /// 已转发到日志后端的消息数
    #[cfg(test)]
    pub fn forwarded(&self) -> usize {
        self.forwarded.get()
    }
}
