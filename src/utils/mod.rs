//! # 工具函数模块
//!
//! 提供美化输出、诊断日志、能量单位换算等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `parsers/` 模块使用
//! - 子模块: output, logging, units

pub mod logging;
pub mod output;
pub mod units;
