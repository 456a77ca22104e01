//! # 命令执行模块
//!
//! 实现报告输出的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`
//! - 子模块: report

pub mod report;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    report::execute(&cli.input, cli.log_level.to_level_filter())
}
