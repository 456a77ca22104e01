//! # mopac-report - MOPAC 输出文件性质报告
//!
//! 读取一个 MOPAC 半经验计算输出文件，按固定顺序打印原子数、原子序数、
//! 最终坐标、最终能量 (Hartree)、分子质量，多原子体系另加振动频率与转动常数。
//!
//! ## 输出
//! ```text
//! 3                                   # 原子数
//! [8, 1, 1]                           # 原子序数
//! [[x, y, z], ...]                    # 最后一组笛卡尔坐标 (Å)
//! -0.09210771                         # 最终能量 (Hartree)
//! 18.015                              # 分子质量 (amu)
//! [1669.46, 2858.15, 2866.53]         # 振动频率 (cm⁻¹)，仅 natom > 1
//! [27.24, 14.45, 9.44]                # 转动常数 (cm⁻¹)，仅 natom > 1
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (报告输出逻辑)
//!   │     ├── parsers/   (MOPAC 输出解析器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、日志、单位换算)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    utils::logging::init_logger();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
