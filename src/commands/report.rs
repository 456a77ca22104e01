//! # 性质报告
//!
//! 解析一个 MOPAC 输出文件并按固定顺序逐行打印：
//! 1. 原子数
//! 2. 原子序数列表
//! 3. 最后一组坐标
//! 4. 最后的能量 (Hartree)
//! 5. 分子质量
//! 6. 振动频率（仅 natom > 1）
//! 7. 最后一组转动常数（仅 natom > 1）
//!
//! 逐行写出，某个字段缺失时已写出的行保留，不回滚。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `parsers/mopac_out.rs`, `models/calculation.rs`

use crate::error::Result;
use crate::models::QmResult;
use crate::parsers::MopacParser;

use log::LevelFilter;
use std::io::{self, Write};
use std::path::Path;

/// 执行报告：解析文件并写到 stdout
pub fn execute(path: &Path, min_level: LevelFilter) -> Result<()> {
    let parser = MopacParser::new(path, min_level);
    let result = parser.parse()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&result, &mut out)
}

/// 将报告写到任意输出
pub fn write_report<W: Write>(result: &QmResult, out: &mut W) -> Result<()> {
    writeln!(out, "{}", result.natom)?;
    writeln!(out, "{:?}", result.atomnos)?;
    writeln!(out, "{:?}", result.last_coords()?)?;
    writeln!(out, "{:?}", result.last_scf_energy()?)?;
    writeln!(out, "{:?}", result.molmass()?)?;

    // 单原子没有振动和转动
    if result.natom > 1 {
        writeln!(out, "{:?}", result.vibfreqs()?)?;
        writeln!(out, "{:?}", result.last_rotcons()?)?;
    }

    out.flush()?;
    Ok(())
}
