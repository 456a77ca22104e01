//! # 量子化学计算结果数据模型
//!
//! 存储从 MOPAC 输出中提取的信息。序列字段只按"整体"或"最后一个元素"读取。
//!
//! ## 依赖关系
//! - 被 `parsers/mopac_out.rs` 构造
//! - 被 `commands/report.rs` 读取

use crate::error::{ReportError, Result};

/// 一次计算的解析结果
#[derive(Debug, Clone, PartialEq)]
pub struct QmResult {
    /// 来源文件（用于错误信息）
    pub source: String,

    /// 程序版本标识，如 `MOPAC2009`
    pub program: Option<String>,

    /// 原子数
    pub natom: usize,

    /// 原子序数，长度等于 natom
    pub atomnos: Vec<u32>,

    /// 每个优化步的笛卡尔坐标 (Å)，至少一组
    pub atomcoords: Vec<Vec<[f64; 3]>>,

    /// 每个优化步的能量 (Hartree)
    pub scfenergies: Vec<f64>,

    /// 最后的生成热 (kcal/mol)
    pub heat_of_formation: Option<f64>,

    /// 最后的总能量 (Hartree)
    pub total_energy: Option<f64>,

    /// 分子质量 (amu)
    pub molmass: Option<f64>,

    /// 振动频率 (cm⁻¹)；没有振动分析时为 None
    pub vibfreqs: Option<Vec<f64>>,

    /// 转动常数 (cm⁻¹)，每次打印追加一组
    pub rotcons: Vec<[f64; 3]>,

    /// 是否正常结束
    pub terminated_normally: bool,
}

impl QmResult {
    pub fn new(source: impl Into<String>, atomnos: Vec<u32>, coords: Vec<[f64; 3]>) -> Self {
        QmResult {
            source: source.into(),
            program: None,
            natom: atomnos.len(),
            atomnos,
            atomcoords: vec![coords],
            scfenergies: Vec::new(),
            heat_of_formation: None,
            total_energy: None,
            molmass: None,
            vibfreqs: None,
            rotcons: Vec::new(),
            terminated_normally: false,
        }
    }

    /// 最后一组坐标
    pub fn last_coords(&self) -> Result<&[[f64; 3]]> {
        self.atomcoords
            .last()
            .map(|c| c.as_slice())
            .ok_or_else(|| self.unavailable("atomcoords"))
    }

    /// 最后的能量 (Hartree)
    pub fn last_scf_energy(&self) -> Result<f64> {
        self.scfenergies
            .last()
            .copied()
            .ok_or_else(|| self.unavailable("scfenergies"))
    }

    pub fn molmass(&self) -> Result<f64> {
        self.molmass.ok_or_else(|| self.unavailable("molmass"))
    }

    pub fn vibfreqs(&self) -> Result<&[f64]> {
        self.vibfreqs
            .as_deref()
            .ok_or_else(|| self.unavailable("vibfreqs"))
    }

    /// 最后一组转动常数
    pub fn last_rotcons(&self) -> Result<[f64; 3]> {
        self.rotcons
            .last()
            .copied()
            .ok_or_else(|| self.unavailable("rotcons"))
    }

    fn unavailable(&self, attribute: &str) -> ReportError {
        ReportError::AttributeUnavailable {
            attribute: attribute.to_string(),
            path: self.source.clone(),
        }
    }
}
