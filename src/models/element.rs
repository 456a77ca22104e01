//! # 元素周期表
//!
//! 元素符号与原子序数的对应关系。
//!
//! ## 依赖关系
//! - 被 `parsers/mopac_out.rs` 使用
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

/// 按原子序数排列的元素符号 (H = 1)
const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// 大写符号 -> 原子序数
static ATOMIC_NUMBERS: LazyLock<HashMap<String, u32>> = LazyLock::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, s)| (s.to_uppercase(), i as u32 + 1))
        .collect()
});

/// 由元素符号查询原子序数
///
/// 大小写不敏感，MOPAC 的部分版本把 Cl 打印成 `CL`。
pub fn atomic_number(symbol: &str) -> Option<u32> {
    ATOMIC_NUMBERS.get(&symbol.trim().to_uppercase()).copied()
}
