//! # 能量单位换算
//!
//! MOPAC 以 kcal/mol 报告生成热、以 eV 报告总能量，报告中统一使用 Hartree。
//!
//! ## 依赖关系
//! - 被 `parsers/mopac_out.rs` 使用

/// kcal/mol per Hartree
pub const KCAL_PER_HARTREE: f64 = 627.5095;

/// eV per Hartree
pub const EV_PER_HARTREE: f64 = 27.21138;

/// kcal/mol -> Hartree
pub fn kcal_to_hartree(kcal: f64) -> f64 {
    kcal / KCAL_PER_HARTREE
}

/// eV -> Hartree
pub fn ev_to_hartree(ev: f64) -> f64 {
    ev / EV_PER_HARTREE
}
