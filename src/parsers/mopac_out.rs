//! # MOPAC 输出解析器
//!
//! 解析 MOPAC 半经验计算输出文件 (.out)，提取几何结构、能量、
//! 分子质量、振动频率和转动常数。
//!
//! ## 识别的输出段落
//! ```text
//!        ATOM   CHEMICAL          X               Y               Z
//!       NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)
//!
//!          1       O          0.00000000  *   0.00000000  *   0.00000000  *
//!
//!           FINAL HEAT OF FORMATION =        -53.43264 KCAL/MOL =    -223.56214 KJ/MOL
//!           TOTAL ENERGY            =       -322.30845 EV
//!           MOLECULAR WEIGHT        =         18.0150
//!
//!           ROTATIONAL CONSTANTS IN CM(-1)
//!
//!           A =   27.24301480   B =   14.45176330   C =    9.44277500
//!
//!  VIBRATION    1    1A1         ATOM PAIR        ENERGY CONTRIBUTION    RADIAL
//!  FREQ.      1669.46            H  2 --  H  3         +50.0% ( 50.0%)   100.0%
//! ```
//!
//! 没有精确坐标段 (`ATOM CHEMICAL X Y Z`) 时退回使用 `CARTESIAN COORDINATES` 段。
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 使用
//! - 使用 `models/calculation.rs`, `models/element.rs`
//! - 使用 `utils/logging.rs`, `utils/units.rs`

use crate::error::{ReportError, Result};
use crate::models::element::atomic_number;
use crate::models::QmResult;
use crate::utils::logging::Diagnostics;
use crate::utils::units;

use log::LevelFilter;
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

const FORMAT: &str = "mopac";

static BANNER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(MOPAC\s?\d[\w.]*)").expect("valid regex"));

static HEAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"FINAL\s+HEAT\s+OF\s+FORMATION\s*=\s*(\S+)\s+KCAL").expect("valid regex")
});

static TOTAL_ENERGY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*TOTAL\s+ENERGY\s*=\s*(\S+)\s+EV").expect("valid regex"));

static MOLWT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*MOLECULAR\s+WEIGHT\s*=+\s*(\S+)").expect("valid regex"));

static ROTCON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"A\s*=\s*(\S+)\s+B\s*=\s*(\S+)\s+C\s*=\s*(\S+)").expect("valid regex")
});

static FORMULA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Empirical\s+Formula:.*=\s*(\d+)\s+atoms?").expect("valid regex")
});

/// MOPAC 输出解析器
///
/// 诊断级别在构造时传入，只作用于这个实例。
#[derive(Debug)]
pub struct MopacParser {
    path: PathBuf,
    diagnostics: Diagnostics,
}

impl MopacParser {
    pub fn new(path: impl Into<PathBuf>, min_level: LevelFilter) -> Self {
        MopacParser {
            path: path.into(),
            diagnostics: Diagnostics::new(FORMAT, min_level),
        }
    }

    /// 读取并解析文件，文件句柄在返回前释放
    pub fn parse(&self) -> Result<QmResult> {
        let path_str = self.path.display().to_string();

        if !self.path.exists() {
            return Err(ReportError::FileNotFound { path: path_str });
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ReportError::FileReadError {
            path: path_str.clone(),
            source: e,
        })?;

        parse_mopac_content(&content, &path_str, &self.diagnostics)
    }
}

/// 一个坐标段
#[derive(Debug)]
struct Geometry {
    atomnos: Vec<u32>,
    coords: Vec<[f64; 3]>,
}

/// 从字符串内容解析 MOPAC 输出
pub fn parse_mopac_content(content: &str, name: &str, diag: &Diagnostics) -> Result<QmResult> {
    if !content.contains("MOPAC") {
        return Err(ReportError::UnsupportedFormat(format!(
            "{} is not a MOPAC output file",
            name
        )));
    }

    let lines: Vec<&str> = content.lines().collect();

    let mut program: Option<String> = None;
    let mut precise: Vec<Geometry> = Vec::new();
    let mut cartesian: Vec<Geometry> = Vec::new();
    let mut heats: Vec<f64> = Vec::new();
    let mut total_energy: Option<f64> = None;
    let mut molmass: Option<f64> = None;
    let mut vibfreqs: Option<Vec<f64>> = None;
    let mut rotcons: Vec<[f64; 3]> = Vec::new();
    let mut formula_atoms: Option<usize> = None;
    let mut terminated_normally = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if program.is_none() {
            if let Some(caps) = BANNER_RE.captures(line) {
                program = Some(caps[1].to_string());
            }
        }

        if is_precise_header(trimmed) {
            let (geom, next) = read_geometry(&lines, i + 1, name)?;
            match geom {
                Some(g) => {
                    diag.debug(format_args!(
                        "coordinate block with {} atoms at line {}",
                        g.atomnos.len(),
                        i + 1
                    ));
                    precise.push(g);
                }
                None => diag.warn(format_args!(
                    "empty coordinate block at line {}",
                    i + 1
                )),
            }
            i = next;
            continue;
        }

        if trimmed == "CARTESIAN COORDINATES" {
            let (geom, next) = read_geometry(&lines, i + 1, name)?;
            if let Some(g) = geom {
                diag.debug(format_args!(
                    "cartesian block with {} atoms at line {}",
                    g.atomnos.len(),
                    i + 1
                ));
                cartesian.push(g);
            }
            i = next;
            continue;
        }

        if let Some(caps) = HEAT_RE.captures(line) {
            match parse_fortran_f64(&caps[1]) {
                Some(v) => heats.push(v),
                None => diag.warn(format_args!(
                    "unreadable heat of formation at line {}: {}",
                    i + 1,
                    trimmed
                )),
            }
        } else if let Some(caps) = TOTAL_ENERGY_RE.captures(line) {
            if let Some(v) = parse_fortran_f64(&caps[1]) {
                total_energy = Some(units::ev_to_hartree(v));
            }
        } else if let Some(caps) = MOLWT_RE.captures(line) {
            match parse_fortran_f64(&caps[1]) {
                Some(v) => molmass = Some(v),
                None => diag.warn(format_args!(
                    "unreadable molecular weight at line {}: {}",
                    i + 1,
                    trimmed
                )),
            }
        } else if trimmed.starts_with("ROTATIONAL CONSTANTS IN CM(-1)") {
            match read_rotcons(&lines, i + 1) {
                Some(abc) => rotcons.push(abc),
                None => diag.warn(format_args!(
                    "rotational constants header without values at line {}",
                    i + 1
                )),
            }
        } else if trimmed.starts_with("DESCRIPTION OF VIBRATIONS") {
            diag.debug(format_args!("vibration section at line {}", i + 1));
            vibfreqs = Some(Vec::new());
        } else if is_vibration_header(trimmed) {
            match read_frequency(&lines, i + 1) {
                Some(f) => vibfreqs.get_or_insert_with(Vec::new).push(f),
                None => diag.warn(format_args!(
                    "vibration without frequency at line {}",
                    i + 1
                )),
            }
        } else if let Some(caps) = FORMULA_RE.captures(line) {
            formula_atoms = caps[1].parse().ok();
        } else if trimmed.contains("== MOPAC DONE ==") || trimmed.contains("ENDED NORMALLY") {
            terminated_normally = true;
        }

        i += 1;
    }

    let mut geometries = if precise.is_empty() {
        if !cartesian.is_empty() {
            diag.debug(format_args!("no precise coordinates, using CARTESIAN COORDINATES"));
        }
        cartesian
    } else {
        precise
    };
    let last = geometries.pop().ok_or_else(|| ReportError::ParseError {
        format: FORMAT.to_string(),
        path: name.to_string(),
        reason: "no atomic coordinates found".to_string(),
    })?;

    let mut result = QmResult::new(name, last.atomnos, last.coords);
    for g in &geometries {
        if g.coords.len() != result.natom {
            diag.warn(format_args!(
                "coordinate block with {} atoms differs from final geometry ({} atoms)",
                g.coords.len(),
                result.natom
            ));
        }
    }
    let mut atomcoords: Vec<Vec<[f64; 3]>> = geometries.into_iter().map(|g| g.coords).collect();
    atomcoords.append(&mut result.atomcoords);
    result.atomcoords = atomcoords;

    if let Some(n) = formula_atoms {
        if n != result.natom {
            diag.warn(format_args!(
                "empirical formula reports {} atoms but geometry has {}",
                n, result.natom
            ));
        }
    }

    if !terminated_normally {
        diag.warn(format_args!("{} did not terminate normally", name));
    }

    result.program = program;
    result.heat_of_formation = heats.last().copied();
    result.scfenergies = heats.into_iter().map(units::kcal_to_hartree).collect();
    result.total_energy = total_energy;
    result.molmass = molmass;
    result.vibfreqs = vibfreqs;
    result.rotcons = rotcons;
    result.terminated_normally = terminated_normally;

    diag.info(format_args!(
        "{}: {} ({} atoms, {} geometries, heat of formation {:?} kcal/mol, total energy {:?} Eh, {} frequencies, normal termination: {})",
        name,
        result.program.as_deref().unwrap_or("MOPAC"),
        result.natom,
        result.atomcoords.len(),
        result.heat_of_formation,
        result.total_energy,
        result.vibfreqs.as_ref().map(|v| v.len()).unwrap_or(0),
        result.terminated_normally,
    ));

    Ok(result)
}

/// `ATOM   CHEMICAL   X   Y   Z` 表头（排除内坐标表头）
fn is_precise_header(trimmed: &str) -> bool {
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    tokens.len() == 5 && tokens[..2] == ["ATOM", "CHEMICAL"] && tokens[2..] == ["X", "Y", "Z"]
}

/// `VIBRATION    1    1A1 ...`
fn is_vibration_header(trimmed: &str) -> bool {
    let mut tokens = trimmed.split_whitespace();
    tokens.next() == Some("VIBRATION")
        && tokens.next().map_or(false, |t| t.parse::<usize>().is_ok())
}

/// 从表头之后读取一个坐标段，返回坐标段和下一个未处理的行号
fn read_geometry(lines: &[&str], start: usize, name: &str) -> Result<(Option<Geometry>, usize)> {
    // 跳过单位行、列名行和空行
    let mut idx = start;
    let limit = (start + 4).min(lines.len());
    while idx < limit && !starts_with_index(lines[idx]) {
        idx += 1;
    }
    if idx >= limit {
        return Ok((None, start));
    }

    let mut atomnos = Vec::new();
    let mut coords = Vec::new();

    // 以序号开头的行都属于坐标段，读不出来就是错误
    while idx < lines.len() && starts_with_index(lines[idx]) {
        let line = lines[idx];
        idx += 1;

        let (symbol, xyz) = parse_row(line).ok_or_else(|| ReportError::ParseError {
            format: FORMAT.to_string(),
            path: name.to_string(),
            reason: format!("unreadable coordinate row at line {}: {}", idx, line.trim()),
        })?;

        if is_dummy(symbol) {
            continue;
        }
        let z = atomic_number(symbol).ok_or_else(|| ReportError::ParseError {
            format: FORMAT.to_string(),
            path: name.to_string(),
            reason: format!("unknown element '{}' at line {}", symbol, idx),
        })?;
        atomnos.push(z);
        coords.push(xyz);
    }

    if atomnos.is_empty() {
        return Ok((None, idx));
    }
    Ok((Some(Geometry { atomnos, coords }), idx))
}

/// 行首是否为原子序号
fn starts_with_index(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .map_or(false, |t| t.parse::<usize>().is_ok())
}

/// 解析坐标行 `1  O  x [*] y [*] z [*]`
fn parse_row(line: &str) -> Option<(&str, [f64; 3])> {
    let mut tokens = line.split_whitespace();
    tokens.next()?.parse::<usize>().ok()?;

    let raw = tokens.next()?;
    let symbol = if is_sparkle(raw) {
        raw
    } else {
        raw.find(|c: char| !c.is_ascii_alphabetic())
            .map_or(raw, |end| &raw[..end])
    };
    if symbol.is_empty() {
        return None;
    }

    let values: Vec<f64> = tokens.filter_map(parse_fortran_f64).take(3).collect();
    if values.len() < 3 {
        return None;
    }
    Some((symbol, [values[0], values[1], values[2]]))
}

/// 平移向量、虚原子和 sparkle (`+`, `++`, `-`, `--`)
fn is_dummy(symbol: &str) -> bool {
    symbol.eq_ignore_ascii_case("Tv")
        || symbol.eq_ignore_ascii_case("XX")
        || symbol == "X"
        || is_sparkle(symbol)
}

fn is_sparkle(symbol: &str) -> bool {
    !symbol.is_empty() && symbol.chars().all(|c| c == '+' || c == '-')
}

/// 在表头之后几行内寻找 `A = .. B = .. C = ..`
fn read_rotcons(lines: &[&str], start: usize) -> Option<[f64; 3]> {
    lines.iter().skip(start).take(3).find_map(|line| {
        let caps = ROTCON_RE.captures(line)?;
        Some([
            parse_fortran_f64(&caps[1])?,
            parse_fortran_f64(&caps[2])?,
            parse_fortran_f64(&caps[3])?,
        ])
    })
}

/// `VIBRATION` 之后的 `FREQ.` 行
fn read_frequency(lines: &[&str], start: usize) -> Option<f64> {
    lines
        .iter()
        .skip(start)
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .filter(|l| l.starts_with("FREQ."))
        .and_then(|l| l.split_whitespace().nth(1))
        .and_then(parse_fortran_f64)
}

/// 解析数值，兼容 Fortran 的 `D` 指数
fn parse_fortran_f64(s: &str) -> Option<f64> {
    s.trim().replace(['D', 'd'], "E").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: &str = r#"
 *******************************************************************************
 **                                                                           **
 **                               MOPAC2009                                   **
 **                                                                           **
 *******************************************************************************

                                PM3 CALCULATION RESULTS

 *  PRECISE    - CRITERIA TO BE INCREASED BY 100 TIMES
 *  FORCE      - FORCE CALCULATION SPECIFIED

          Empirical Formula: H2 O  =     3 atoms

       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1       O          0.00000000  *   0.00000000  *   0.00000000  *
         2       H          0.96000000  *   0.00000000  *   0.00000000  *
         3       H         -0.24000000  *   0.93000000  *   0.00000000  *

          FINAL HEAT OF FORMATION =        -50.01234 KCAL/MOL =    -209.25163 KJ/MOL

       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1       O          0.00000000  *   0.00000000  *   0.00000000  *
         2       H          0.95100000  *   0.00000000  *   0.00000000  *
         3       H         -0.23700000  *   0.92100000  *   0.00000000  *

          FINAL HEAT OF FORMATION =        -53.43264 KCAL/MOL =    -223.56214 KJ/MOL

          TOTAL ENERGY            =       -322.30845 EV
          MOLECULAR WEIGHT        =         18.0150

          ROTATIONAL CONSTANTS IN CM(-1)

          A =   27.24301480   B =   14.45176330   C =    9.44277500

           DESCRIPTION OF VIBRATIONS

 VIBRATION    1    1A1         ATOM PAIR        ENERGY CONTRIBUTION    RADIAL
 FREQ.      1669.46            H  2 --  H  3         +50.0% ( 50.0%)   100.0%
 T-DIPOLE    0.9811

 VIBRATION    2    2A1         ATOM PAIR        ENERGY CONTRIBUTION    RADIAL
 FREQ.      2858.15            O  1 --  H  2         +50.0% ( 50.0%)   100.0%

 VIBRATION    3    1B2         ATOM PAIR        ENERGY CONTRIBUTION    RADIAL
 FREQ.      2866.53            O  1 --  H  3         +50.0% ( 50.0%)   100.0%

          ROTATIONAL CONSTANTS IN CM(-1)

          A =   27.2430   B =   14.4518   C =    9.4428

 == MOPAC DONE ==
"#;

    fn parse(content: &str) -> Result<QmResult> {
        parse_mopac_content(content, "test.out", &Diagnostics::silent())
    }

    #[test]
    fn test_parse_water_optimization() {
        let r = parse(WATER).unwrap();

        assert_eq!(r.program.as_deref(), Some("MOPAC2009"));
        assert_eq!(r.natom, 3);
        assert_eq!(r.atomnos, vec![8, 1, 1]);
        assert_eq!(r.atomcoords.len(), 2);
        assert_eq!(r.last_coords().unwrap()[1], [0.951, 0.0, 0.0]);
        assert!(r.terminated_normally);
    }

    #[test]
    fn test_heat_of_formation_in_hartree() {
        let r = parse(WATER).unwrap();

        assert_eq!(r.scfenergies.len(), 2);
        assert!((r.last_scf_energy().unwrap() - (-0.0851503)).abs() < 1e-6);
        assert_eq!(r.heat_of_formation, Some(-53.43264));
        assert!((r.total_energy.unwrap() - (-11.8446198)).abs() < 1e-6);
    }

    #[test]
    fn test_mass_frequencies_rotcons() {
        let r = parse(WATER).unwrap();

        assert_eq!(r.molmass, Some(18.015));
        assert_eq!(r.vibfreqs().unwrap(), &[1669.46, 2858.15, 2866.53]);
        assert_eq!(r.rotcons.len(), 2);
        assert_eq!(r.last_rotcons().unwrap(), [27.243, 14.4518, 9.4428]);
    }

    #[test]
    fn test_single_atom_without_optimization_flags() {
        let content = r#"
 ** MOPAC 7.1 **
       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1       Ar         0.00000000      0.00000000      0.00000000

          FINAL HEAT OF FORMATION =          0.00000 KCAL/MOL =       0.00000 KJ/MOL
          MOLECULAR WEIGHT        =         39.9480
 == MOPAC DONE ==
"#;
        let r = parse(content).unwrap();
        assert_eq!(r.program.as_deref(), Some("MOPAC 7.1"));
        assert_eq!(r.natom, 1);
        assert_eq!(r.atomnos, vec![18]);
        assert_eq!(r.last_scf_energy().unwrap(), 0.0);
        assert!(r.vibfreqs.is_none());
        assert!(r.rotcons.is_empty());
    }

    #[test]
    fn test_cartesian_fallback() {
        let content = r#"
 MOPAC2016
                             CARTESIAN COORDINATES

   NO.       ATOM               X         Y         Z

     1         C          0.0000    0.0000    0.0000
     2         O          1.1300    0.0000    0.0000

          FINAL HEAT OF FORMATION =        -7.16000 KCAL/MOL
"#;
        let r = parse(content).unwrap();
        assert_eq!(r.atomnos, vec![6, 8]);
        assert_eq!(r.last_coords().unwrap()[1], [1.13, 0.0, 0.0]);
        assert!(!r.terminated_normally);
    }

    #[test]
    fn test_precise_block_preferred_over_cartesian() {
        let content = format!(
            "{}\n                             CARTESIAN COORDINATES\n\n   NO.       ATOM               X         Y         Z\n\n     1         O          9.0000    9.0000    9.0000\n",
            WATER
        );
        let r = parse(&content).unwrap();
        assert_eq!(r.natom, 3);
        assert_eq!(r.atomcoords.len(), 2);
    }

    #[test]
    fn test_translation_vectors_and_uppercase_symbols() {
        let content = r#"
 MOPAC2012
       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1       CL         0.00000000  *   0.00000000  *   0.00000000  *
         2       Cl         1.99000000  *   0.00000000  *   0.00000000  *
         3       Tv         5.00000000      0.00000000      0.00000000
"#;
        let r = parse(content).unwrap();
        assert_eq!(r.atomnos, vec![17, 17]);
        assert_eq!(r.natom, 2);
    }

    #[test]
    fn test_sparkles_are_skipped_without_truncating() {
        let content = r#"
 MOPAC2009
          Empirical Formula: H3 O  =     4 atoms

       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1       O          0.00000000  *   0.00000000  *   0.00000000  *
         2       +          2.00000000  *   0.00000000  *   0.00000000  *
         3       H          0.97000000  *   0.00000000  *   0.00000000  *
         4       H         -0.32000000  *   0.91000000  *   0.00000000  *
         5       H         -0.32000000  *  -0.45000000  *   0.79000000  *
         6       --         0.00000000      3.00000000      0.00000000
"#;
        let r = parse(content).unwrap();
        assert_eq!(r.atomnos, vec![8, 1, 1, 1]);
        assert_eq!(r.natom, 4);
        assert_eq!(r.last_coords().unwrap()[1], [0.97, 0.0, 0.0]);
    }

    #[test]
    fn test_unreadable_row_is_parse_error() {
        let content = r#"
 MOPAC2009
       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1       O          0.00000000  *   0.00000000  *   0.00000000  *
         2       H          0.95100000  *   *******
         3       H         -0.23700000  *   0.92100000  *   0.00000000  *
"#;
        let err = parse(content).unwrap_err();
        assert!(matches!(err, ReportError::ParseError { .. }));
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_empty_vibration_section() {
        let content = r#"
 MOPAC2009
       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1       H          0.00000000  *   0.00000000  *   0.00000000  *
         2       H          0.74000000  *   0.00000000  *   0.00000000  *

           DESCRIPTION OF VIBRATIONS

 == MOPAC DONE ==
"#;
        let r = parse(content).unwrap();
        assert_eq!(r.vibfreqs, Some(Vec::new()));
    }

    #[test]
    fn test_internal_coordinate_header_is_ignored() {
        assert!(!is_precise_header(
            "ATOM   CHEMICAL      BOND LENGTH      BOND ANGLE     TWIST ANGLE"
        ));
        assert!(is_precise_header("ATOM   CHEMICAL          X               Y               Z"));
    }

    #[test]
    fn test_unknown_element_is_parse_error() {
        let content = r#"
 MOPAC2009
       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1       Qq         0.00000000  *   0.00000000  *   0.00000000  *
"#;
        let err = parse(content).unwrap_err();
        assert!(matches!(err, ReportError::ParseError { .. }));
        assert!(err.to_string().contains("Qq"));
    }

    #[test]
    fn test_no_geometry_is_parse_error() {
        let content = " MOPAC2009\n          FINAL HEAT OF FORMATION =  -1.0 KCAL/MOL\n";
        let err = parse(content).unwrap_err();
        assert!(matches!(err, ReportError::ParseError { .. }));
    }

    #[test]
    fn test_non_mopac_is_unsupported() {
        let content = " Entering Gaussian System, Link 0=g09\n SCF Done:  E(RHF) =  -76.0107\n";
        let err = parse(content).unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_vibration_section_restarts() {
        let content = r#"
 MOPAC2009
       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1       H          0.00000000  *   0.00000000  *   0.00000000  *
         2       H          0.74000000  *   0.00000000  *   0.00000000  *

           DESCRIPTION OF VIBRATIONS

 VIBRATION    1    1SG         ATOM PAIR        ENERGY CONTRIBUTION    RADIAL
 FREQ.      4390.00            H  1 --  H  2        +100.0% (100.0%)   100.0%

           DESCRIPTION OF VIBRATIONS

 VIBRATION    1    1SG         ATOM PAIR        ENERGY CONTRIBUTION    RADIAL
 FREQ.      4395.50            H  1 --  H  2        +100.0% (100.0%)   100.0%
"#;
        let r = parse(content).unwrap();
        assert_eq!(r.vibfreqs().unwrap(), &[4395.5]);
    }

    #[test]
    fn test_parse_row() {
        let (sym, xyz) =
            parse_row("         2       H          0.95100000  *   0.00000000  *   0.00000000  *")
                .unwrap();
        assert_eq!(sym, "H");
        assert_eq!(xyz, [0.951, 0.0, 0.0]);

        assert_eq!(
            parse_row("     2       ++         1.0  *   2.0  *   3.0  *"),
            Some(("++", [1.0, 2.0, 3.0]))
        );
        assert!(parse_row("     2       +          1.0  *").is_none());
        assert!(parse_row("      NUMBER    SYMBOL      (ANGSTROMS)").is_none());
        assert!(parse_row("").is_none());
    }

    #[test]
    fn test_parse_fortran_f64() {
        assert_eq!(parse_fortran_f64("0.5D+02"), Some(50.0));
        assert_eq!(parse_fortran_f64("-1.25"), Some(-1.25));
        assert_eq!(parse_fortran_f64("*"), None);
    }

    #[test]
    fn test_parser_missing_file() {
        let parser = MopacParser::new("/nonexistent/dir/water.out", LevelFilter::Error);
        let err = parser.parse().unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
    }
}
