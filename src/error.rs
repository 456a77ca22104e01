//! # 统一错误处理模块
//!
//! 定义 mopac-report 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 解析失败：文件不存在、不可读、不是 MOPAC 输出或内容无法解释
//! - 属性缺失：解析结果中缺少报告需要的字段
//! - 输出错误：写标准输出失败
//!
//! 参数错误（未提供输入路径）由 `clap` 在此之前处理。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mopac-report 统一错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to write report: {0}")]
    OutputError(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 属性缺失
    // ─────────────────────────────────────────────────────────────
    #[error("Attribute '{attribute}' is not available in {path}")]
    AttributeUnavailable { attribute: String, path: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ReportError>;
