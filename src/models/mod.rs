//! # 数据模型模块
//!
//! 定义解析结果和元素数据。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: calculation, element

pub mod calculation;
pub mod element;

pub use calculation::QmResult;
