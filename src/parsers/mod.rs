//! # 解析器模块
//!
//! 提供量子化学输出文件的解析器。目前只支持 MOPAC。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: mopac_out

pub mod mopac_out;

pub use mopac_out::MopacParser;
