// crates/gf_config/src/lib.rs

//! gasfield Config Layer (Layer 3)
//!
//! 配置层，提供插值方法选择和各插值器的可调参数。
//! 本层只包含纯数据结构（全 f64），算法实现位于 `gf_interp`。
//!
//! # 模块概览
//!
//! - [`engine_config`]: `EngineConfig` 引擎配置及各子配置
//! - [`error`]: 配置错误类型
//!
//! # 层级架构
//!
//! ```text
//! Layer 5: gf_cli        ─> EngineConfig::from_file
//! Layer 4: gf_interp     ─> 由 EngineConfig 构建插值器
//! Layer 3: gf_config     ─> EngineConfig, InterpolationMethod, VariogramModel (本层)
//! Layer 2: gf_geo
//! Layer 1: gf_foundation
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine_config;
pub mod error;

/// 层级标识
pub const LAYER: u8 = 3;

// 重导出核心类型
pub use engine_config::{
    EngineConfig, GridConfig, InterpolationMethod, KnnConfig, KrigingConfig, RbfConfig,
    VariogramModel,
};
pub use error::ConfigError;
