// crates/gf_foundation/src/lib.rs

//! gasfield Foundation Layer
//!
//! 基础层，提供整个工作区共享的错误类型。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型 `GfError` 与 `GfResult`
//!
//! # 示例
//!
//! ```
//! use gf_foundation::{ensure, GfError, GfResult};
//!
//! fn check_ppm(value: f64) -> GfResult<f64> {
//!     ensure!(value.is_finite(), GfError::invalid_input("浓度值必须为有限数"));
//!     Ok(value)
//! }
//!
//! assert!(check_ppm(12.0).is_ok());
//! assert!(check_ppm(f64::NAN).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{GfError, GfResult};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{GfError, GfResult};
    pub use crate::{ensure, require};
}
