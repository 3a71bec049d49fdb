// crates/gf_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `GfError` 枚举和 `GfResult` 类型别名。各上层 crate（`gf_geo`、
//! `gf_config`、`gf_interp`）定义自己的错误枚举，并可转换为 `GfError` 向上传播。
//!
//! # 示例
//!
//! ```
//! use gf_foundation::error::{GfError, GfResult};
//!
//! fn require_points(n: usize) -> GfResult<()> {
//!     if n == 0 {
//!         return Err(GfError::insufficient_data("插值", 1, n));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_points(0).is_err());
//! ```

use thiserror::Error;

/// 统一结果类型
pub type GfResult<T> = Result<T, GfError>;

/// gasfield 错误类型
#[derive(Error, Debug)]
pub enum GfError {
    // ========================================================================
    // IO 相关错误
    // ========================================================================
    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        #[source]
        /// 可选的底层 IO 错误
        source: Option<std::io::Error>,
    },

    // ========================================================================
    // 数据错误
    // ========================================================================
    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 数据超出范围
    #[error("数据超出范围: {field}={value}, 期望范围=[{min}, {max}]")]
    OutOfRange {
        /// 字段名
        field: &'static str,
        /// 实际值
        value: f64,
        /// 最小允许值
        min: f64,
        /// 最大允许值
        max: f64,
    },

    /// 数据不足
    #[error("数据不足: {operation} 至少需要 {required} 个点, 实际 {actual} 个")]
    InsufficientData {
        /// 操作名称
        operation: &'static str,
        /// 需要的最少点数
        required: usize,
        /// 实际点数
        actual: usize,
    },

    // ========================================================================
    // 配置错误
    // ========================================================================
    /// 配置值无效
    #[error("配置值无效: {key}={value}, 原因: {reason}")]
    InvalidConfig {
        /// 配置键名
        key: String,
        /// 配置值
        value: String,
        /// 无效原因说明
        reason: String,
    },

    /// 序列化错误
    #[error("序列化错误: {message}")]
    Serialization {
        /// 序列化失败原因
        message: String,
    },

    // ========================================================================
    // 计算错误
    // ========================================================================
    /// 数值计算失败
    #[error("数值计算失败: {operation} - {message}")]
    Numerical {
        /// 计算类型
        operation: &'static str,
        /// 失败原因
        message: String,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl GfError {
    /// 从IO错误创建（带源）
    pub fn io_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 数据超出范围
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// 数据不足
    pub fn insufficient_data(operation: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            operation,
            required,
            actual,
        }
    }

    /// 配置值无效
    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// 序列化错误
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// 数值计算失败
    pub fn numerical(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Numerical {
            operation,
            message: message.into(),
        }
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl GfError {
    /// 检查值是否为有限数
    #[inline]
    pub fn check_finite(field: &'static str, value: f64) -> GfResult<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::invalid_input(format!("{field} 必须为有限数, 实际为 {value}")))
        }
    }
}

// ========================================================================
// 标准库错误转换
// ========================================================================

impl From<std::io::Error> for GfError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

// ========================================================================
// 宏
// ========================================================================

/// 条件不满足时提前返回错误
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

/// 解包 `Option`，为 `None` 时提前返回错误
#[macro_export]
macro_rules! require {
    ($opt:expr, $err:expr $(,)?) => {
        match $opt {
            Some(v) => v,
            None => return Err($err.into()),
        }
    };
}

// ========================================================================
// 测试
// ========================================================================
