// crates/gf_geo/src/error.rs
//! 地理空间处理错误类型
//!
//! 包含坐标越界、范围框无效等错误。
//! 所有错误可转换为 `gf_foundation::GfError` 向上传播。

use gf_foundation::GfError;
use thiserror::Error;

/// Geo 模块结果类型
pub type GeoResult<T> = Result<T, GeoError>;

/// 地理空间处理错误
#[derive(Error, Debug)]
pub enum GeoError {
    /// 坐标超出有效范围
    #[error("{coord_type} 超出范围: {value:.6} (允许范围: {min} 到 {max})")]
    CoordinateOutOfRange {
        /// 坐标类型（如"纬度"、"经度"）
        coord_type: &'static str,
        /// 实际值
        value: f64,
        /// 最小允许值
        min: f64,
        /// 最大允许值
        max: f64,
    },

    /// 范围框无效
    #[error("无效的范围框: {message}")]
    InvalidBounds {
        /// 失败原因
        message: String,
    },
}

// ============================================================================
// 转换实现
// ============================================================================

impl From<GeoError> for GfError {
    fn from(err: GeoError) -> Self {
        match err {
            GeoError::CoordinateOutOfRange {
                coord_type,
                value,
                min,
                max,
            } => GfError::out_of_range(coord_type, value, min, max),
            GeoError::InvalidBounds { message } => {
                GfError::invalid_input(format!("无效的范围框: {message}"))
            }
        }
    }
}

// ============================================================================
// 便捷构造函数
// ============================================================================

impl GeoError {
    /// 创建坐标越界错误
    #[inline]
    pub fn coordinate_out_of_range(
        coord_type: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Self {
        Self::CoordinateOutOfRange {
            coord_type,
            value,
            min,
            max,
        }
    }

    /// 创建范围框无效错误
    #[inline]
    pub fn invalid_bounds(message: impl Into<String>) -> Self {
        Self::InvalidBounds {
            message: message.into(),
        }
    }

    /// 验证坐标范围（NaN 视为越界）
    ///
    /// # Errors
    /// 值不在 `[min, max]` 内时返回 [`GeoError::CoordinateOutOfRange`]。
    #[inline]
    pub fn check_coordinate(
        coord_type: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::coordinate_out_of_range(coord_type, value, min, max))
        }
    }
}
