// crates/gf_geo/src/lib.rs
//! gasfield 地理空间模块
//!
//! 提供经纬度点、Haversine 大圆距离和经纬度范围框。
//!
//! # 模块
//!
//! - `geometry`: 经纬度点 [`GeoPoint`] 与大圆距离
//! - `bounds`: 经纬度范围框 [`GeoBounds`]
//! - `error`: 地理错误类型
//!
//! # 示例
//!
//! ```
//! use gf_geo::prelude::*;
//!
//! let a = GeoPoint::new(0.0, 0.0);
//! let b = GeoPoint::new(0.0, 1.0);
//! let d = a.haversine_distance_to(&b); // 约 111.2 km
//! assert!((d - 111_195.0).abs() < 10.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod bounds;
pub mod error;
pub mod geometry;

/// 预导入模块
pub mod prelude {
    pub use crate::bounds::GeoBounds;
    pub use crate::error::{GeoError, GeoResult};
    pub use crate::geometry::{haversine_distance, GeoPoint, EARTH_RADIUS};
}

// 重导出常用类型
pub use bounds::GeoBounds;
pub use error::{GeoError, GeoResult};
pub use geometry::{haversine_distance, GeoPoint, EARTH_RADIUS};
