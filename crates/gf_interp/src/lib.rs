// crates/gf_interp/src/lib.rs

//! 气体浓度空间插值引擎
//!
//! 根据稀疏的点传感器观测估算未监测位置的浓度（ppm）。
//! 每次调用都是纯函数：已知点 → 查询点估计值，跨调用不保留任何状态。
//!
//! # 模块
//!
//! - [`kriging`]: 普通克里金（含 IDW 回退）
//! - [`rbf`]: 薄板样条径向基函数
//! - [`knn`]: K 近邻距离加权
//! - [`idw`]: 反距离加权（数值失败时的回退）
//! - [`variogram`]: 变异函数模型
//! - [`linalg`]: 小规模稠密线性求解
//! - [`tuning`]: 变异函数参数自动调整
//! - [`grid`]: 规则经纬度网格采样
//! - [`validation`]: 留一法交叉验证
//! - [`exposure`]: CO 暴露等级
//! - [`engine`]: 按配置选择插值器、命名目标点批量插值
//!
//! # 选择指南
//!
//! | 方法 | 计算复杂度 | 光滑性 | 适用场景 |
//! |------|----------|--------|---------|
//! | Kriging | O(n³) | 高 | 默认方法，参数随数据自动调整 |
//! | Thin-plate spline | O(n³) | 高 | 需要精确通过观测点 |
//! | KNN | O(n log n) | 低 | 快速估算、不涉及线性求解 |
//!
//! # 示例
//!
//! ```
//! use gf_interp::prelude::*;
//!
//! let known = vec![
//!     KnownPoint::new(-7.7673, 110.3746, 12.0),
//!     KnownPoint::new(-7.7693, 110.3802, 20.0),
//!     KnownPoint::new(-7.7733, 110.3778, 8.0),
//! ];
//! let query = QueryPoint::new(-7.7700, 110.3770);
//!
//! let kriging = OrdinaryKriging::default().tuned(&known);
//! let value = kriging.interpolate(&query, &known).unwrap();
//! assert!(value >= 0.0);
//!
//! assert!(KnnRegressor::default().interpolate(&query, &[]).is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod estimator;
pub mod exposure;
pub mod grid;
pub mod idw;
pub mod knn;
pub mod kriging;
pub mod linalg;
pub mod point;
pub mod rbf;
pub mod tuning;
pub mod validation;
pub mod variogram;

/// 预导入模块
pub mod prelude {
    pub use crate::engine::{interpolate_targets, Interpolator, TargetEstimate};
    pub use crate::estimator::{Estimate, EstimatePath, SpatialEstimator};
    pub use crate::exposure::ExposureLevel;
    pub use crate::grid::generate_interpolation_grid;
    pub use crate::idw::InverseDistanceWeighting;
    pub use crate::knn::KnnRegressor;
    pub use crate::kriging::{KrigingWeights, OrdinaryKriging};
    pub use crate::point::{GridNode, KnownPoint, NamedTarget, QueryPoint};
    pub use crate::rbf::ThinPlateSpline;
    pub use crate::validation::{cross_validate, CrossValidationReport};
    pub use crate::variogram::{VariogramModel, VariogramParameters};
}

// 重导出常用类型
pub use engine::{interpolate_targets, Interpolator, TargetEstimate};
pub use estimator::{Estimate, EstimatePath, SpatialEstimator};
pub use exposure::ExposureLevel;
pub use grid::generate_interpolation_grid;
pub use idw::InverseDistanceWeighting;
pub use knn::KnnRegressor;
pub use kriging::{KrigingWeights, OrdinaryKriging};
pub use linalg::{solve_dense, LinalgError};
pub use point::{sanitize_known_points, GridNode, KnownPoint, NamedTarget, QueryPoint};
pub use rbf::ThinPlateSpline;
pub use validation::{cross_validate, CrossValidationReport};
pub use variogram::{VariogramModel, VariogramParameters};
