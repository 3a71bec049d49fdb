// crates/gf_interp/src/estimator.rs

//! 插值器公共接口
//!
//! 所有插值器实现 [`SpatialEstimator`]：给定已知点列表，估计查询点处的值。
//!
//! 约定：
//! - 0 个已知点 → `None`（无估计）
//! - 1 个已知点 → 直接返回该点的值
//! - 返回值始终截断到 ≥ 0（浓度不能为负），未截断的原始值保留在
//!   [`Estimate::raw`] 中用于诊断

use serde::{Deserialize, Serialize};

use crate::point::{KnownPoint, QueryPoint};

/// 截断到非负
///
/// NaN 也会变为 0。
#[inline]
pub fn clamp_non_negative(value: f64) -> f64 {
    value.max(0.0)
}

/// 估计值的计算路径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatePath {
    /// 只有一个已知点，直接透传
    Passthrough,
    /// 插值器的主算法
    Primary,
    /// 线性求解失败，使用反距离加权回退
    IdwFallback,
}

/// 带诊断信息的估计值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// 截断后的估计值（≥ 0）
    pub value: f64,
    /// 截断前的原始值
    pub raw: f64,
    /// 计算路径
    pub path: EstimatePath,
}

impl Estimate {
    /// 由原始值创建，自动截断
    #[inline]
    pub fn new(raw: f64, path: EstimatePath) -> Self {
        Self {
            value: clamp_non_negative(raw),
            raw,
            path,
        }
    }

    /// 单点透传
    #[inline]
    pub fn passthrough(point: &KnownPoint) -> Self {
        Self::new(point.value, EstimatePath::Passthrough)
    }

    /// 原始值是否被截断
    #[inline]
    pub fn was_clamped(&self) -> bool {
        self.raw < 0.0 || self.raw.is_nan()
    }

    /// 是否走了回退路径
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.path == EstimatePath::IdwFallback
    }
}

/// 空间插值器
pub trait SpatialEstimator {
    /// 插值器名称
    fn name(&self) -> &'static str;

    /// 估计查询点处的值（带诊断信息）
    ///
    /// 已知点为空时返回 `None`。
    fn estimate(&self, query: &QueryPoint, known: &[KnownPoint]) -> Option<Estimate>;

    /// 估计查询点处的值（≥ 0）
    fn interpolate(&self, query: &QueryPoint, known: &[KnownPoint]) -> Option<f64> {
        self.estimate(query, known).map(|e| e.value)
    }

    /// 批量插值
    fn interpolate_batch(&self, queries: &[QueryPoint], known: &[KnownPoint]) -> Vec<Option<f64>> {
        queries.iter().map(|q| self.interpolate(q, known)).collect()
    }
}

impl<E: SpatialEstimator + ?Sized> SpatialEstimator for &E {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn estimate(&self, query: &QueryPoint, known: &[KnownPoint]) -> Option<Estimate> {
        (**self).estimate(query, known)
    }
}
