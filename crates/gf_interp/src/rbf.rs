// crates/gf_interp/src/rbf.rs

//! 薄板样条径向基函数 (Thin-Plate Spline RBF) 插值
//!
//! 核函数 φ(r) = r²·ln(r)，r 下限为 ε 以避免 ln(0)。
//! 求解带 Tikhonov 正则化的系统：
//!
//! K·w = z，Kᵢⱼ = φ(dᵢⱼ) + λ·δᵢⱼ
//!
//! 预测值 ẑ(x) = Σ wᵢ·φ(d(x, xᵢ))。不含多项式项。
//! 求解失败时与克里金相同地回退到 IDW。

use gf_config::RbfConfig;
use nalgebra::{DMatrix, DVector};

use crate::estimator::{Estimate, EstimatePath, SpatialEstimator};
use crate::idw::InverseDistanceWeighting;
use crate::linalg::{solve_dense, LinalgError};
use crate::point::{KnownPoint, QueryPoint};

/// 薄板样条插值器
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThinPlateSpline {
    /// 正则化系数 λ
    pub lambda: f64,
    /// 距离下限 ε [m]
    pub epsilon: f64,
    fallback: InverseDistanceWeighting,
}

impl Default for ThinPlateSpline {
    fn default() -> Self {
        Self::new(1e-6)
    }
}

impl ThinPlateSpline {
    /// 使用指定正则化系数创建
    pub fn new(lambda: f64) -> Self {
        Self {
            lambda,
            epsilon: 1e-12,
            fallback: InverseDistanceWeighting::default(),
        }
    }

    /// 从配置创建
    pub fn from_config(config: &RbfConfig) -> Self {
        Self {
            epsilon: config.epsilon,
            ..Self::new(config.lambda)
        }
    }

    /// 核函数 φ(r) = r²·ln(r)
    #[inline]
    pub fn phi(&self, r: f64) -> f64 {
        let rr = r.max(self.epsilon);
        rr * rr * rr.ln()
    }

    /// 求解 RBF 权重
    ///
    /// # Errors
    /// 已知点为空或线性求解失败时返回 [`LinalgError`]。
    pub fn weights(&self, known: &[KnownPoint]) -> Result<Vec<f64>, LinalgError> {
        let n = known.len();
        let mut k = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let d = known[i].distance_to_known(&known[j]);
                k[(i, j)] = self.phi(d) + if i == j { self.lambda } else { 0.0 };
            }
        }
        let values = DVector::from_iterator(n, known.iter().map(|p| p.value));

        solve_dense(&k, &values).map(|w| w.iter().copied().collect())
    }

    fn predict(&self, query: &QueryPoint, known: &[KnownPoint]) -> Result<f64, LinalgError> {
        let w = self.weights(known)?;
        Ok(w
            .iter()
            .zip(known)
            .map(|(wi, p)| wi * self.phi(p.distance_to(query)))
            .sum())
    }
}

impl SpatialEstimator for ThinPlateSpline {
    fn name(&self) -> &'static str {
        "thin_plate_spline"
    }

    fn estimate(&self, query: &QueryPoint, known: &[KnownPoint]) -> Option<Estimate> {
        match known {
            [] => None,
            [single] => Some(Estimate::passthrough(single)),
            _ => match self.predict(query, known) {
                Ok(raw) if raw.is_finite() => Some(Estimate::new(raw, EstimatePath::Primary)),
                Ok(raw) => {
                    tracing::warn!("薄板样条预测值非有限 ({})，使用 IDW 回退", raw);
                    self.fallback.fallback_estimate(query, known)
                }
                Err(err) => {
                    tracing::warn!("薄板样条求解失败，使用 IDW 回退: {}", err);
                    self.fallback.fallback_estimate(query, known)
                }
            },
        }
    }
}
