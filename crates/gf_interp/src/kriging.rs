// crates/gf_interp/src/kriging.rs

//! 普通克里金 (Ordinary Kriging) 插值
//!
//! 地统计插值方法，提供最优线性无偏估计。
//!
//! # 算法原理
//!
//! 以协方差 C(h) = σ − γ(h) 构建带 Lagrange 乘子的 (N+1)×(N+1) 系统：
//!
//! $$
//! \begin{bmatrix} C_{11} & \cdots & C_{1n} & 1 \\
//!                 \vdots & \ddots & \vdots & \vdots \\
//!                 C_{n1} & \cdots & C_{nn} & 1 \\
//!                 1 & \cdots & 1 & 0 \end{bmatrix}
//! \begin{bmatrix} w_1 \\ \vdots \\ w_n \\ \mu \end{bmatrix} =
//! \begin{bmatrix} C_{10} \\ \vdots \\ C_{n0} \\ 1 \end{bmatrix}
//! $$
//!
//! 预测值 ẑ = Σ wᵢ·zᵢ，权重和为 1。
//!
//! # 回退
//!
//! 线性求解失败或预测值非有限时，改用 IDW（p = 2，1 m 捕捉半径）
//! 并记录一条警告。只要有至少一个已知点，回退路径就不会失败。
//!
//! # 示例
//!
//! ```
//! use gf_interp::prelude::*;
//!
//! let known = vec![
//!     KnownPoint::new(0.0, 0.0, 10.0),
//!     KnownPoint::new(0.0, 0.01, 30.0),
//!     KnownPoint::new(0.01, 0.0, 20.0),
//! ];
//! let kriging = OrdinaryKriging::default().tuned(&known);
//! let (estimate, variance) = kriging
//!     .interpolate_with_variance(&QueryPoint::new(0.005, 0.005), &known)
//!     .unwrap();
//! assert!(estimate.value >= 0.0);
//! assert!(variance >= 0.0);
//! ```

use gf_config::KrigingConfig;
use gf_geo::GeoBounds;
use nalgebra::{DMatrix, DVector};

use crate::estimator::{Estimate, EstimatePath, SpatialEstimator};
use crate::grid;
use crate::idw::InverseDistanceWeighting;
use crate::linalg::{solve_dense, LinalgError};
use crate::point::{GridNode, KnownPoint, QueryPoint};
use crate::tuning;
use crate::variogram::VariogramParameters;

/// 克里金权重
#[derive(Debug, Clone, PartialEq)]
pub struct KrigingWeights {
    /// 各已知点的权重（和为 1）
    pub weights: Vec<f64>,
    /// Lagrange 乘子 μ
    pub lagrange: f64,
}

impl KrigingWeights {
    /// 权重之和
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// 一次求解的中间结果
struct Solution {
    weights: KrigingWeights,
    /// 右端协方差 C(xᵢ, x₀)
    rhs: Vec<f64>,
    /// 未截断的预测值
    prediction: f64,
}

/// 普通克里金插值器
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrdinaryKriging {
    params: VariogramParameters,
    fallback: InverseDistanceWeighting,
}

impl OrdinaryKriging {
    /// 使用指定变异函数参数创建
    pub fn new(params: VariogramParameters) -> Self {
        Self {
            params,
            fallback: InverseDistanceWeighting::default(),
        }
    }

    /// 从克里金配置创建
    pub fn from_config(config: &KrigingConfig) -> Self {
        Self::new(VariogramParameters::from_config(config))
    }

    /// 获取变异函数参数
    #[inline]
    pub fn params(&self) -> VariogramParameters {
        self.params
    }

    /// 根据已知点自动调参，返回新的插值器
    ///
    /// 少于 2 个点时参数不变。
    #[must_use]
    pub fn tuned(&self, known: &[KnownPoint]) -> Self {
        Self {
            params: tuning::auto_adjust_parameters(self.params, known),
            fallback: self.fallback,
        }
    }

    /// 根据已知点原地自动调参
    pub fn auto_adjust_parameters(&mut self, known: &[KnownPoint]) {
        self.params = tuning::auto_adjust_parameters(self.params, known);
    }

    /// 求解克里金权重
    ///
    /// # Errors
    /// 已知点为空或线性求解失败时返回 [`LinalgError`]。
    pub fn weights(
        &self,
        query: &QueryPoint,
        known: &[KnownPoint],
    ) -> Result<KrigingWeights, LinalgError> {
        self.solve(query, known).map(|s| s.weights)
    }

    /// 插值并返回克里金方差
    ///
    /// 方差 σ² = σ − Σ wᵢ·Cᵢ₀ − μ，截断到 ≥ 0，可用于评估插值不确定性。
    /// 已知点为空或求解失败时返回 `None`（此时没有有意义的方差）。
    pub fn interpolate_with_variance(
        &self,
        query: &QueryPoint,
        known: &[KnownPoint],
    ) -> Option<(Estimate, f64)> {
        let solution = self.solve(query, known).ok()?;
        if !solution.prediction.is_finite() {
            return None;
        }

        let explained: f64 = solution
            .weights
            .weights
            .iter()
            .zip(&solution.rhs)
            .map(|(w, c)| w * c)
            .sum();
        let variance = (self.params.sill - explained - solution.weights.lagrange).max(0.0);

        Some((
            Estimate::new(solution.prediction, EstimatePath::Primary),
            variance,
        ))
    }

    /// 在规则网格上插值
    ///
    /// 见 [`grid::generate_interpolation_grid`]。
    pub fn generate_interpolation_grid(
        &self,
        bounds: &GeoBounds,
        known: &[KnownPoint],
        grid_size: usize,
    ) -> Vec<GridNode> {
        grid::generate_interpolation_grid(self, bounds, known, grid_size)
    }

    /// 构建并求解克里金系统
    fn solve(&self, query: &QueryPoint, known: &[KnownPoint]) -> Result<Solution, LinalgError> {
        let n = known.len();
        if n == 0 {
            return Err(LinalgError::Empty);
        }

        // 扩展矩阵：协方差块 + Lagrange 行/列
        let mut k = DMatrix::zeros(n + 1, n + 1);
        for i in 0..n {
            for j in 0..n {
                let h = known[i].distance_to_known(&known[j]);
                k[(i, j)] = self.params.covariance(h);
            }
            k[(i, n)] = 1.0;
            k[(n, i)] = 1.0;
        }

        let rhs: Vec<f64> = known
            .iter()
            .map(|p| self.params.covariance(p.distance_to(query)))
            .collect();
        let mut d = DVector::zeros(n + 1);
        for (i, c) in rhs.iter().enumerate() {
            d[i] = *c;
        }
        d[n] = 1.0;

        let x = solve_dense(&k, &d)?;

        let weights: Vec<f64> = x.iter().take(n).copied().collect();
        let prediction: f64 = weights
            .iter()
            .zip(known)
            .map(|(w, p)| w * p.value)
            .sum();

        Ok(Solution {
            weights: KrigingWeights {
                weights,
                lagrange: x[n],
            },
            rhs,
            prediction,
        })
    }
}

impl SpatialEstimator for OrdinaryKriging {
    fn name(&self) -> &'static str {
        "kriging"
    }

    fn estimate(&self, query: &QueryPoint, known: &[KnownPoint]) -> Option<Estimate> {
        match known {
            [] => None,
            [single] => Some(Estimate::passthrough(single)),
            _ => match self.solve(query, known) {
                Ok(solution) if solution.prediction.is_finite() => {
                    Some(Estimate::new(solution.prediction, EstimatePath::Primary))
                }
                Ok(solution) => {
                    tracing::warn!(
                        "克里金预测值非有限 ({})，使用 IDW 回退",
                        solution.prediction
                    );
                    self.fallback.fallback_estimate(query, known)
                }
                Err(err) => {
                    tracing::warn!("克里金求解失败，使用 IDW 回退: {}", err);
                    self.fallback.fallback_estimate(query, known)
                }
            },
        }
    }
}
