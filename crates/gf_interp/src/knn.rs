// crates/gf_interp/src/knn.rs

//! K 近邻距离加权插值
//!
//! 按距离升序（稳定排序）取最近的 min(k, n) 个点，
//! 权重 w = 1 / max(d, 1e-6)ᵖ；p = 0 时为简单平均。
//! 不涉及线性求解，不会失败。
//!
//! 实际计算时权重统一乘以 max(d_min, 1e-6)ᵖ，即 w = (d_min / d)ᵖ，
//! 最近点权重恒为 1，大指数下不会全部下溢为 0。

use gf_config::KnnConfig;
use serde::{Deserialize, Serialize};

use crate::estimator::{Estimate, EstimatePath, SpatialEstimator};
use crate::point::{KnownPoint, QueryPoint};

/// 距离下限 [m]
const MIN_DISTANCE: f64 = 1e-6;

/// K 近邻插值器
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnnRegressor {
    /// 近邻数量（≥ 1）
    pub k: usize,
    /// 距离指数（0 表示不加权）
    pub power: f64,
}

impl Default for KnnRegressor {
    fn default() -> Self {
        Self { k: 3, power: 1.0 }
    }
}

impl KnnRegressor {
    /// 创建 KNN 插值器
    ///
    /// `k = 0` 按 1 处理。
    pub fn new(k: usize, power: f64) -> Self {
        Self { k: k.max(1), power }
    }

    /// 从配置创建
    pub fn from_config(config: &KnnConfig) -> Self {
        Self::new(config.k, config.power)
    }

    /// 相对最近距离归一化的权重，取值 (0, 1]
    fn weight(&self, distance: f64, nearest: f64) -> f64 {
        if self.power > 0.0 {
            (nearest.max(MIN_DISTANCE) / distance.max(MIN_DISTANCE)).powf(self.power)
        } else {
            1.0
        }
    }
}

impl SpatialEstimator for KnnRegressor {
    fn name(&self) -> &'static str {
        "knn"
    }

    fn estimate(&self, query: &QueryPoint, known: &[KnownPoint]) -> Option<Estimate> {
        match known {
            [] => None,
            [single] => Some(Estimate::passthrough(single)),
            _ => {
                let mut neighbors: Vec<(f64, f64)> = known
                    .iter()
                    .map(|p| (p.distance_to(query), p.value))
                    .collect();
                neighbors.sort_by(|a, b| a.0.total_cmp(&b.0));

                let k = self.k.max(1).min(neighbors.len());
                let nearest = neighbors[0].0;
                let (num, den) = neighbors[..k]
                    .iter()
                    .fold((0.0, 0.0), |(num, den), &(d, v)| {
                        let w = self.weight(d, nearest);
                        (num + w * v, den + w)
                    });

                Some(Estimate::new(num / den, EstimatePath::Primary))
            }
        }
    }
}
