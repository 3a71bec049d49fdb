// crates/gf_interp/src/idw.rs

//! IDW (Inverse Distance Weighting) 插值
//!
//! 克里金和薄板样条在线性求解失败时的回退方法。
//!
//! 权重 wᵢ = 1 / dᵢᵖ（默认 p = 2），结果为加权平均：
//!
//! $$
//! z(x) = \frac{\sum_{i} w_i \cdot z_i}{\sum_{i} w_i}
//! $$
//!
//! 查询点与某个已知点的距离小于捕捉半径（默认 1 m）时直接返回该点的值，
//! 按已知点顺序取第一个满足条件的点。

use serde::{Deserialize, Serialize};

use crate::estimator::{Estimate, EstimatePath, SpatialEstimator};
use crate::point::{KnownPoint, QueryPoint};

/// IDW 插值器
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InverseDistanceWeighting {
    /// 距离指数 p
    pub power: f64,
    /// 捕捉半径 [m]
    pub snap_distance: f64,
}

impl Default for InverseDistanceWeighting {
    fn default() -> Self {
        Self {
            power: 2.0,
            snap_distance: 1.0,
        }
    }
}

impl InverseDistanceWeighting {
    /// 创建 IDW 插值器
    pub const fn new(power: f64, snap_distance: f64) -> Self {
        Self {
            power,
            snap_distance,
        }
    }

    /// 设置距离指数
    #[must_use]
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// 计算未截断的加权平均
    ///
    /// 已知点为空时返回 `None`；权重和不为正（例如距离全为无穷）时返回 0。
    pub fn weighted_value(&self, query: &QueryPoint, known: &[KnownPoint]) -> Option<f64> {
        if known.is_empty() {
            return None;
        }

        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        for point in known {
            let distance = point.distance_to(query);
            if distance < self.snap_distance {
                return Some(point.value);
            }
            let weight = 1.0 / distance.powf(self.power);
            weighted_sum += weight * point.value;
            weight_sum += weight;
        }

        if weight_sum > 0.0 {
            Some(weighted_sum / weight_sum)
        } else {
            Some(0.0)
        }
    }

    /// 作为其他插值器的回退路径进行估计
    pub(crate) fn fallback_estimate(
        &self,
        query: &QueryPoint,
        known: &[KnownPoint],
    ) -> Option<Estimate> {
        self.weighted_value(query, known)
            .map(|raw| Estimate::new(raw, EstimatePath::IdwFallback))
    }
}

impl SpatialEstimator for InverseDistanceWeighting {
    fn name(&self) -> &'static str {
        "idw"
    }

    fn estimate(&self, query: &QueryPoint, known: &[KnownPoint]) -> Option<Estimate> {
        match known {
            [] => None,
            [single] => Some(Estimate::passthrough(single)),
            _ => self
                .weighted_value(query, known)
                .map(|raw| Estimate::new(raw, EstimatePath::Primary)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_points() -> Vec<KnownPoint> {
        vec![KnownPoint::new(0.0, 0.0, 10.0), KnownPoint::new(0.0, 1.0, 30.0)]
    }

    #[test]
    fn test_idw_midpoint_is_mean() {
        let idw = InverseDistanceWeighting::default();
        let v = idw.interpolate(&QueryPoint::new(0.0, 0.5), &two_points()).unwrap();
        assert!((v - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_idw_closer_point_dominates() {
        let idw = InverseDistanceWeighting::default();
        let v = idw.interpolate(&QueryPoint::new(0.0, 0.1), &two_points()).unwrap();
        // 距离比 1:9，权重比 81:1
        let expected = (81.0 * 10.0 + 30.0) / 82.0;
        assert!((v - expected).abs() < 1e-6);
    }

    #[test]
    fn test_idw_snap_returns_first_close_point() {
        let known = vec![
            KnownPoint::new(0.0, 0.0, 5.0),
            KnownPoint::new(0.0, 0.000_001, 7.0),
            KnownPoint::new(1.0, 1.0, 100.0),
        ];
        let idw = InverseDistanceWeighting::default();
        let v = idw.weighted_value(&QueryPoint::new(0.0, 0.000_000_5), &known);
        assert_eq!(v, Some(5.0));
    }

    #[test]
    fn test_idw_power_one() {
        let idw = InverseDistanceWeighting::default().with_power(1.0);
        let v = idw.interpolate(&QueryPoint::new(0.0, 0.25), &two_points()).unwrap();
        // 距离比 1:3，权重比 3:1
        assert!((v - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_idw_empty_and_single() {
        let idw = InverseDistanceWeighting::default();
        let q = QueryPoint::new(0.0, 0.0);
        assert!(idw.estimate(&q, &[]).is_none());
        assert!(idw.fallback_estimate(&q, &[]).is_none());

        let e = idw.estimate(&q, &[KnownPoint::new(5.0, 5.0, 3.0)]).unwrap();
        assert_eq!(e.value, 3.0);
        assert_eq!(e.path, EstimatePath::Passthrough);
    }

    #[test]
    fn test_fallback_path_is_marked() {
        let idw = InverseDistanceWeighting::default();
        let e = idw
            .fallback_estimate(&QueryPoint::new(0.0, 0.5), &two_points())
            .unwrap();
        assert_eq!(e.path, EstimatePath::IdwFallback);
        assert!((e.value - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_idw_negative_values_clamped() {
        let known = vec![KnownPoint::new(0.0, 0.0, -10.0), KnownPoint::new(0.0, 1.0, -30.0)];
        let e = InverseDistanceWeighting::default()
            .estimate(&QueryPoint::new(0.0, 0.5), &known)
            .unwrap();
        assert_eq!(e.value, 0.0);
        assert!((e.raw + 20.0).abs() < 1e-9);
    }
}
