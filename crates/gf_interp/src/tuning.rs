// crates/gf_interp/src/tuning.rs

//! 变异函数参数自动调整
//!
//! 根据已知点的统计特征估计克里金参数：
//! - 变程 r = 0.7 × 平均两两大圆距离
//! - 基台值 σ = max(0.1, 观测值总体方差)
//!
//! 块金值和模型类型保持不变。少于 2 个点时不调整。

use crate::point::KnownPoint;
use crate::variogram::VariogramParameters;

/// 变程相对平均距离的比例
pub const RANGE_FACTOR: f64 = 0.7;

/// 基台值下限
pub const MIN_SILL: f64 = 0.1;

/// 平均两两大圆距离 [m]
///
/// 少于 2 个点时返回 `None`。
pub fn mean_pairwise_distance(known: &[KnownPoint]) -> Option<f64> {
    let n = known.len();
    if n < 2 {
        return None;
    }

    let mut total = 0.0;
    for (i, a) in known.iter().enumerate() {
        for b in &known[i + 1..] {
            total += a.distance_to_known(b);
        }
    }
    let pairs = n * (n - 1) / 2;
    Some(total / pairs as f64)
}

/// 观测值总体方差（除以 n）
///
/// 点集为空时返回 `None`。
pub fn population_variance(known: &[KnownPoint]) -> Option<f64> {
    if known.is_empty() {
        return None;
    }
    let n = known.len() as f64;
    let mean = known.iter().map(|p| p.value).sum::<f64>() / n;
    let variance = known.iter().map(|p| (p.value - mean).powi(2)).sum::<f64>() / n;
    Some(variance)
}

/// 根据已知点调整变异函数参数，返回新参数
///
/// 所有点重合时变程为 0，此时 γ(h > 0) = η + σ。
/// 平均距离非有限时保留原变程。
pub fn auto_adjust_parameters(
    params: VariogramParameters,
    known: &[KnownPoint],
) -> VariogramParameters {
    let Some(mean_distance) = mean_pairwise_distance(known) else {
        return params;
    };

    let mut tuned = params;
    if mean_distance.is_finite() {
        tuned.range = RANGE_FACTOR * mean_distance;
    }
    if let Some(variance) = population_variance(known) {
        tuned.sill = variance.max(MIN_SILL);
    }

    tracing::debug!(
        "变异函数自动调参: n={}, range={:.1} m, sill={:.4}",
        known.len(),
        tuned.range,
        tuned.sill
    );
    tuned
}
