// crates/gf_interp/src/validation.rs

//! 留一法交叉验证
//!
//! 依次移除每个已知点，用其余点估计该位置，统计估计误差。
//! 用于比较不同插值方法或参数在当前传感器布局下的表现。

use serde::{Deserialize, Serialize};

use crate::estimator::SpatialEstimator;
use crate::point::KnownPoint;

/// 交叉验证结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossValidationReport {
    /// 参与评估的点数
    pub n_evaluated: usize,
    /// 均方根误差
    pub rmse: f64,
    /// 平均绝对误差
    pub mae: f64,
    /// 最大绝对误差
    pub max_abs_error: f64,
}

/// 留一法交叉验证
///
/// 少于 2 个已知点时返回 `None`。
pub fn cross_validate<E>(estimator: &E, known: &[KnownPoint]) -> Option<CrossValidationReport>
where
    E: SpatialEstimator + ?Sized,
{
    if known.len() < 2 {
        return None;
    }

    let mut sum_sq_error = 0.0;
    let mut sum_abs_error = 0.0;
    let mut max_abs_error: f64 = 0.0;
    let mut count: usize = 0;

    let mut rest = Vec::with_capacity(known.len() - 1);
    for (i, held_out) in known.iter().enumerate() {
        rest.clear();
        rest.extend_from_slice(&known[..i]);
        rest.extend_from_slice(&known[i + 1..]);

        if let Some(predicted) = estimator.interpolate(&held_out.position(), &rest) {
            let error = (predicted - held_out.value).abs();
            sum_sq_error += error * error;
            sum_abs_error += error;
            max_abs_error = max_abs_error.max(error);
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let report = CrossValidationReport {
        n_evaluated: count,
        rmse: (sum_sq_error / count as f64).sqrt(),
        mae: sum_abs_error / count as f64,
        max_abs_error,
    };
    tracing::debug!(
        "{} 交叉验证: n={}, rmse={:.4}, mae={:.4}, max={:.4}",
        estimator.name(),
        report.n_evaluated,
        report.rmse,
        report.mae,
        report.max_abs_error
    );
    Some(report)
}
