// crates/gf_interp/src/grid.rs

//! 规则经纬度网格采样
//!
//! 在 (grid_size + 1)² 个节点上运行插值器，用于热力图等可视化。
//! 行 i 从南到北，列 j 从西到东，最后一行/列精确落在北/东边界上。
//! 没有估计值的节点被省略。

use gf_geo::GeoBounds;

use crate::estimator::SpatialEstimator;
use crate::point::{GridNode, KnownPoint, QueryPoint};

/// 第 `index` 个网格坐标，末端精确等于 `end`
#[inline]
fn axis_coordinate(start: f64, end: f64, index: usize, grid_size: usize) -> f64 {
    if index == grid_size && grid_size > 0 {
        end
    } else if grid_size == 0 {
        start
    } else {
        start + index as f64 * (end - start) / grid_size as f64
    }
}

/// 网格节点坐标（行主序，南→北，西→东）
fn node_positions(bounds: &GeoBounds, grid_size: usize) -> Vec<QueryPoint> {
    let n = grid_size + 1;
    let mut positions = Vec::with_capacity(n * n);
    for i in 0..n {
        let lat = axis_coordinate(bounds.south, bounds.north, i, grid_size);
        for j in 0..n {
            let lon = axis_coordinate(bounds.west, bounds.east, j, grid_size);
            positions.push(QueryPoint::new(lat, lon));
        }
    }
    positions
}

/// 在规则网格上运行插值器
///
/// `grid_size = 0` 时只有 (south, west) 一个节点。
pub fn generate_interpolation_grid<E>(
    estimator: &E,
    bounds: &GeoBounds,
    known: &[KnownPoint],
    grid_size: usize,
) -> Vec<GridNode>
where
    E: SpatialEstimator + ?Sized,
{
    let nodes: Vec<GridNode> = node_positions(bounds, grid_size)
        .into_iter()
        .filter_map(|q| {
            estimator.interpolate(&q, known).map(|value| GridNode {
                lat: q.lat,
                lon: q.lon,
                value,
            })
        })
        .collect();

    tracing::debug!(
        "{} 网格插值完成: grid_size={}, 节点数={}",
        estimator.name(),
        grid_size,
        nodes.len()
    );
    nodes
}

/// 并行网格插值
///
/// 返回与 [`generate_interpolation_grid`] 相同顺序的相同节点。
#[cfg(feature = "parallel")]
pub fn generate_interpolation_grid_parallel<E>(
    estimator: &E,
    bounds: &GeoBounds,
    known: &[KnownPoint],
    grid_size: usize,
) -> Vec<GridNode>
where
    E: SpatialEstimator + Sync + ?Sized,
{
    use rayon::prelude::*;

    let nodes: Vec<GridNode> = node_positions(bounds, grid_size)
        .into_par_iter()
        .filter_map(|q| {
            estimator.interpolate(&q, known).map(|value| GridNode {
                lat: q.lat,
                lon: q.lon,
                value,
            })
        })
        .collect();

    tracing::debug!(
        "{} 并行网格插值完成: grid_size={}, 节点数={}",
        estimator.name(),
        grid_size,
        nodes.len()
    );
    nodes
}
