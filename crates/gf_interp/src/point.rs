// crates/gf_interp/src/point.rs

//! 插值输入输出点类型
//!
//! - [`KnownPoint`]: 已确认的传感器观测（经纬度 + 浓度值）
//! - [`QueryPoint`]: 待估计位置
//! - [`NamedTarget`]: 带标识的固定插值目标
//! - [`GridNode`]: 网格采样结果

use gf_foundation::{GfError, GfResult};
use gf_geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// 查询点（纬度、经度，单位为度）
pub type QueryPoint = GeoPoint;

/// 已知观测点
///
/// 每个评估周期从实时传感器状态重建，引擎不持久化。
/// `value` 应为有限数，概念上非负（ppm）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnownPoint {
    /// 纬度（度）
    pub lat: f64,
    /// 经度（度）
    pub lon: f64,
    /// 观测值（ppm）
    pub value: f64,
}

impl KnownPoint {
    /// 创建已知点
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64, value: f64) -> Self {
        Self { lat, lon, value }
    }

    /// 观测位置
    #[inline]
    #[must_use]
    pub const fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// 到某位置的大圆距离（米）
    #[inline]
    #[must_use]
    pub fn distance_to(&self, point: &GeoPoint) -> f64 {
        gf_geo::haversine_distance(self.lat, self.lon, point.lat, point.lon)
    }

    /// 到另一个已知点的大圆距离（米）
    #[inline]
    #[must_use]
    pub fn distance_to_known(&self, other: &KnownPoint) -> f64 {
        gf_geo::haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }

    /// 校验坐标范围和观测值
    ///
    /// # Errors
    /// 坐标越界/为 NaN 或观测值非有限时返回错误。
    pub fn validate(&self) -> GfResult<()> {
        self.position().validate()?;
        GfError::check_finite("value", self.value)
    }
}

impl From<(f64, f64, f64)> for KnownPoint {
    /// 从 (lat, lon, value) 元组创建
    fn from((lat, lon, value): (f64, f64, f64)) -> Self {
        Self::new(lat, lon, value)
    }
}

/// 过滤无效的已知点
///
/// 丢弃坐标越界、坐标或观测值非有限的点，保持其余点的顺序。
pub fn sanitize_known_points(points: &[KnownPoint]) -> Vec<KnownPoint> {
    let valid: Vec<KnownPoint> = points
        .iter()
        .filter(|p| p.validate().is_ok())
        .copied()
        .collect();

    let dropped = points.len() - valid.len();
    if dropped > 0 {
        tracing::debug!("丢弃 {} 个无效已知点（共 {} 个）", dropped, points.len());
    }
    valid
}

/// 命名插值目标
///
/// 每个评估周期对同一组固定位置重新插值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTarget {
    /// 目标标识
    pub id: String,
    /// 显示名称
    pub name: String,
    /// 纬度（度）
    pub lat: f64,
    /// 经度（度）
    pub lon: f64,
}

impl NamedTarget {
    /// 创建命名目标
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lon,
        }
    }

    /// 目标位置
    #[inline]
    pub fn position(&self) -> QueryPoint {
        QueryPoint::new(self.lat, self.lon)
    }
}

/// 网格节点估计值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridNode {
    /// 纬度（度）
    pub lat: f64,
    /// 经度（度）
    pub lon: f64,
    /// 估计值（≥ 0）
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let p = KnownPoint::new(0.0, 0.0, 10.0);
        let d = p.distance_to(&QueryPoint::new(0.0, 1.0));
        assert!((d - 111_194.93).abs() < 1.0);
        assert!((p.distance_to_known(&KnownPoint::new(0.0, 1.0, 30.0)) - d).abs() < 1e-9);
    }

    #[test]
    fn test_validate() {
        assert!(KnownPoint::new(-7.77, 110.38, 12.5).validate().is_ok());
        assert!(KnownPoint::new(-7.77, 110.38, f64::NAN).validate().is_err());
        assert!(KnownPoint::new(-97.0, 110.38, 1.0).validate().is_err());
        assert!(KnownPoint::new(-7.77, f64::INFINITY, 1.0).validate().is_err());
    }

    #[test]
    fn test_sanitize_keeps_order() {
        let points = vec![
            KnownPoint::new(1.0, 1.0, 1.0),
            KnownPoint::new(f64::NAN, 1.0, 2.0),
            KnownPoint::new(2.0, 2.0, 3.0),
            KnownPoint::new(3.0, 3.0, f64::INFINITY),
        ];
        let clean = sanitize_known_points(&points);
        assert_eq!(clean.len(), 2);
        assert_eq!(clean[0].value, 1.0);
        assert_eq!(clean[1].value, 3.0);
    }

    #[test]
    fn test_deserialize_known_point() {
        let p: KnownPoint =
            serde_json::from_str(r#"{ "lat": -7.77, "lon": 110.38, "value": 4.5 }"#).unwrap();
        assert_eq!(p, KnownPoint::new(-7.77, 110.38, 4.5));
    }
}
