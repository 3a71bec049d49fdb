// crates/gf_geo/src/geometry.rs

//! 几何类型定义
//!
//! 提供经纬度点 [`GeoPoint`] 以及 Haversine 大圆距离。
//! 所有插值器都以这里的距离作为空间度量，单位为米。

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};

// ============================================================================
// 地球物理常量
// ============================================================================

/// 地球半径 (米) - 用于 Haversine 公式
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Haversine 公式计算大圆距离
///
/// 将地球视为半径 [`EARTH_RADIUS`] 的正球体。
///
/// # Arguments
/// - `lat1`, `lon1`: 第一个点（度）
/// - `lat2`, `lon2`: 第二个点（度）
///
/// # Returns
/// 大圆距离（米）。输入含 NaN 时结果为 NaN，由上游负责过滤。
#[must_use]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlon / 2.0).sin().powi(2);

    // 舍入误差可能使 a 略大于 1；比较而非 f64::min，NaN 须原样传播
    let a = if a > 1.0 { 1.0 } else { a };
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS * c
}

// ============================================================================
// GeoPoint - 经纬度点
// ============================================================================

/// 经纬度点
///
/// # 示例
///
/// ```
/// use gf_geo::geometry::GeoPoint;
///
/// let beijing = GeoPoint::new(39.9, 116.4);
/// let shanghai = GeoPoint::new(31.2, 121.5);
/// let dist_km = beijing.haversine_distance_to(&shanghai) / 1000.0; // 约 1068 km
/// assert!((dist_km - 1068.0).abs() < 20.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// 纬度（度）
    pub lat: f64,
    /// 经度（度）
    pub lon: f64,
}

impl GeoPoint {
    /// 创建新的经纬度点
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// 创建并校验经纬度范围
    ///
    /// # Errors
    /// 纬度不在 [-90, 90] 或经度不在 [-180, 180] 内时返回
    /// [`GeoError::CoordinateOutOfRange`]（NaN 同样视为越界）。
    pub fn checked(lat: f64, lon: f64) -> GeoResult<Self> {
        let point = Self::new(lat, lon);
        point.validate()?;
        Ok(point)
    }

    /// 校验经纬度范围
    ///
    /// # Errors
    /// 见 [`GeoPoint::checked`]。
    pub fn validate(&self) -> GeoResult<()> {
        GeoError::check_coordinate("纬度", self.lat, -90.0, 90.0)?;
        GeoError::check_coordinate("经度", self.lon, -180.0, 180.0)?;
        Ok(())
    }

    /// 两个坐标是否都为有限数
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// 到另一个点的大圆距离（米）
    #[inline]
    #[must_use]
    pub fn haversine_distance_to(&self, other: &Self) -> f64 {
        haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// 从 (lat, lon) 元组创建
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.lat, p.lon)
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_haversine_distance() {
        // 北京到上海
        let beijing = GeoPoint::new(39.9, 116.4);
        let shanghai = GeoPoint::new(31.2, 121.5);

        let dist_km = beijing.haversine_distance_to(&shanghai) / 1000.0;

        // 实际距离约 1068 km
        assert!(
            (dist_km - 1068.0).abs() < 20.0,
            "Beijing-Shanghai: {dist_km} km"
        );
    }

    #[test]
    fn test_haversine_one_degree_on_equator() {
        let d = haversine_distance(0.0, 0.0, 0.0, 1.0);
        let expected = EARTH_RADIUS * PI / 180.0;
        assert!((d - expected).abs() < 1e-6, "1° 经度: {d} m");
    }

    #[test]
    fn test_haversine_same_point() {
        let p = GeoPoint::new(-7.7673, 110.3746);
        assert!(p.haversine_distance_to(&p).abs() < 1e-10);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = GeoPoint::new(-7.7693, 110.3801);
        let b = GeoPoint::new(-7.7732, 110.3777);
        assert_eq!(a.haversine_distance_to(&b), b.haversine_distance_to(&a));
    }

    #[test]
    fn test_haversine_antipodal() {
        // 对跖点（地球两端）
        let d = haversine_distance(0.0, 0.0, 0.0, 180.0);
        let half_circumference = PI * EARTH_RADIUS;
        assert!((d - half_circumference).abs() < 1.0, "Antipodal distance: {d}");
    }

    #[test]
    fn test_haversine_nan_propagates() {
        assert!(haversine_distance(f64::NAN, 0.0, 0.0, 0.0).is_nan());
        assert!(haversine_distance(0.0, f64::NAN, 0.0, 0.0).is_nan());
        assert!(haversine_distance(0.0, 0.0, 0.0, f64::NAN).is_nan());

        let p = GeoPoint::new(f64::NAN, 110.0);
        assert!(p.haversine_distance_to(&GeoPoint::new(-7.7, 110.3)).is_nan());
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(GeoPoint::checked(45.0, 120.0).is_ok());
        assert!(GeoPoint::checked(95.0, 120.0).is_err());
        assert!(GeoPoint::checked(45.0, 181.0).is_err());
        assert!(GeoPoint::checked(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_serde_field_names() {
        let p = GeoPoint::new(-7.77, 110.38);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"lat\""));
        assert!(json.contains("\"lon\""));
    }
}
