// crates/gf_geo/src/bounds.rs

//! 经纬度范围框
//!
//! 用于描述插值网格覆盖的矩形区域（北/南/东/西边界，单位为度）。
//! 不支持跨越 180° 经线的范围框。

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};
use crate::geometry::GeoPoint;

/// 经纬度范围框
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// 北边界（最大纬度）
    pub north: f64,
    /// 南边界（最小纬度）
    pub south: f64,
    /// 东边界（最大经度）
    pub east: f64,
    /// 西边界（最小经度）
    pub west: f64,
}

impl GeoBounds {
    /// 创建并校验范围框
    ///
    /// # Errors
    /// - 任一边界越界或为 NaN 时返回 [`GeoError::CoordinateOutOfRange`]
    /// - `north < south` 或 `east < west` 时返回 [`GeoError::InvalidBounds`]
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> GeoResult<Self> {
        let bounds = Self {
            north,
            south,
            east,
            west,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// 从两个角点创建（自动排序）
    ///
    /// # Errors
    /// 角点坐标越界时返回错误。
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> GeoResult<Self> {
        Self::new(
            a.lat.max(b.lat),
            a.lat.min(b.lat),
            a.lon.max(b.lon),
            a.lon.min(b.lon),
        )
    }

    /// 校验范围框
    ///
    /// # Errors
    /// 见 [`GeoBounds::new`]。
    pub fn validate(&self) -> GeoResult<()> {
        GeoError::check_coordinate("北边界", self.north, -90.0, 90.0)?;
        GeoError::check_coordinate("南边界", self.south, -90.0, 90.0)?;
        GeoError::check_coordinate("东边界", self.east, -180.0, 180.0)?;
        GeoError::check_coordinate("西边界", self.west, -180.0, 180.0)?;

        if self.north < self.south {
            return Err(GeoError::invalid_bounds(format!(
                "north ({}) < south ({})",
                self.north, self.south
            )));
        }
        if self.east < self.west {
            return Err(GeoError::invalid_bounds(format!(
                "east ({}) < west ({})",
                self.east, self.west
            )));
        }
        Ok(())
    }

    /// 纬度跨度（度）
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// 经度跨度（度）
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }

    /// 检查点是否在范围框内（含边界）
    #[must_use]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lon >= self.west
            && point.lon <= self.east
    }

    /// 中心点
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            0.5 * (self.north + self.south),
            0.5 * (self.east + self.west),
        )
    }

    /// 四个角点：西南、东南、西北、东北
    #[must_use]
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            GeoPoint::new(self.south, self.west),
            GeoPoint::new(self.south, self.east),
            GeoPoint::new(self.north, self.west),
            GeoPoint::new(self.north, self.east),
        ]
    }

    /// 包含所有给定点的最小范围框
    ///
    /// 点集为空时返回 `None`。
    #[must_use]
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        points.into_iter().fold(None, |acc: Option<Self>, p| {
            Some(match acc {
                None => Self {
                    north: p.lat,
                    south: p.lat,
                    east: p.lon,
                    west: p.lon,
                },
                Some(b) => Self {
                    north: b.north.max(p.lat),
                    south: b.south.min(p.lat),
                    east: b.east.max(p.lon),
                    west: b.west.min(p.lon),
                },
            })
        })
    }
}
