// crates/gf_interp/src/engine.rs

//! 插值引擎
//!
//! 按 [`EngineConfig`] 选择插值方法，并对一组命名目标点批量插值。
//!
//! 典型的评估周期：
//!
//! ```
//! use gf_config::EngineConfig;
//! use gf_interp::prelude::*;
//!
//! let config = EngineConfig::default();
//! let known = vec![
//!     KnownPoint::new(-7.7750, 110.3760, 6.0),
//!     KnownPoint::new(-7.7700, 110.3790, 14.0),
//! ];
//! let targets = vec![NamedTarget::new("interp3", "F11", -7.7733, 110.3778)];
//!
//! let interpolator = Interpolator::from_config(&config).prepare(&known);
//! let results = interpolate_targets(&interpolator, &targets, &known);
//! assert_eq!(results.len(), 1);
//! assert!(results[0].value.is_some());
//! ```

use gf_config::{EngineConfig, InterpolationMethod};
use gf_foundation::{ensure, require, GfError, GfResult};
use serde::{Deserialize, Serialize};

use crate::estimator::{Estimate, SpatialEstimator};
use crate::exposure::ExposureLevel;
use crate::knn::KnnRegressor;
use crate::kriging::OrdinaryKriging;
use crate::point::{KnownPoint, NamedTarget, QueryPoint};
use crate::rbf::ThinPlateSpline;

/// 按配置选择的插值器
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolator {
    /// 普通克里金
    Kriging {
        /// 克里金插值器
        estimator: OrdinaryKriging,
        /// `prepare` 时是否自动调参
        auto_tune: bool,
    },
    /// 薄板样条
    ThinPlateSpline(ThinPlateSpline),
    /// K 近邻
    Knn(KnnRegressor),
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl Interpolator {
    /// 从引擎配置创建
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.method {
            InterpolationMethod::Kriging => Self::Kriging {
                estimator: OrdinaryKriging::from_config(&config.kriging),
                auto_tune: config.kriging.auto_tune,
            },
            InterpolationMethod::ThinPlateSpline => {
                Self::ThinPlateSpline(ThinPlateSpline::from_config(&config.rbf))
            }
            InterpolationMethod::Knn => Self::Knn(KnnRegressor::from_config(&config.knn)),
        }
    }

    /// 插值方法
    pub fn method(&self) -> InterpolationMethod {
        match self {
            Self::Kriging { .. } => InterpolationMethod::Kriging,
            Self::ThinPlateSpline(_) => InterpolationMethod::ThinPlateSpline,
            Self::Knn(_) => InterpolationMethod::Knn,
        }
    }

    /// 针对本周期的已知点做准备
    ///
    /// 克里金且启用自动调参时返回调参后的插值器，其余情况原样返回。
    #[must_use]
    pub fn prepare(&self, known: &[KnownPoint]) -> Self {
        match *self {
            Self::Kriging {
                estimator,
                auto_tune: true,
            } => Self::Kriging {
                estimator: estimator.tuned(known),
                auto_tune: true,
            },
            other => other,
        }
    }

    /// 带输入校验的估计
    ///
    /// # Errors
    /// - 查询点坐标越界或非有限
    /// - 没有已知点
    pub fn try_estimate(&self, query: &QueryPoint, known: &[KnownPoint]) -> GfResult<Estimate> {
        query.validate()?;
        ensure!(
            !known.is_empty(),
            GfError::insufficient_data("estimate", 1, known.len())
        );
        let estimate = require!(
            self.estimate(query, known),
            GfError::numerical("estimate", format!("{} 未返回估计值", self.name()))
        );
        Ok(estimate)
    }

    fn as_estimator(&self) -> &dyn SpatialEstimator {
        match self {
            Self::Kriging { estimator, .. } => estimator,
            Self::ThinPlateSpline(e) => e,
            Self::Knn(e) => e,
        }
    }
}

impl SpatialEstimator for Interpolator {
    fn name(&self) -> &'static str {
        self.as_estimator().name()
    }

    fn estimate(&self, query: &QueryPoint, known: &[KnownPoint]) -> Option<Estimate> {
        self.as_estimator().estimate(query, known)
    }
}

impl From<OrdinaryKriging> for Interpolator {
    fn from(estimator: OrdinaryKriging) -> Self {
        Self::Kriging {
            estimator,
            auto_tune: false,
        }
    }
}

impl From<ThinPlateSpline> for Interpolator {
    fn from(estimator: ThinPlateSpline) -> Self {
        Self::ThinPlateSpline(estimator)
    }
}

impl From<KnnRegressor> for Interpolator {
    fn from(estimator: KnnRegressor) -> Self {
        Self::Knn(estimator)
    }
}

/// 命名目标点的插值结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetEstimate {
    /// 目标标识
    pub id: String,
    /// 显示名称
    pub name: String,
    /// 纬度（度）
    pub lat: f64,
    /// 经度（度）
    pub lon: f64,
    /// 估计值（没有已知点时为 `None`）
    pub value: Option<f64>,
}

impl TargetEstimate {
    /// 暴露等级
    pub fn level(&self) -> Option<ExposureLevel> {
        self.value.map(ExposureLevel::from_ppm)
    }
}

/// 对命名目标点批量插值
///
/// 结果顺序与 `targets` 一致。
pub fn interpolate_targets<E>(
    estimator: &E,
    targets: &[NamedTarget],
    known: &[KnownPoint],
) -> Vec<TargetEstimate>
where
    E: SpatialEstimator + ?Sized,
{
    targets
        .iter()
        .map(|t| TargetEstimate {
            id: t.id.clone(),
            name: t.name.clone(),
            lat: t.lat,
            lon: t.lon,
            value: estimator.interpolate(&t.position(), known),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::EstimatePath;

    fn known() -> Vec<KnownPoint> {
        vec![
            KnownPoint::new(-7.7750, 110.3760, 6.0),
            KnownPoint::new(-7.7700, 110.3790, 14.0),
            KnownPoint::new(-7.7680, 110.3740, 40.0),
        ]
    }

    #[test]
    fn test_from_config_selects_method() {
        for method in InterpolationMethod::ALL {
            let config = EngineConfig {
                method,
                ..EngineConfig::default()
            };
            let interpolator = Interpolator::from_config(&config);
            assert_eq!(interpolator.method(), method);
        }
        assert_eq!(Interpolator::default().method(), InterpolationMethod::Kriging);
    }

    #[test]
    fn test_prepare_tunes_only_when_enabled() {
        let known = known();
        let tuned = Interpolator::default().prepare(&known);
        match tuned {
            Interpolator::Kriging { estimator, .. } => {
                assert_ne!(estimator.params(), OrdinaryKriging::default().params());
            }
            other => panic!("unexpected {other:?}"),
        }

        let frozen = Interpolator::from(OrdinaryKriging::default()).prepare(&known);
        assert_eq!(frozen, Interpolator::from(OrdinaryKriging::default()));

        let knn = Interpolator::from(KnnRegressor::default());
        assert_eq!(knn.prepare(&known), knn);
    }

    #[test]
    fn test_delegates_to_inner() {
        let known = known();
        let q = QueryPoint::new(-7.7720, 110.3770);
        let knn = KnnRegressor::new(2, 2.0);
        assert_eq!(
            Interpolator::from(knn).estimate(&q, &known),
            knn.estimate(&q, &known)
        );
        assert_eq!(Interpolator::from(knn).name(), "knn");

        let tps = ThinPlateSpline::default();
        let e = Interpolator::from(tps).estimate(&q, &known).unwrap();
        assert_eq!(e.path, EstimatePath::Primary);
    }

    #[test]
    fn test_try_estimate_errors() {
        let interpolator = Interpolator::default();
        let q = QueryPoint::new(-7.7720, 110.3770);
        assert!(matches!(
            interpolator.try_estimate(&q, &[]),
            Err(GfError::InsufficientData { required: 1, actual: 0, .. })
        ));
        assert!(matches!(
            interpolator.try_estimate(&QueryPoint::new(-95.0, 110.0), &known()),
            Err(GfError::OutOfRange { .. })
        ));
        let e = interpolator.prepare(&known()).try_estimate(&q, &known()).unwrap();
        assert!(e.value >= 0.0);
    }

    #[test]
    fn test_interpolate_targets() {
        let targets = vec![
            NamedTarget::new("interp1", "Bike Station MIPA", -7.767_307, 110.374_650),
            NamedTarget::new("interp2", "FISIPOL", -7.769_306, 110.380_200),
        ];
        let interpolator = Interpolator::default().prepare(&known());
        let results = interpolate_targets(&interpolator, &targets, &known());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "interp1");
        assert_eq!(results[1].name, "FISIPOL");
        assert!(results.iter().all(|r| r.value.is_some_and(|v| v >= 0.0)));
        assert!(results.iter().all(|r| r.level().is_some()));
    }

    #[test]
    fn test_interpolate_targets_without_known_points() {
        let targets = vec![NamedTarget::new("t", "T", 0.0, 0.0)];
        let results = interpolate_targets(&Interpolator::default(), &targets, &[]);
        assert_eq!(results[0].value, None);
        assert_eq!(results[0].level(), None);
    }
}
