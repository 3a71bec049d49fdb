// crates/gf_interp/src/variogram.rs

//! 变异函数模型
//!
//! 描述空间相关性随距离变化的半变异函数 γ(h)：
//!
//! - 指数模型（默认）: γ(h) = η + σ·(1 − e^(−3h/r))
//! - 球状模型: h ≥ r 时 γ(h) = η + σ，否则 γ(h) = η + σ·(1.5·h/r − 0.5·(h/r)³)
//! - 高斯模型: γ(h) = η + σ·(1 − e^(−3(h/r)²))
//!
//! 其中 η 为块金值、σ 为基台值、r 为变程（米）。始终有 γ(0) = 0。
//! 克里金系统使用协方差 C(h) = σ − γ(h)。

use gf_config::KrigingConfig;
use serde::{Deserialize, Serialize};

pub use gf_config::VariogramModel;

/// 变异函数参数
///
/// 不可变值类型，由单个克里金实例持有；自动调参产生新值而不是原地修改。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariogramParameters {
    /// 块金值 η
    pub nugget: f64,
    /// 基台值 σ
    pub sill: f64,
    /// 变程 r（米）
    pub range: f64,
    /// 模型类型
    pub model: VariogramModel,
}

impl Default for VariogramParameters {
    fn default() -> Self {
        Self {
            nugget: 0.1,
            sill: 1.0,
            range: 1000.0,
            model: VariogramModel::Exponential,
        }
    }
}

impl VariogramParameters {
    /// 创建变异函数参数
    #[must_use]
    pub const fn new(nugget: f64, sill: f64, range: f64, model: VariogramModel) -> Self {
        Self {
            nugget,
            sill,
            range,
            model,
        }
    }

    /// 指数模型
    #[must_use]
    pub const fn exponential(nugget: f64, sill: f64, range: f64) -> Self {
        Self::new(nugget, sill, range, VariogramModel::Exponential)
    }

    /// 球状模型
    #[must_use]
    pub const fn spherical(nugget: f64, sill: f64, range: f64) -> Self {
        Self::new(nugget, sill, range, VariogramModel::Spherical)
    }

    /// 高斯模型
    #[must_use]
    pub const fn gaussian(nugget: f64, sill: f64, range: f64) -> Self {
        Self::new(nugget, sill, range, VariogramModel::Gaussian)
    }

    /// 从克里金配置创建
    #[must_use]
    pub fn from_config(config: &KrigingConfig) -> Self {
        Self::new(config.nugget, config.sill, config.range, config.model)
    }

    /// 计算半变异函数值 γ(h)
    ///
    /// # 参数
    /// - `h`: 滞后距离（米）
    pub fn gamma(&self, h: f64) -> f64 {
        if h <= 0.0 {
            return 0.0;
        }
        let Self {
            nugget,
            sill,
            range,
            model,
        } = *self;

        match model {
            VariogramModel::Exponential => nugget + sill * (1.0 - (-3.0 * h / range).exp()),
            VariogramModel::Spherical => {
                if h >= range {
                    nugget + sill
                } else {
                    let ratio = h / range;
                    nugget + sill * (1.5 * ratio - 0.5 * ratio.powi(3))
                }
            }
            VariogramModel::Gaussian => {
                nugget + sill * (1.0 - (-3.0 * (h / range).powi(2)).exp())
            }
        }
    }

    /// 计算协方差 C(h) = σ − γ(h)
    #[inline]
    pub fn covariance(&self, h: f64) -> f64 {
        self.sill - self.gamma(h)
    }

    /// 替换变程
    #[must_use]
    pub fn with_range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    /// 替换基台值
    #[must_use]
    pub fn with_sill(mut self, sill: f64) -> Self {
        self.sill = sill;
        self
    }
}
