// crates/gf_interp/src/exposure.rs

//! CO 暴露等级
//!
//! | 等级 | 浓度 (ppm) |
//! |------|-----------|
//! | Safe | ≤ 9 |
//! | Moderate | ≤ 35 |
//! | Unhealthy | ≤ 100 |
//! | Dangerous | > 100 |

use std::fmt;

use serde::{Deserialize, Serialize};

/// CO 暴露等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposureLevel {
    /// ≤ 9 ppm
    Safe,
    /// ≤ 35 ppm
    Moderate,
    /// ≤ 100 ppm
    Unhealthy,
    /// > 100 ppm
    Dangerous,
}

impl ExposureLevel {
    /// 按浓度分级
    ///
    /// NaN 无法与任何阈值比较，归为 [`ExposureLevel::Dangerous`]。
    pub fn from_ppm(ppm: f64) -> Self {
        if ppm <= 9.0 {
            Self::Safe
        } else if ppm <= 35.0 {
            Self::Moderate
        } else if ppm <= 100.0 {
            Self::Unhealthy
        } else {
            Self::Dangerous
        }
    }

    /// 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
            Self::Dangerous => "Dangerous",
        }
    }
}

impl fmt::Display for ExposureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
