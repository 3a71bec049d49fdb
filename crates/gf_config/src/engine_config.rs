// crates/gf_config/src/engine_config.rs

//! EngineConfig - 插值引擎配置（全 f64）
//!
//! 定义插值方法选择以及克里金、薄板样条、KNN 和网格采样的所有可调参数。
//! 所有字段都有默认值，JSON 中缺省的字段使用默认值填充。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;

// ============================================================================
// 枚举
// ============================================================================

/// 插值方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    /// 普通克里金
    #[default]
    Kriging,
    /// 薄板样条径向基函数
    ThinPlateSpline,
    /// K 近邻距离加权
    Knn,
}

impl InterpolationMethod {
    /// 所有方法，按固定顺序
    pub const ALL: [Self; 3] = [Self::Kriging, Self::ThinPlateSpline, Self::Knn];

    /// 获取方法名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kriging => "kriging",
            Self::ThinPlateSpline => "thin_plate_spline",
            Self::Knn => "knn",
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kriging" | "ok" => Ok(Self::Kriging),
            "thin_plate_spline" | "tps" | "rbf" => Ok(Self::ThinPlateSpline),
            "knn" => Ok(Self::Knn),
            other => Err(ConfigError::invalid_value(
                "method",
                other,
                "可选值: kriging, thin_plate_spline (tps), knn",
            )),
        }
    }
}

/// 变异函数模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VariogramModel {
    /// 指数模型 γ(h) = C₀ + C·(1 − exp(−3h/a))
    #[default]
    Exponential,
    /// 球状模型 γ(h) = C₀ + C·(1.5h/a − 0.5(h/a)³)，h ≥ a 时为 C₀ + C
    Spherical,
    /// 高斯模型 γ(h) = C₀ + C·(1 − exp(−3(h/a)²))
    Gaussian,
}

impl VariogramModel {
    /// 获取模型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exponential => "exponential",
            Self::Spherical => "spherical",
            Self::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for VariogramModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariogramModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exponential" => Ok(Self::Exponential),
            "spherical" => Ok(Self::Spherical),
            "gaussian" => Ok(Self::Gaussian),
            other => Err(ConfigError::invalid_value(
                "kriging.model",
                other,
                "可选值: exponential, spherical, gaussian",
            )),
        }
    }
}

// ============================================================================
// 引擎配置
// ============================================================================

/// 插值引擎配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 插值方法
    #[serde(default)]
    pub method: InterpolationMethod,

    /// 克里金参数
    #[serde(default)]
    pub kriging: KrigingConfig,

    /// 薄板样条参数
    #[serde(default)]
    pub rbf: RbfConfig,

    /// KNN 参数
    #[serde(default)]
    pub knn: KnnConfig,

    /// 网格采样参数
    #[serde(default)]
    pub grid: GridConfig,
}

/// 克里金配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KrigingConfig {
    /// 块金值 η
    #[serde(default = "default_nugget")]
    pub nugget: f64,

    /// 基台值 σ
    #[serde(default = "default_sill")]
    pub sill: f64,

    /// 变程 r [m]
    #[serde(default = "default_range")]
    pub range: f64,

    /// 变异函数模型
    #[serde(default)]
    pub model: VariogramModel,

    /// 每次插值前是否根据已知点自动调整 sill/range
    #[serde(default = "default_auto_tune")]
    pub auto_tune: bool,
}

fn default_nugget() -> f64 { 0.1 }
fn default_sill() -> f64 { 1.0 }
fn default_range() -> f64 { 1000.0 }
fn default_auto_tune() -> bool { true }

impl Default for KrigingConfig {
    fn default() -> Self {
        Self {
            nugget: default_nugget(),
            sill: default_sill(),
            range: default_range(),
            model: VariogramModel::default(),
            auto_tune: default_auto_tune(),
        }
    }
}

/// 薄板样条配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbfConfig {
    /// Tikhonov 正则化系数 λ
    #[serde(default = "default_lambda")]
    pub lambda: f64,

    /// 核函数距离下限 ε [m]
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_lambda() -> f64 { 1e-6 }
fn default_epsilon() -> f64 { 1e-12 }

impl Default for RbfConfig {
    fn default() -> Self {
        Self {
            lambda: default_lambda(),
            epsilon: default_epsilon(),
        }
    }
}

/// KNN 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnnConfig {
    /// 近邻数 k
    #[serde(default = "default_k")]
    pub k: usize,

    /// 距离权重指数 p（0 表示等权平均）
    #[serde(default = "default_power")]
    pub power: f64,
}

fn default_k() -> usize { 3 }
fn default_power() -> f64 { 1.0 }

impl Default for KnnConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            power: default_power(),
        }
    }
}

/// 网格采样配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// 每个方向的网格分段数（节点数为 (grid_size+1)²）
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
}

fn default_grid_size() -> usize { 20 }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
        }
    }
}

impl EngineConfig {
    /// 从 JSON 文件加载配置并验证
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json(&content)
    }

    /// 从 JSON 字符串解析配置并验证
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = &self.kriging;
        if !k.nugget.is_finite() || k.nugget < 0.0 {
            return Err(ConfigError::invalid_value(
                "kriging.nugget",
                k.nugget,
                "nugget 必须为非负有限数",
            ));
        }
        if !k.sill.is_finite() || k.sill <= 0.0 {
            return Err(ConfigError::invalid_value(
                "kriging.sill",
                k.sill,
                "sill 必须为正有限数",
            ));
        }
        if !k.range.is_finite() || k.range <= 0.0 {
            return Err(ConfigError::invalid_value(
                "kriging.range",
                k.range,
                "range 必须为正有限数",
            ));
        }

        if !self.rbf.lambda.is_finite() || self.rbf.lambda < 0.0 {
            return Err(ConfigError::invalid_value(
                "rbf.lambda",
                self.rbf.lambda,
                "lambda 必须为非负有限数",
            ));
        }
        if !self.rbf.epsilon.is_finite() || self.rbf.epsilon <= 0.0 {
            return Err(ConfigError::invalid_value(
                "rbf.epsilon",
                self.rbf.epsilon,
                "epsilon 必须为正有限数",
            ));
        }

        if self.knn.k == 0 {
            return Err(ConfigError::invalid_value("knn.k", self.knn.k, "k 必须至少为 1"));
        }
        if !self.knn.power.is_finite() || self.knn.power < 0.0 {
            return Err(ConfigError::invalid_value(
                "knn.power",
                self.knn.power,
                "power 必须为非负有限数",
            ));
        }

        if self.grid.grid_size == 0 {
            return Err(ConfigError::invalid_value(
                "grid.grid_size",
                self.grid.grid_size,
                "grid_size 必须至少为 1",
            ));
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }
}
