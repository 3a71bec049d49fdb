// apps/gf_cli/src/commands/mod.rs

//! 命令实现

pub mod cross_validate;
pub mod estimate;
pub mod grid;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use gf_config::{EngineConfig, InterpolationMethod};
use gf_interp::{sanitize_known_points, KnownPoint};
use serde::Serialize;
use tracing::{info, warn};

/// 各插值命令共用的参数
#[derive(Args)]
pub struct EngineArgs {
    /// 已知点文件（JSON 数组：[{"lat", "lon", "value"}]）
    #[arg(short, long)]
    pub points: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 插值方法（覆盖配置文件）: kriging, thin_plate_spline, knn
    #[arg(short, long)]
    pub method: Option<InterpolationMethod>,
}

impl EngineArgs {
    /// 加载配置，命令行方法优先
    pub fn load_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(method) = self.method {
            config.method = method;
        }
        info!("插值方法: {}", config.method);
        Ok(config)
    }

    /// 加载并清洗已知点
    pub fn load_points(&self) -> Result<Vec<KnownPoint>> {
        load_points(&self.points)
    }
}

/// 读取已知点文件，丢弃无效点
pub fn load_points(path: &Path) -> Result<Vec<KnownPoint>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("无法读取已知点文件: {}", path.display()))?;
    let raw: Vec<KnownPoint> = serde_json::from_str(&content)
        .with_context(|| format!("已知点文件格式错误: {}", path.display()))?;

    let points = sanitize_known_points(&raw);
    if points.len() < raw.len() {
        warn!("忽略 {} 个无效已知点", raw.len() - points.len());
    }
    info!("已加载 {} 个已知点", points.len());
    Ok(points)
}

/// 输出 JSON：写入文件或打印到标准输出
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("JSON 序列化失败")?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("无法写入输出文件: {}", path.display()))?;
            info!("结果已写入: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
