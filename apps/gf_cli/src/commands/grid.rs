// apps/gf_cli/src/commands/grid.rs

//! 网格插值命令
//!
//! 输出可直接用于热力图渲染的网格节点列表。

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use gf_geo::GeoBounds;
use gf_interp::{GridNode, Interpolator};
use serde::Serialize;
use tracing::info;

use super::{write_json, EngineArgs};

/// 网格插值参数
#[derive(Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// 北边界 [度]
    #[arg(long, allow_hyphen_values = true)]
    pub north: f64,

    /// 南边界 [度]
    #[arg(long, allow_hyphen_values = true)]
    pub south: f64,

    /// 东边界 [度]
    #[arg(long, allow_hyphen_values = true)]
    pub east: f64,

    /// 西边界 [度]
    #[arg(long, allow_hyphen_values = true)]
    pub west: f64,

    /// 每边的网格划分数（覆盖配置文件）
    #[arg(short, long)]
    pub size: Option<usize>,

    /// 输出文件（缺省打印到标准输出）
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// 网格输出
#[derive(Serialize)]
struct GridReport {
    method: String,
    bounds: GeoBounds,
    grid_size: usize,
    nodes: Vec<GridNode>,
}

/// 执行网格插值命令
pub fn execute(args: GridArgs) -> Result<()> {
    let bounds =
        GeoBounds::new(args.north, args.south, args.east, args.west).context("无效的网格范围")?;
    let config = args.engine.load_config()?;
    let known = args.engine.load_points()?;
    let grid_size = args.size.unwrap_or(config.grid.grid_size);

    let interpolator = Interpolator::from_config(&config).prepare(&known);

    let start = Instant::now();
    let nodes = run_grid(&interpolator, &bounds, &known, grid_size);
    info!(
        "网格插值完成: {} 个节点，用时 {:.2?}",
        nodes.len(),
        start.elapsed()
    );

    let report = GridReport {
        method: config.method.to_string(),
        bounds,
        grid_size,
        nodes,
    };
    write_json(&report, args.output.as_deref())
}

#[cfg(feature = "parallel")]
fn run_grid(
    interpolator: &Interpolator,
    bounds: &GeoBounds,
    known: &[gf_interp::KnownPoint],
    grid_size: usize,
) -> Vec<GridNode> {
    gf_interp::grid::generate_interpolation_grid_parallel(interpolator, bounds, known, grid_size)
}

#[cfg(not(feature = "parallel"))]
fn run_grid(
    interpolator: &Interpolator,
    bounds: &GeoBounds,
    known: &[gf_interp::KnownPoint],
    grid_size: usize,
) -> Vec<GridNode> {
    gf_interp::generate_interpolation_grid(interpolator, bounds, known, grid_size)
}
