// apps/gf_cli/src/commands/estimate.rs

//! 单点估计命令

use anyhow::{Context, Result};
use clap::Args;
use gf_interp::{EstimatePath, ExposureLevel, Interpolator, QueryPoint, SpatialEstimator};
use serde::Serialize;
use tracing::{info, warn};

use super::{write_json, EngineArgs};

/// 单点估计参数
#[derive(Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// 查询点纬度 [度]
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// 查询点经度 [度]
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
}

/// 估计结果
#[derive(Serialize)]
struct EstimateReport {
    lat: f64,
    lon: f64,
    method: &'static str,
    value: f64,
    raw: f64,
    path: EstimatePath,
    level: ExposureLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    variance: Option<f64>,
}

/// 执行估计命令
pub fn execute(args: EstimateArgs) -> Result<()> {
    let query = QueryPoint::new(args.lat, args.lon);
    let config = args.engine.load_config()?;
    let known = args.engine.load_points()?;

    let interpolator = Interpolator::from_config(&config).prepare(&known);
    let estimate = interpolator
        .try_estimate(&query, &known)
        .context("无法估计查询点浓度")?;
    if estimate.is_fallback() {
        warn!("线性求解失败，结果来自 IDW 回退");
    }

    let variance = match &interpolator {
        Interpolator::Kriging { estimator, .. } => estimator
            .interpolate_with_variance(&query, &known)
            .map(|(_, variance)| variance),
        _ => None,
    };

    let report = EstimateReport {
        lat: query.lat,
        lon: query.lon,
        method: interpolator.name(),
        value: estimate.value,
        raw: estimate.raw,
        path: estimate.path,
        level: ExposureLevel::from_ppm(estimate.value),
        variance,
    };
    info!(
        "({:.6}, {:.6}) 估计值 {:.3} ppm [{}]",
        report.lat, report.lon, report.value, report.level
    );
    write_json(&report, None)
}
