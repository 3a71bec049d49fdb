// apps/gf_cli/src/commands/cross_validate.rs

//! 交叉验证命令
//!
//! 对已知点做留一法交叉验证。未指定 `--method` 时比较全部插值方法。

use anyhow::{bail, Result};
use clap::Args;
use gf_config::{EngineConfig, InterpolationMethod};
use gf_interp::{cross_validate, CrossValidationReport, Interpolator};
use serde::Serialize;
use tracing::info;

use super::{write_json, EngineArgs};

/// 交叉验证参数
#[derive(Args)]
pub struct CrossValidateArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// 单个方法的验证结果
#[derive(Serialize)]
struct MethodReport {
    method: InterpolationMethod,
    #[serde(flatten)]
    report: CrossValidationReport,
}

/// 执行交叉验证命令
pub fn execute(args: CrossValidateArgs) -> Result<()> {
    let config = args.engine.load_config()?;
    let known = args.engine.load_points()?;
    if known.len() < 2 {
        bail!("交叉验证至少需要 2 个有效已知点，当前 {} 个", known.len());
    }

    let methods: Vec<InterpolationMethod> = match args.engine.method {
        Some(method) => vec![method],
        None => InterpolationMethod::ALL.to_vec(),
    };

    let reports: Vec<MethodReport> = methods
        .into_iter()
        .filter_map(|method| {
            let config = EngineConfig {
                method,
                ..config.clone()
            };
            let interpolator = Interpolator::from_config(&config).prepare(&known);
            cross_validate(&interpolator, &known).map(|report| {
                info!(
                    "{:<18} rmse={:.4} mae={:.4} max={:.4}",
                    method.name(),
                    report.rmse,
                    report.mae,
                    report.max_abs_error
                );
                MethodReport { method, report }
            })
        })
        .collect();

    write_json(&reports, None)
}
