// apps/gf_cli/src/main.rs

//! gasfield 命令行界面
//!
//! 对 JSON 点文件运行气体浓度空间插值。
//!
//! # 架构层级
//!
//! 本模块属于 **Layer 5: Application**：
//! - 插值方法由 `EngineConfig` / `--method` 选择，统一为 `Interpolator`
//! - 所有文件 I/O 只发生在本层，引擎 crate 不做 I/O

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// gasfield 气体浓度插值命令行工具
#[derive(Parser)]
#[command(name = "gf_cli")]
#[command(author = "gasfield Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gas concentration spatial interpolation", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 估计单个位置的浓度
    Estimate(commands::estimate::EstimateArgs),
    /// 在规则网格上插值
    Grid(commands::grid::GridArgs),
    /// 留一法交叉验证
    CrossValidate(commands::cross_validate::CrossValidateArgs),
    /// 验证配置
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Estimate(args) => commands::estimate::execute(args),
        Commands::Grid(args) => commands::grid::execute(args),
        Commands::CrossValidate(args) => commands::cross_validate::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    }
}
