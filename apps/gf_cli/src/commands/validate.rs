// apps/gf_cli/src/commands/validate.rs

//! 配置验证命令
//!
//! 验证引擎配置文件，并对合法但可疑的参数给出警告。

use std::path::Path;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use gf_config::EngineConfig;
use tracing::{error, info, warn};

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: PathBuf,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 验证结果
#[derive(Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn is_ok(&self, strict: bool) -> bool {
        self.errors.is_empty() && (!strict || self.warnings.is_empty())
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== gasfield 配置验证 ===");

    let result = validate_config(&args.config);
    print_validation_result(&result, args.strict)
}

fn validate_config(path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();
    println!("\n检查配置文件: {}", path.display());

    if !path.exists() {
        result.add_error(format!("配置文件不存在: {}", path.display()));
        return result;
    }

    match EngineConfig::from_file(path) {
        Ok(config) => {
            println!("  ✓ 配置文件有效 (method = {})", config.method);
            check_suspicious(&config, &mut result);
        }
        Err(e) => result.add_error(e.to_string()),
    }
    result
}

/// 合法但可能不合理的参数
fn check_suspicious(config: &EngineConfig, result: &mut ValidationResult) {
    let k = &config.kriging;
    if k.nugget >= k.sill {
        result.add_warning(format!(
            "kriging.nugget ({}) 不小于 sill ({})，空间相关性被块金效应淹没",
            k.nugget, k.sill
        ));
    }
    if k.range > 100_000.0 {
        result.add_warning(format!("kriging.range = {} m 超过 100 km", k.range));
    }
    if k.auto_tune {
        info!("kriging.auto_tune 已启用，sill/range 将按已知点重新估计");
    }
    if config.rbf.lambda > 1.0 {
        result.add_warning(format!(
            "rbf.lambda = {} 较大，插值将无法通过观测点",
            config.rbf.lambda
        ));
    }
    if config.knn.power > 5.0 {
        result.add_warning(format!("knn.power = {} 较大，结果接近最近邻", config.knn.power));
    }
    if config.grid.grid_size > 500 {
        result.add_warning(format!(
            "grid.grid_size = {} 将产生 {} 个节点",
            config.grid.grid_size,
            (config.grid.grid_size + 1).pow(2)
        ));
    }
}

fn print_validation_result(result: &ValidationResult, strict: bool) -> Result<()> {
    println!("\n=== 验证结果 ===");

    if !result.errors.is_empty() {
        println!("\n错误 ({}):", result.errors.len());
        for err in &result.errors {
            error!("  ✗ {}", err);
            println!("  ✗ {}", err);
        }
    }

    if !result.warnings.is_empty() {
        println!("\n警告 ({}):", result.warnings.len());
        for warning in &result.warnings {
            warn!("  ⚠ {}", warning);
            println!("  ⚠ {}", warning);
        }
    }

    if result.is_ok(strict) {
        println!("\n✓ 验证通过");
        Ok(())
    } else {
        println!("\n✗ 验证失败");
        bail!(
            "验证失败：发现 {} 个错误，{} 个警告",
            result.errors.len(),
            result.warnings.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_error() {
        let result = validate_config(Path::new("/nonexistent/gasfield.json"));
        assert_eq!(result.errors.len(), 1);
        assert!(!result.is_ok(false));
    }

    #[test]
    fn test_valid_config_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        EngineConfig::default().save_to_file(&path).unwrap();

        let result = validate_config(&path);
        assert!(result.is_ok(true), "{:?} {:?}", result.errors, result.warnings);
    }

    #[test]
    fn test_invalid_value_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        std::fs::write(&path, r#"{ "knn": { "k": 0 } }"#).unwrap();

        let result = validate_config(&path);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("knn.k"));
    }

    #[test]
    fn test_suspicious_values_warn() {
        let mut config = EngineConfig::default();
        config.kriging.nugget = 2.0;
        config.rbf.lambda = 10.0;

        let mut result = ValidationResult::default();
        check_suspicious(&config, &mut result);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.is_ok(false));
        assert!(!result.is_ok(true));
    }
}
