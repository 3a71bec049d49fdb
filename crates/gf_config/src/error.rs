// crates/gf_config/src/error.rs

//! 配置层错误类型

use gf_foundation::GfError;

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(String),

    /// 无效值
    #[error("无效值 '{key}': {value} - {reason}")]
    InvalidValue {
        /// 配置键
        key: String,
        /// 配置值
        value: String,
        /// 原因
        reason: String,
    },
}

impl ConfigError {
    /// 创建无效值错误
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<ConfigError> for GfError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(e) => GfError::io_with_source("读取配置失败", e),
            ConfigError::Parse(msg) => GfError::serialization(msg),
            ConfigError::InvalidValue { key, value, reason } => {
                GfError::invalid_config(key, value, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid_value("knn.k", 0, "必须至少为 1");
        assert!(err.to_string().contains("knn.k"));
        assert!(err.to_string().contains("必须至少为 1"));
    }

    #[test]
    fn test_into_gf_error() {
        let err: GfError = ConfigError::invalid_value("rbf.lambda", -1.0, "不能为负").into();
        assert!(matches!(err, GfError::InvalidConfig { .. }));
    }
}
