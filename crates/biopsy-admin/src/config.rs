//! 配置管理
//!
//! 配置来源依次为内置默认值、可选配置文件和 `BIOPSY_` 前缀的环境变量，
//! 后者覆盖前者。

use anyhow::{Context, Result};
use biopsy_core::BiopsyError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// 预置记录数上限
pub const MAX_INITIAL_CORES: usize = 100;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 配置管理器
#[derive(Debug)]
pub struct ConfigManager {
    /// 配置数据
    config: ReportConfig,
    /// 配置文件路径
    config_path: Option<String>,
    /// 配置验证器
    validator: ConfigValidator,
}

/// 完整配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 记录存储配置
    pub store: StoreConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 输出配置
    pub output: OutputConfig,
}

/// 记录存储配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 新报告预置的空白记录数
    pub initial_cores: usize,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 日志格式
    pub format: LogFormat,
}

/// 日志格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// 快照输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 单行 JSON
    Json,
    /// 缩进 JSON
    Pretty,
    /// 统计摘要
    Summary,
}

impl FromStr for OutputFormat {
    type Err = BiopsyError;

    fn from_str(s: &str) -> biopsy_core::Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            "summary" => Ok(OutputFormat::Summary),
            other => Err(BiopsyError::Config(format!("unknown output format: {}", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Summary => write!(f, "summary"),
        }
    }
}

/// 配置验证器
#[derive(Debug)]
pub struct ConfigValidator {
    /// 验证规则
    validation_rules: Vec<ValidationRule>,
}

/// 验证规则
#[derive(Debug)]
struct ValidationRule {
    /// 字段路径
    field_path: &'static str,
    /// 验证函数
    check: fn(&ReportConfig) -> bool,
    /// 错误消息
    error_message: &'static str,
}

impl ConfigManager {
    /// 创建新的配置管理器
    pub fn new(config_path: Option<&str>) -> Result<Self> {
        let validator = ConfigValidator::new();
        let config = Self::load_config(config_path)?;
        validator.validate(&config)?;

        Ok(Self {
            config,
            config_path: config_path.map(str::to_string),
            validator,
        })
    }

    /// 叠加默认值、配置文件和环境变量
    fn load_config(config_path: Option<&str>) -> Result<ReportConfig> {
        let defaults = Config::try_from(&ReportConfig::default())
            .context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }
        builder = builder.add_source(
            Environment::with_prefix("BIOPSY")
                .prefix_separator("_")
                .separator("__"),
        );

        let settings = builder.build().context("Failed to read configuration sources")?;
        let config: ReportConfig = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        match config_path {
            Some(path) => info!("Configuration loaded from: {}", path),
            None => debug!("Configuration loaded from defaults and environment"),
        }
        Ok(config)
    }

    /// 获取配置
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// 覆盖配置，验证失败时保持原配置
    pub fn update_config(&mut self, new_config: ReportConfig) -> Result<()> {
        self.validator.validate(&new_config)?;
        self.config = new_config;
        info!("Configuration updated");
        Ok(())
    }

    /// 重新加载配置
    pub fn reload_config(&mut self) -> Result<()> {
        let new_config = Self::load_config(self.config_path.as_deref())?;
        self.update_config(new_config)
    }
}

impl ConfigValidator {
    /// 创建新的配置验证器
    pub fn new() -> Self {
        let validation_rules = vec![
            ValidationRule {
                field_path: "store.initial_cores",
                check: |config| config.store.initial_cores <= MAX_INITIAL_CORES,
                error_message: "must not exceed 100",
            },
            ValidationRule {
                field_path: "logging.level",
                check: |config| {
                    LOG_LEVELS
                        .iter()
                        .any(|level| level.eq_ignore_ascii_case(&config.logging.level))
                },
                error_message: "must be one of trace, debug, info, warn, error",
            },
        ];

        Self { validation_rules }
    }

    /// 验证配置
    pub fn validate(&self, config: &ReportConfig) -> biopsy_core::Result<()> {
        for rule in &self.validation_rules {
            if !(rule.check)(config) {
                return Err(BiopsyError::Config(format!(
                    "{} {}",
                    rule.field_path, rule.error_message
                )));
            }
        }
        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { initial_cores: 1 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
        }
    }
}
