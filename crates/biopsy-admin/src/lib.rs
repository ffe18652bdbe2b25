//! # 活检报告管理模块
//!
//! 提供配置加载、验证和日志初始化等运维功能

pub mod config;
pub mod logging;

pub use config::{
    ConfigManager, ConfigValidator, LogFormat, LoggingConfig, OutputConfig, OutputFormat,
    ReportConfig, StoreConfig,
};
pub use logging::init_logging;
