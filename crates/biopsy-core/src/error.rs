//! 错误定义模块

use thiserror::Error;

/// 活检报告系统统一错误类型
///
/// 记录存储本身的操作是全函数，不会返回错误；这里的错误只出现在
/// 名称解析、配置加载和命令解析等边界上。
#[derive(Error, Debug)]
pub enum BiopsyError {
    #[error("未知字段: {0}")]
    UnknownField(String),

    #[error("未知诊断标志: {0}")]
    UnknownDiagnosisFlag(String),

    #[error("未知附加特征: {0}")]
    UnknownFeatureFlag(String),

    #[error("未知组织类型: {0}")]
    UnknownCoreType(String),

    #[error("无效命令: {0}")]
    InvalidCommand(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 活检报告系统统一结果类型
pub type Result<T> = std::result::Result<T, BiopsyError>;
