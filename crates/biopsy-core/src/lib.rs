//! # Biopsy Core
//!
//! 前列腺穿刺活检报告的核心模块，提供数据模型、错误定义和通用工具。

pub mod error;
pub mod models;
pub mod utils;

pub use error::{BiopsyError, Result};
pub use models::*;
