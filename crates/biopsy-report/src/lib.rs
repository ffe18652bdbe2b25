//! # 活检报告模块
//!
//! 管理一份前列腺穿刺活检报告的可编辑状态，包括：
//! - 记录存储：有序的穿刺记录及其增删改
//! - 派生字段：肿瘤百分比与 WHO 分级组的即时重算
//! - 分级表：Gleason 评分选项与分级组映射
//! - 报告快照：供展示层和导出方读取

pub mod derivation;
pub mod grading;
pub mod report;
pub mod store;

// 重新导出主要类型
pub use grading::{who_grade, GleasonOption, GLEASON_OPTIONS};
pub use report::{BiopsyReport, ReportSnapshot, ReportSummary};
pub use store::CoreStore;
