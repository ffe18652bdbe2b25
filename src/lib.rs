//! # Biopsy
//!
//! 前列腺穿刺活检报告：记录模型、派生规则、配置与日志的统一入口。

pub use biopsy_admin as admin;
pub use biopsy_core as model;
pub use biopsy_report as report;

pub use biopsy_core::{
    AdditionalFeatures, BiopsyError, Core, CoreField, CoreId, CoreType, Diagnosis,
    DiagnosisFlag, FeatureFlag, Result,
};
pub use biopsy_report::{BiopsyReport, CoreStore, ReportSnapshot, ReportSummary, GLEASON_OPTIONS};
