//! 活检报告
//!
//! 在记录存储之上提供报告标识、时间戳和供渲染方读取的快照。

use crate::store::CoreStore;
use biopsy_core::{Core, CoreField, CoreId, DiagnosisFlag, FeatureFlag};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// 一份正在编辑的活检报告
#[derive(Debug, Clone)]
pub struct BiopsyReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    store: CoreStore,
}

/// 报告快照，供展示层或导出方使用
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub report_id: Uuid,
    pub taken_at: DateTime<Utc>,
    pub cores: Vec<Core>,
}

/// 报告统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_cores: usize,
    pub carcinoma_cores: usize,
    pub highest_who_grade: Option<u8>,
    pub max_tumor_percentage: Option<u32>,
}

impl BiopsyReport {
    /// 创建报告，预置 `initial_cores` 条空白记录
    pub fn new(initial_cores: usize) -> Self {
        let now = Utc::now();
        let report = Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            store: CoreStore::with_cores(initial_cores),
        };

        tracing::info!("Opened report {} with {} cores", report.id, initial_cores);
        report
    }

    pub fn store(&self) -> &CoreStore {
        &self.store
    }

    pub fn cores(&self) -> &[Core] {
        self.store.cores()
    }

    pub fn add_core(&mut self) -> &[Core] {
        self.touch();
        self.store.create()
    }

    pub fn remove_core(&mut self, id: CoreId) -> &[Core] {
        self.touch();
        self.store.remove(id)
    }

    pub fn update_field(&mut self, id: CoreId, field: CoreField, value: &str) -> &[Core] {
        self.touch();
        self.store.update_field(id, field, value)
    }

    pub fn toggle_diagnosis(&mut self, id: CoreId, flag: DiagnosisFlag) -> &[Core] {
        self.touch();
        self.store.toggle_diagnosis(id, flag)
    }

    pub fn toggle_feature(&mut self, id: CoreId, flag: FeatureFlag) -> &[Core] {
        self.touch();
        self.store.toggle_feature(id, flag)
    }

    /// 当前状态的只读快照
    pub fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot {
            report_id: self.id,
            taken_at: Utc::now(),
            cores: self.store.cores().to_vec(),
        }
    }

    /// 统计癌阳性记录、最高分级组和最大肿瘤占比
    pub fn summary(&self) -> ReportSummary {
        let cores = self.store.cores();
        let carcinoma: Vec<&Core> = cores.iter().filter(|c| c.diagnosis.carcinoma).collect();

        ReportSummary {
            total_cores: cores.len(),
            carcinoma_cores: carcinoma.len(),
            highest_who_grade: carcinoma.iter().filter_map(|c| c.who_grade).max(),
            max_tumor_percentage: cores.iter().filter_map(|c| c.tumor_percentage).max(),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for BiopsyReport {
    fn default() -> Self {
        Self::new(1)
    }
}
