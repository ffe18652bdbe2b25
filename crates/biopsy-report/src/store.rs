//! 穿刺记录存储
//!
//! 持有有序的穿刺记录序列，并在每次修改后保持派生字段一致。
//! 所有操作都是全函数：未知标识或无法识别的名称只会被忽略。

use crate::derivation;
use biopsy_core::{Core, CoreField, CoreId, CoreType, DiagnosisFlag, FeatureFlag};

/// 穿刺记录存储
#[derive(Debug, Clone)]
pub struct CoreStore {
    cores: Vec<Core>,
    /// 单调递增，删除后不复用
    next_id: CoreId,
}

impl CoreStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            cores: Vec::new(),
            next_id: 1,
        }
    }

    /// 创建包含 `count` 条空白记录的存储
    pub fn with_cores(count: usize) -> Self {
        let mut store = Self::new();
        for _ in 0..count {
            store.create();
        }
        store
    }

    /// 当前记录序列
    pub fn cores(&self) -> &[Core] {
        &self.cores
    }

    pub fn get(&self, id: CoreId) -> Option<&Core> {
        self.cores.iter().find(|core| core.id == id)
    }

    pub fn len(&self) -> usize {
        self.cores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    /// 展示层提示：仅在多于一条记录时提供删除入口
    pub fn can_remove(&self) -> bool {
        self.cores.len() > 1
    }

    /// 追加一条空白记录
    pub fn create(&mut self) -> &[Core] {
        let id = self.next_id;
        self.next_id += 1;
        self.cores.push(Core::new(id));

        tracing::info!("Created core {} ({} total)", id, self.cores.len());
        &self.cores
    }

    /// 删除指定记录；不存在时不做任何事
    pub fn remove(&mut self, id: CoreId) -> &[Core] {
        let before = self.cores.len();
        self.cores.retain(|core| core.id != id);

        if self.cores.len() < before {
            tracing::info!("Removed core {} ({} remaining)", id, self.cores.len());
        } else {
            tracing::warn!("Remove ignored, core {} not found", id);
        }
        &self.cores
    }

    /// 设置标量字段并刷新派生字段
    ///
    /// 组织类型无法识别时保持原值。
    pub fn update_field(&mut self, id: CoreId, field: CoreField, value: &str) -> &[Core] {
        let Some(core) = self.core_mut(id) else {
            return &self.cores;
        };

        match field {
            CoreField::Number => core.number = value.to_string(),
            CoreField::Location => core.location = value.to_string(),
            CoreField::CoreCount => core.core_count = value.to_string(),
            CoreField::TotalLength => core.total_length = value.to_string(),
            CoreField::TumorLength => core.tumor_length = value.to_string(),
            CoreField::GleasonScore => core.gleason_score = value.to_string(),
            CoreField::CoreType => match value.parse::<CoreType>() {
                Ok(core_type) => core.core_type = core_type,
                Err(e) => {
                    tracing::warn!("Core {} type unchanged: {}", id, e);
                    return &self.cores;
                }
            },
        }

        tracing::debug!("Core {} {} = {:?}", id, field, value);
        derivation::apply(core, field);
        &self.cores
    }

    /// 按字段名设置；字段名无法识别时不做任何事
    pub fn update_field_named(&mut self, id: CoreId, field: &str, value: &str) -> &[Core] {
        match field.parse::<CoreField>() {
            Ok(field) => self.update_field(id, field, value),
            Err(e) => {
                tracing::warn!("Update of core {} ignored: {}", id, e);
                &self.cores
            }
        }
    }

    /// 翻转诊断标志
    ///
    /// 取消癌诊断时一并清空 Gleason 评分和 WHO 分级组，附加特征保持不变。
    pub fn toggle_diagnosis(&mut self, id: CoreId, flag: DiagnosisFlag) -> &[Core] {
        let Some(core) = self.core_mut(id) else {
            return &self.cores;
        };

        let enabled = core.diagnosis.toggle(flag);
        if flag == DiagnosisFlag::Carcinoma && !enabled {
            core.gleason_score.clear();
            core.who_grade = None;
            tracing::debug!("Core {} carcinoma cleared, grading reset", id);
        }

        tracing::debug!("Core {} diagnosis {} -> {}", id, flag, enabled);
        &self.cores
    }

    pub fn toggle_diagnosis_named(&mut self, id: CoreId, flag: &str) -> &[Core] {
        match flag.parse::<DiagnosisFlag>() {
            Ok(flag) => self.toggle_diagnosis(id, flag),
            Err(e) => {
                tracing::warn!("Diagnosis toggle on core {} ignored: {}", id, e);
                &self.cores
            }
        }
    }

    /// 翻转附加特征
    pub fn toggle_feature(&mut self, id: CoreId, flag: FeatureFlag) -> &[Core] {
        let Some(core) = self.core_mut(id) else {
            return &self.cores;
        };

        let enabled = core.additional_features.toggle(flag);
        tracing::debug!("Core {} feature {} -> {}", id, flag, enabled);
        &self.cores
    }

    pub fn toggle_feature_named(&mut self, id: CoreId, flag: &str) -> &[Core] {
        match flag.parse::<FeatureFlag>() {
            Ok(flag) => self.toggle_feature(id, flag),
            Err(e) => {
                tracing::warn!("Feature toggle on core {} ignored: {}", id, e);
                &self.cores
            }
        }
    }

    fn core_mut(&mut self, id: CoreId) -> Option<&mut Core> {
        let core = self.cores.iter_mut().find(|core| core.id == id);
        if core.is_none() {
            tracing::warn!("Core {} not found", id);
        }
        core
    }
}

impl Default for CoreStore {
    fn default() -> Self {
        Self::new()
    }
}
