//! 核心数据模型定义

use crate::error::{BiopsyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 穿刺条目标识
pub type CoreId = u32;

/// 单条穿刺组织记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Core {
    pub id: CoreId,
    pub number: String,
    pub location: String,
    pub core_count: String,
    pub total_length: String,
    pub tumor_length: String,
    /// 派生字段，由两段长度计算
    pub tumor_percentage: Option<u32>,
    pub gleason_score: String,
    /// 派生字段，由 Gleason 评分查表得到
    pub who_grade: Option<u8>,
    #[serde(rename = "type")]
    pub core_type: CoreType,
    pub diagnosis: Diagnosis,
    pub additional_features: AdditionalFeatures,
}

impl Core {
    /// 创建空白记录
    pub fn new(id: CoreId) -> Self {
        Self {
            id,
            number: String::new(),
            location: String::new(),
            core_count: String::new(),
            total_length: String::new(),
            tumor_length: String::new(),
            tumor_percentage: None,
            gleason_score: String::new(),
            who_grade: None,
            core_type: CoreType::default(),
            diagnosis: Diagnosis::default(),
            additional_features: AdditionalFeatures::default(),
        }
    }

    /// 是否需要展示癌相关的详细字段
    pub fn shows_carcinoma_details(&self) -> bool {
        self.diagnosis.carcinoma
    }

    /// 仅在诊断为癌时返回附加特征；其余情况下特征保留但不展示
    pub fn visible_features(&self) -> Option<&AdditionalFeatures> {
        self.shows_carcinoma_details()
            .then_some(&self.additional_features)
    }
}

/// 组织学类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoreType {
    #[default]
    #[serde(rename = "acinar")]
    Acinar,
    #[serde(rename = "ductal")]
    Ductal,
    #[serde(rename = "acinar/ductal")]
    AcinarDuctal,
}

impl CoreType {
    /// 可选值，按展示顺序排列
    pub const ALL: [CoreType; 3] = [CoreType::Acinar, CoreType::Ductal, CoreType::AcinarDuctal];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoreType::Acinar => "acinar",
            CoreType::Ductal => "ductal",
            CoreType::AcinarDuctal => "acinar/ductal",
        }
    }
}

impl fmt::Display for CoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoreType {
    type Err = BiopsyError;

    fn from_str(s: &str) -> Result<Self> {
        // "acinar / ductal" 与 "acinar/ductal" 视为同一值
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match compact.as_str() {
            "acinar" | "azinär" => Ok(CoreType::Acinar),
            "ductal" | "duktal" => Ok(CoreType::Ductal),
            "acinar/ductal" | "azinär/duktal" => Ok(CoreType::AcinarDuctal),
            _ => Err(BiopsyError::UnknownCoreType(s.to_string())),
        }
    }
}

/// 诊断标志，彼此独立
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub carcinoma: bool,
    pub hgpin: bool,
    pub asap: bool,
    pub periprostatic_tissue: bool,
    pub no_tissue: bool,
}

impl Diagnosis {
    pub fn get(&self, flag: DiagnosisFlag) -> bool {
        match flag {
            DiagnosisFlag::Carcinoma => self.carcinoma,
            DiagnosisFlag::Hgpin => self.hgpin,
            DiagnosisFlag::Asap => self.asap,
            DiagnosisFlag::PeriprostaticTissue => self.periprostatic_tissue,
            DiagnosisFlag::NoTissue => self.no_tissue,
        }
    }

    /// 翻转指定标志，返回翻转后的值
    pub fn toggle(&mut self, flag: DiagnosisFlag) -> bool {
        let slot = match flag {
            DiagnosisFlag::Carcinoma => &mut self.carcinoma,
            DiagnosisFlag::Hgpin => &mut self.hgpin,
            DiagnosisFlag::Asap => &mut self.asap,
            DiagnosisFlag::PeriprostaticTissue => &mut self.periprostatic_tissue,
            DiagnosisFlag::NoTissue => &mut self.no_tissue,
        };
        *slot = !*slot;
        *slot
    }
}

/// 附加特征，仅在诊断为癌时有临床意义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFeatures {
    #[serde(rename = "pN1")]
    pub pn1: bool,
    pub intraductal_carcinoma: bool,
    pub extraprostatic_extension: bool,
}

impl AdditionalFeatures {
    pub fn get(&self, flag: FeatureFlag) -> bool {
        match flag {
            FeatureFlag::Pn1 => self.pn1,
            FeatureFlag::IntraductalCarcinoma => self.intraductal_carcinoma,
            FeatureFlag::ExtraprostaticExtension => self.extraprostatic_extension,
        }
    }

    /// 翻转指定特征，返回翻转后的值
    pub fn toggle(&mut self, flag: FeatureFlag) -> bool {
        let slot = match flag {
            FeatureFlag::Pn1 => &mut self.pn1,
            FeatureFlag::IntraductalCarcinoma => &mut self.intraductal_carcinoma,
            FeatureFlag::ExtraprostaticExtension => &mut self.extraprostatic_extension,
        };
        *slot = !*slot;
        *slot
    }
}

/// 可由展示层直接编辑的标量字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreField {
    Number,
    Location,
    CoreCount,
    TotalLength,
    TumorLength,
    CoreType,
    GleasonScore,
}

impl CoreField {
    pub const ALL: [CoreField; 7] = [
        CoreField::Number,
        CoreField::Location,
        CoreField::CoreCount,
        CoreField::TotalLength,
        CoreField::TumorLength,
        CoreField::CoreType,
        CoreField::GleasonScore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoreField::Number => "number",
            CoreField::Location => "location",
            CoreField::CoreCount => "coreCount",
            CoreField::TotalLength => "totalLength",
            CoreField::TumorLength => "tumorLength",
            CoreField::CoreType => "type",
            CoreField::GleasonScore => "gleasonScore",
        }
    }
}

impl fmt::Display for CoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoreField {
    type Err = BiopsyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "number" => Ok(CoreField::Number),
            "location" => Ok(CoreField::Location),
            "coreCount" | "core_count" => Ok(CoreField::CoreCount),
            "totalLength" | "total_length" => Ok(CoreField::TotalLength),
            "tumorLength" | "tumor_length" => Ok(CoreField::TumorLength),
            "type" | "coreType" | "core_type" => Ok(CoreField::CoreType),
            "gleasonScore" | "gleason_score" => Ok(CoreField::GleasonScore),
            _ => Err(BiopsyError::UnknownField(s.to_string())),
        }
    }
}

/// 诊断标志名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosisFlag {
    Carcinoma,
    Hgpin,
    Asap,
    PeriprostaticTissue,
    NoTissue,
}

impl DiagnosisFlag {
    pub const ALL: [DiagnosisFlag; 5] = [
        DiagnosisFlag::Carcinoma,
        DiagnosisFlag::Hgpin,
        DiagnosisFlag::Asap,
        DiagnosisFlag::PeriprostaticTissue,
        DiagnosisFlag::NoTissue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosisFlag::Carcinoma => "carcinoma",
            DiagnosisFlag::Hgpin => "hgpin",
            DiagnosisFlag::Asap => "asap",
            DiagnosisFlag::PeriprostaticTissue => "periprostaticTissue",
            DiagnosisFlag::NoTissue => "noTissue",
        }
    }
}

impl fmt::Display for DiagnosisFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosisFlag {
    type Err = BiopsyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "carcinoma" => Ok(DiagnosisFlag::Carcinoma),
            "hgpin" => Ok(DiagnosisFlag::Hgpin),
            "asap" => Ok(DiagnosisFlag::Asap),
            "periprostaticTissue" | "periprostatic_tissue" => Ok(DiagnosisFlag::PeriprostaticTissue),
            "noTissue" | "no_tissue" => Ok(DiagnosisFlag::NoTissue),
            _ => Err(BiopsyError::UnknownDiagnosisFlag(s.to_string())),
        }
    }
}

/// 附加特征名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    Pn1,
    IntraductalCarcinoma,
    ExtraprostaticExtension,
}

impl FeatureFlag {
    pub const ALL: [FeatureFlag; 3] = [
        FeatureFlag::Pn1,
        FeatureFlag::IntraductalCarcinoma,
        FeatureFlag::ExtraprostaticExtension,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureFlag::Pn1 => "pN1",
            FeatureFlag::IntraductalCarcinoma => "intraductalCarcinoma",
            FeatureFlag::ExtraprostaticExtension => "extraprostaticExtension",
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureFlag {
    type Err = BiopsyError;

    fn from_str(s: &str) -> Result<Self> {
        // 同时接受表单缩写 (pn1 / idcP / epe)
        match s {
            "pN1" | "pn1" => Ok(FeatureFlag::Pn1),
            "intraductalCarcinoma" | "intraductal_carcinoma" | "idcP" => {
                Ok(FeatureFlag::IntraductalCarcinoma)
            }
            "extraprostaticExtension" | "extraprostatic_extension" | "epe" => {
                Ok(FeatureFlag::ExtraprostaticExtension)
            }
            _ => Err(BiopsyError::UnknownFeatureFlag(s.to_string())),
        }
    }
}
