//! 活检报告演示程序
//!
//! 按典型编辑顺序操作一份报告：录入长度、选择 Gleason 评分、取消癌诊断。

use biopsy::admin::{init_logging, LoggingConfig};
use biopsy::{BiopsyReport, CoreField, DiagnosisFlag, FeatureFlag, GLEASON_OPTIONS};

fn main() -> anyhow::Result<()> {
    // 初始化日志
    init_logging(&LoggingConfig::default())?;

    let mut report = BiopsyReport::default();
    println!("🧪 活检报告演示 ({})\n", report.id);

    // 1. 录入第一条记录
    report.update_field(1, CoreField::Number, "1");
    report.update_field(1, CoreField::Location, "apex links");
    report.toggle_diagnosis(1, DiagnosisFlag::Carcinoma);
    report.update_field(1, CoreField::TotalLength, "10");
    report.update_field(1, CoreField::TumorLength, "3");
    println!("✅ 肿瘤百分比: {:?}", report.cores()[0].tumor_percentage);

    // 2. 选择 Gleason 评分
    let option = GLEASON_OPTIONS[2];
    report.update_field(1, CoreField::GleasonScore, option.score());
    report.toggle_feature(1, FeatureFlag::Pn1);
    println!("✅ Gleason {} -> WHO {:?}", option.display(), report.cores()[0].who_grade);

    // 3. 第二条记录，删除后再添加不会复用标识
    let second = report.add_core().last().map(|core| core.id);
    if let Some(id) = second {
        report.remove_core(id);
    }
    let third = report.add_core().last().map(|core| core.id);
    println!("✅ 删除 {:?} 后新增记录的标识: {:?}", second, third);

    println!("\n📊 报告统计: {:?}", report.summary());

    // 4. 取消癌诊断，评分与分级被清空，肿瘤百分比保留
    report.toggle_diagnosis(1, DiagnosisFlag::Carcinoma);
    let core = &report.cores()[0];
    println!(
        "✅ 取消癌诊断后: gleason={:?} who={:?} tumor%={:?}",
        core.gleason_score, core.who_grade, core.tumor_percentage
    );

    println!("\n{}", serde_json::to_string_pretty(&report.snapshot())?);
    Ok(())
}
