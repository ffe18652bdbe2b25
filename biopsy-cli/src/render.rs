//! 快照输出

use biopsy_admin::OutputFormat;
use biopsy_core::Result;
use biopsy_report::{BiopsyReport, GLEASON_OPTIONS};
use std::io::Write;

/// 按配置格式输出报告
pub fn write_report<W: Write>(out: &mut W, report: &BiopsyReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &report.snapshot())?;
            writeln!(out)?;
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *out, &report.snapshot())?;
            writeln!(out)?;
        }
        OutputFormat::Summary => {
            let summary = report.summary();
            writeln!(out, "report {}", report.id)?;
            writeln!(out, "  cores: {}", summary.total_cores)?;
            writeln!(out, "  carcinoma cores: {}", summary.carcinoma_cores)?;
            writeln!(out, "  highest WHO grade group: {}", display_or_dash(summary.highest_who_grade))?;
            writeln!(out, "  max tumor %: {}", display_or_dash(summary.max_tumor_percentage))?;
        }
    }
    Ok(())
}

/// 输出 Gleason 选项和组织类型
pub fn write_options<W: Write>(out: &mut W) -> Result<()> {
    for option in GLEASON_OPTIONS {
        writeln!(
            out,
            "gleason {} -> WHO {}",
            option.display(),
            display_or_dash(option.grade())
        )?;
    }
    for core_type in biopsy_core::CoreType::ALL {
        writeln!(out, "type {}", core_type)?;
    }
    Ok(())
}

fn display_or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
