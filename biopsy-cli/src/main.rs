//! 活检报告命令行程序
//!
//! 从标准输入或脚本文件逐行读取编辑命令，驱动记录存储并输出报告快照。

mod commands;
mod render;

use anyhow::{Context, Result};
use biopsy_admin::{init_logging, ConfigManager, OutputFormat};
use biopsy_report::BiopsyReport;
use clap::Parser;
use commands::Command;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::{info, warn};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "biopsy")]
#[command(about = "Prostate biopsy report editor")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 日志级别，覆盖配置文件
    #[arg(short, long)]
    log_level: Option<String>,

    /// 输出格式 (json, pretty, summary)
    #[arg(short, long)]
    format: Option<String>,

    /// 命令脚本，缺省时读取标准输入
    #[arg(short, long)]
    script: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config_manager = ConfigManager::new(args.config.as_deref())?;
    if let Some(level) = &args.log_level {
        let mut config = config_manager.config().clone();
        config.logging.level = level.clone();
        config_manager.update_config(config)?;
    }
    let config = config_manager.config().clone();

    // 初始化日志
    init_logging(&config.logging)?;

    let format = match &args.format {
        Some(format) => format.parse::<OutputFormat>()?,
        None => config.output.format,
    };

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open script {}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut report = BiopsyReport::new(config.store.initial_cores);
    info!("Report {} ready, output format {}", report.id, format);

    let stdout = io::stdout();
    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read command input")?;
        match Command::parse(&line) {
            Ok(Some(Command::Show)) => render::write_report(&mut stdout.lock(), &report, format)?,
            Ok(Some(Command::Options)) => render::write_options(&mut stdout.lock())?,
            Ok(Some(command)) => command.apply(&mut report),
            Ok(None) => {}
            Err(e) => {
                warn!("line {}: {}", index + 1, e);
                eprintln!("line {}: {}", index + 1, e);
            }
        }
    }

    render::write_report(&mut stdout.lock(), &report, format)?;
    Ok(())
}
