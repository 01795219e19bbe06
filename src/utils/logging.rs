/// 日志工具模块
///
/// 初始化 tracing 订阅器，并提供进度和统计信息的输出函数
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// 初始化日志：同时输出到终端和日志文件
///
/// `RUST_LOG` 优先；未设置时按 `verbose_logging` 选择 debug / info。
pub fn init(config: &Config) -> Result<()> {
    init_log_file(&config.output_log_file)?;

    let level = if config.verbose_logging { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.output_log_file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    Ok(())
}

/// 初始化日志文件，写入时间头
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题库抓取日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库抓取");
    info!("🌐 站点: {}", config.base_url);
    info!("📚 章节数: {}", config.chapters.len());
    info!("📁 输出目录: {}", config.output_dir.display());
    info!("{}", "=".repeat(60));
}

pub fn log_chapter_start(chapter_num: usize, total: usize, title: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📘 [章节 {}/{}] 开始抓取: {}", chapter_num, total, title);
    info!("{}", "=".repeat(60));
}

pub fn log_chapter_complete(chapter_num: usize, written: usize, failed: usize, discovered: usize) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ [章节 {}] 完成: 成功 {}, 失败 {}, 共 {} 道题",
        chapter_num, written, failed, discovered
    );
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
#[allow(clippy::too_many_arguments)]
pub fn print_final_stats(
    chapters_ok: usize,
    chapters_failed: usize,
    written: usize,
    failed: usize,
    elapsed: Duration,
    log_file_path: &str,
    failed_file_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("耗时: {:.1} 秒", elapsed.as_secs_f64());
    info!("{}", "=".repeat(60));
    info!("📚 章节: 成功 {}, 失败 {}", chapters_ok, chapters_failed);
    info!("✅ 题目成功: {}", written);
    info!("❌ 题目失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
    if failed > 0 {
        info!("失败题目已记录至: {}", failed_file_path);
    }
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
