//! 批量章节处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责章节的遍历和资源管理。
//!
//! 1. **应用初始化**：打开浏览器会话
//! 2. **顺序处理**：逐个章节委托 `ChapterProcessor`，不并发
//! 3. **失败隔离**：单个章节失败只记录，继续下一个章节
//! 4. **资源管理**：唯一持有 `BrowserSession`，结束时关闭
//! 5. **全局统计**：汇总所有章节的处理结果

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::error;

use crate::browser::BrowserSession;
use crate::config::Config;
use crate::infrastructure::{ChromePage, PageDriver};
use crate::orchestrator::chapter_processor::ChapterProcessor;
use crate::parsing::decompose;
use crate::utils::logging::{log_chapter_complete, log_chapter_start, log_startup, print_final_stats};

/// 全局处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub chapters_ok: usize,
    pub chapters_failed: usize,
    pub questions_written: usize,
    pub questions_failed: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    session: BrowserSession,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);
        let session = BrowserSession::open(&config).await?;
        Ok(Self { config, session })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunStats> {
        let started = Instant::now();
        let processor = ChapterProcessor::new(&self.config).context("无法创建章节处理器")?;
        let driver = ChromePage::new(self.session.page().clone());

        let stats = process_all_chapters(&driver, &processor, &self.config.chapters).await;

        print_final_stats(
            stats.chapters_ok,
            stats.chapters_failed,
            stats.questions_written,
            stats.questions_failed,
            started.elapsed(),
            &self.config.output_log_file,
            &self.config.failed_log_file,
        );
        Ok(stats)
    }

    /// 关闭浏览器
    pub async fn shutdown(self) -> Result<()> {
        self.session.close().await
    }
}

/// 顺序处理所有章节
pub async fn process_all_chapters<D: PageDriver>(
    driver: &D,
    processor: &ChapterProcessor,
    chapters: &[String],
) -> RunStats {
    let mut stats = RunStats::default();

    for (idx, chapter_path) in chapters.iter().enumerate() {
        let chapter_num = idx + 1;
        log_chapter_start(chapter_num, chapters.len(), &decompose(chapter_path).to_string());

        match processor.process(driver, chapter_path).await {
            Ok(chapter_stats) => {
                stats.chapters_ok += 1;
                stats.questions_written += chapter_stats.written;
                stats.questions_failed += chapter_stats.failed;
                log_chapter_complete(
                    chapter_num,
                    chapter_stats.written,
                    chapter_stats.failed,
                    chapter_stats.discovered,
                );
            }
            Err(e) => {
                stats.chapters_failed += 1;
                error!("[章节 {}] ❌ 章节处理失败 ({}): {}", chapter_num, chapter_path, e);
            }
        }
    }

    stats
}
