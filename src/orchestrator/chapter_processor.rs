//! 单个章节处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **解析章节**：章节路径 → `ChapterRef`
//! 2. **准备目录**：创建章节输出目录
//! 3. **发现题目**：打开章节列表页，收集题目链接（去重并排序）
//! 4. **逐题处理**：委托 `QuestionBuilder`，成功写文件，失败记录后继续
//! 5. **统计输出**：记录成功/失败数量

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{selectors, DomElement, PageDriver};
use crate::parsing::decompose;
use crate::services::{ensure_dir, record_file_name, write_record, FailureLog};
use crate::workflow::{QuestionBuilder, QuestionCtx};

/// 章节处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChapterStats {
    pub discovered: usize,
    pub written: usize,
    pub failed: usize,
}

/// 章节处理器
///
/// 不持有页面；同一个处理器依次处理所有章节。
pub struct ChapterProcessor {
    base_url: Url,
    output_dir: PathBuf,
    navigation_timeout: Duration,
    selector_timeout: Duration,
    builder: QuestionBuilder,
    failure_log: FailureLog,
}

impl ChapterProcessor {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|source| ScrapeError::InvalidUrl {
            url: config.base_url.clone(),
            source,
        })?;

        Ok(Self {
            base_url,
            output_dir: config.output_dir.clone(),
            navigation_timeout: config.navigation_timeout(),
            selector_timeout: config.selector_timeout(),
            builder: QuestionBuilder::new(config),
            failure_log: FailureLog::with_path(config.failed_log_file.clone()),
        })
    }

    /// 处理一个章节
    ///
    /// 章节列表页打不开时返回错误；单道题失败只记录，不影响其他题目。
    pub async fn process<D: PageDriver>(&self, driver: &D, chapter_path: &str) -> Result<ChapterStats> {
        let chapter = decompose(chapter_path);
        let out_dir = chapter.output_dir(&self.output_dir);
        ensure_dir(&out_dir).await?;

        let chapter_url = self.resolve(chapter_path)?;
        let links = self.discover_links(driver, &chapter_url).await?;
        info!("🔗 找到 {} 道题目", links.len());

        let mut stats = ChapterStats {
            discovered: links.len(),
            ..Default::default()
        };

        for (idx, url) in links.iter().enumerate() {
            let ctx = QuestionCtx::new(url, idx + 1, links.len(), &chapter);
            debug!("{} {}", ctx, url);

            match self.process_question(driver, &ctx, &out_dir).await {
                Ok(path) => {
                    stats.written += 1;
                    info!("{} ✓ {}", ctx, file_name_of(&path));
                }
                Err(e) => {
                    stats.failed += 1;
                    error!("{} ❌ {} {}", ctx, url, e);
                    if let Err(log_err) = self.failure_log.write(url, &e) {
                        warn!("写入失败记录失败: {}", log_err);
                    }
                }
            }
        }

        Ok(stats)
    }

    async fn process_question<D: PageDriver>(
        &self,
        driver: &D,
        ctx: &QuestionCtx<'_>,
        out_dir: &Path,
    ) -> Result<PathBuf> {
        let record = self.builder.build(driver, ctx).await?;
        write_record(out_dir, &record_file_name(ctx.chapter, ctx.index), &record).await
    }

    /// 打开章节列表页并收集题目链接
    async fn discover_links<D: PageDriver>(&self, driver: &D, chapter_url: &str) -> Result<Vec<String>> {
        driver.navigate(chapter_url, self.navigation_timeout).await?;
        driver
            .wait_for_selector(selectors::QUESTION_LINK, self.selector_timeout)
            .await
            .map_err(|source| ScrapeError::ChapterLoadTimeout {
                url: chapter_url.to_string(),
                source,
            })?;

        let mut hrefs = Vec::new();
        for anchor in driver.query_all(selectors::QUESTION_LINK).await? {
            if let Some(href) = anchor.attribute("href").await? {
                hrefs.push(href);
            }
        }
        Ok(resolve_links(&self.base_url, &hrefs))
    }

    fn resolve(&self, path: &str) -> Result<String> {
        self.base_url
            .join(path)
            .map(String::from)
            .map_err(|source| ScrapeError::InvalidUrl {
                url: path.to_string(),
                source,
            })
    }
}

/// 把链接解析为绝对地址，去重并按字典序排序
///
/// 排序保证同样的题目集合在每次运行中得到同样的编号。
/// 无法解析的链接记录警告后跳过，不影响同章节的其他题目。
pub fn resolve_links(base_url: &Url, hrefs: &[String]) -> Vec<String> {
    let mut links = BTreeSet::new();
    for href in hrefs {
        match base_url.join(href) {
            Ok(absolute) => {
                links.insert(String::from(absolute));
            }
            Err(e) => warn!("⚠️ 跳过无法解析的链接 {}: {}", href, e),
        }
    }
    links.into_iter().collect()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
