//! 题目记录构建 - 流程层
//!
//! 核心职责：把一个题目页面变成一条 `QuestionRecord`
//!
//! 流程顺序：
//! 1. 导航 → 等待题目区域
//! 2. 读取考试信息、题型、题干、选项（必须在显示答案之前读取）
//! 3. 点击 "Check Answer" → 等待页面变化
//! 4. 判断答案 → 读取解析
//!
//! 缺失的可选元素只会得到空字段；导航和等待超时会返回错误。

use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::{DriverError, Result, ScrapeError};
use crate::infrastructure::{find_by_text, selectors, DomElement, DriverResult, PageDriver};
use crate::models::{QuestionOption, QuestionRecord, QuestionType, SOURCE};
use crate::parsing::{extract_metadata, normalize_id};
use crate::services::answer_classifier::{option_label, resolve_answer};
use crate::utils::logging::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;

/// 显示答案后轮询页面变化的间隔
const REVEAL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 构建参数
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    pub navigation_timeout: Duration,
    pub selector_timeout: Duration,
    /// 等待答案显示的上限
    pub reveal_timeout: Duration,
    /// 检测到变化后的额外等待
    pub settle_delay: Duration,
}

impl From<&Config> for BuildOptions {
    fn from(config: &Config) -> Self {
        Self {
            navigation_timeout: config.navigation_timeout(),
            selector_timeout: config.selector_timeout(),
            reveal_timeout: config.reveal_timeout(),
            settle_delay: config.settle_delay(),
        }
    }
}

/// 题目记录构建器
///
/// - 不持有页面，页面由调用方传入
/// - 每次调用只处理一道题
pub struct QuestionBuilder {
    options: BuildOptions,
}

impl QuestionBuilder {
    pub fn new(config: &Config) -> Self {
        Self::with_options(BuildOptions::from(config))
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    pub async fn build<D: PageDriver>(&self, driver: &D, ctx: &QuestionCtx<'_>) -> Result<QuestionRecord> {
        let chapter = ctx.chapter;

        driver.navigate(ctx.url, self.options.navigation_timeout).await?;
        let root = driver
            .wait_for_selector(selectors::QUESTION_ROOT, self.options.selector_timeout)
            .await
            .map_err(|source| page_load_error(ctx.url, source))?;

        let header = text_of(root.query(selectors::HEADER).await?).await?;
        let metadata = extract_metadata(&header, &chapter.exam);

        let badge = text_of(root.query(selectors::BADGE).await?).await?;
        let question_type = QuestionType::from_badge(&badge);
        debug!("{} 题型: {:?} ({})", ctx, question_type, badge.trim());

        let question_html = html_of(root.query(selectors::QUESTION_BODY).await?).await?;
        debug!("{} 题干: {}", ctx, truncate_text(&question_html, 60));
        let options = read_options(&root).await?;

        // 显示答案后页面可能重新渲染，重新获取题目区域
        let root = if self.reveal(driver, &root).await? {
            driver.query(selectors::QUESTION_ROOT).await?.unwrap_or(root)
        } else {
            root
        };

        let answer = resolve_answer(question_type, &root).await?;
        let explanation_html = read_explanation(driver).await?;

        Ok(QuestionRecord {
            id: format!(
                "{}-{}-{}",
                chapter.subject,
                normalize_id(&chapter.chapter_name),
                ctx.index
            ),
            source: SOURCE.to_string(),
            subject: chapter.subject.clone(),
            chapter: chapter.chapter_name.clone(),
            question_type,
            metadata,
            question_html,
            options,
            answer,
            explanation_html,
        })
    }

    /// 点击 "Check Answer"，返回是否点击过
    ///
    /// 点击后轮询题目区域，直到其内容发生变化或超过 `reveal_timeout`，
    /// 之后再等待 `settle_delay`。超时不算错误，按当前页面继续。
    async fn reveal<D: PageDriver>(&self, driver: &D, root: &D::Element) -> Result<bool> {
        let buttons = driver.query_all(selectors::REVEAL_BUTTON).await?;
        let Some(button) = find_by_text(buttons, selectors::REVEAL_BUTTON_TEXT).await? else {
            return Ok(false);
        };

        let before = root.inner_html().await?;
        button.click().await?;

        let attempts = (self.options.reveal_timeout.as_millis() / REVEAL_POLL_INTERVAL.as_millis()).max(1);
        let mut changed = false;
        for _ in 0..attempts {
            driver.pause(REVEAL_POLL_INTERVAL).await;
            if let Some(current) = driver.query(selectors::QUESTION_ROOT).await? {
                if current.inner_html().await? != before {
                    changed = true;
                    break;
                }
            }
        }

        if !changed {
            debug!("点击 Check Answer 后页面未变化 ({:?})", self.options.reveal_timeout);
        }
        driver.pause(self.options.settle_delay).await;
        Ok(true)
    }
}

fn page_load_error(url: &str, source: DriverError) -> ScrapeError {
    if source.is_timeout() {
        ScrapeError::PageLoadTimeout {
            url: url.to_string(),
            source,
        }
    } else {
        ScrapeError::Driver(source)
    }
}

async fn text_of<E: DomElement>(element: Option<E>) -> DriverResult<String> {
    match element {
        Some(element) => element.inner_text().await,
        None => Ok(String::new()),
    }
}

async fn html_of<E: DomElement>(element: Option<E>) -> DriverResult<String> {
    match element {
        Some(element) => Ok(element.inner_html().await?.trim().to_string()),
        None => Ok(String::new()),
    }
}

/// 按顺序读取选项的标签和原始 HTML
async fn read_options<E: DomElement>(root: &E) -> DriverResult<Vec<QuestionOption>> {
    let Some(options_root) = root.query(selectors::OPTIONS_ROOT).await? else {
        return Ok(Vec::new());
    };

    let mut options = Vec::new();
    for option in options_root.query_all(selectors::OPTION).await? {
        options.push(QuestionOption {
            label: option_label(&option).await?,
            html: option.inner_html().await?,
        });
    }
    Ok(options)
}

/// 解析：标题 "Explanation" 之后的兄弟元素
async fn read_explanation<D: PageDriver>(driver: &D) -> DriverResult<String> {
    let headings = driver.query_all(selectors::EXPLANATION_HEADING).await?;
    match find_by_text(headings, selectors::EXPLANATION_HEADING_TEXT).await? {
        Some(heading) => Ok(heading
            .next_sibling_html()
            .await?
            .map(|html| html.trim().to_string())
            .unwrap_or_default()),
        None => Ok(String::new()),
    }
}
