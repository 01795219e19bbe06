//! 请求拦截
//!
//! 屏蔽体积大、对抓取无用的第三方脚本（例如 CDN 上的 MathJax），
//! 减少页面加载时间。

use chromiumoxide::cdp::browser_protocol::fetch::{
    ContinueRequestParams, EnableParams, EventRequestPaused, FailRequestParams, RequestPattern,
};
use chromiumoxide::cdp::browser_protocol::network::ErrorReason;
use chromiumoxide::Page;
use futures::StreamExt;
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// 屏蔽规则
///
/// URL（小写）包含 `keyword`，并且包含 `hosts` 中任意一项时屏蔽；
/// `hosts` 为空时只看 `keyword`。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BlockRule {
    pub keyword: String,
    #[serde(default)]
    pub hosts: Vec<String>,
}

impl BlockRule {
    pub fn mathjax_cdn() -> Self {
        Self {
            keyword: "mathjax".to_string(),
            hosts: vec!["cdn.jsdelivr.net".to_string(), "cdnjs".to_string()],
        }
    }

    fn matches(&self, url_lower: &str) -> bool {
        url_lower.contains(&self.keyword.to_lowercase())
            && (self.hosts.is_empty()
                || self
                    .hosts
                    .iter()
                    .any(|host| url_lower.contains(&host.to_lowercase())))
    }
}

/// 无状态的请求过滤器
#[derive(Clone, Debug, Default)]
pub struct RequestFilter {
    rules: Vec<BlockRule>,
}

impl RequestFilter {
    pub fn new(rules: Vec<BlockRule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn should_block(&self, url: &str) -> bool {
        let url_lower = url.to_lowercase();
        self.rules.iter().any(|rule| rule.matches(&url_lower))
    }
}

/// 在页面上启用请求拦截
///
/// 返回处理拦截事件的后台任务，页面关闭后任务自然结束。
pub async fn install_request_filter(page: &Page, filter: RequestFilter) -> anyhow::Result<JoinHandle<()>> {
    // 先订阅再启用，避免漏掉第一批请求
    let mut paused = page.event_listener::<EventRequestPaused>().await?;
    page.execute(
        EnableParams::builder()
            .pattern(RequestPattern::builder().url_pattern("*").build())
            .build(),
    )
    .await?;

    let page = page.clone();
    let handle = tokio::spawn(async move {
        while let Some(event) = paused.next().await {
            let url = &event.request.url;
            let result = if filter.should_block(url) {
                debug!("🚫 屏蔽请求: {}", url);
                page.execute(FailRequestParams::new(
                    event.request_id.clone(),
                    ErrorReason::BlockedByClient,
                ))
                .await
                .map(|_| ())
            } else {
                page.execute(ContinueRequestParams::new(event.request_id.clone()))
                    .await
                    .map(|_| ())
            };

            if let Err(e) = result {
                warn!("处理拦截请求失败 ({}): {}", url, e);
            }
        }
    });

    Ok(handle)
}
