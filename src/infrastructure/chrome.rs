//! chromiumoxide 实现的页面驱动 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露能力，不认识题目和章节。

use std::time::Duration;

use chromiumoxide::{Element, Page};
use tokio::time::{sleep, timeout, Instant};
use tracing::debug;

use super::driver::{DomElement, DriverResult, PageDriver};
use crate::error::DriverError;

/// 轮询元素的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const NEXT_SIBLING_HTML_JS: &str = r#"
    function() {
        const next = this.nextElementSibling;
        return next ? next.innerHTML : null;
    }
"#;

/// 基于 chromiumoxide 的页面
pub struct ChromePage {
    page: Page,
}

impl ChromePage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl PageDriver for ChromePage {
    type Element = ChromeElement;

    async fn navigate(&self, url: &str, limit: Duration) -> DriverResult<()> {
        debug!("导航到: {}", url);
        match timeout(limit, self.page.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(DriverError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(DriverError::Navigation {
                url: url.to_string(),
                reason: format!("超时 ({:?})", limit),
            }),
        }
    }

    async fn wait_for_selector(&self, selector: &str, limit: Duration) -> DriverResult<ChromeElement> {
        let deadline = Instant::now() + limit;
        loop {
            match self.query(selector).await {
                Ok(Some(element)) => return Ok(element),
                Ok(None) => {}
                // 页面仍在加载时文档可能被替换，忽略这类瞬时错误
                Err(e) => debug!("查询 `{}` 失败，继续等待: {}", selector, e),
            }

            if Instant::now() >= deadline {
                return Err(DriverError::Timeout {
                    selector: selector.to_string(),
                    timeout: limit,
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn query(&self, selector: &str) -> DriverResult<Option<ChromeElement>> {
        Ok(self.query_all(selector).await?.into_iter().next())
    }

    async fn query_all(&self, selector: &str) -> DriverResult<Vec<ChromeElement>> {
        let elements = self.page.find_elements(selector).await?;
        Ok(elements.into_iter().map(ChromeElement::new).collect())
    }

    async fn pause(&self, duration: Duration) {
        sleep(duration).await;
    }
}

/// 基于 chromiumoxide 的元素
pub struct ChromeElement {
    element: Element,
}

impl ChromeElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl DomElement for ChromeElement {
    async fn inner_text(&self) -> DriverResult<String> {
        Ok(self.element.inner_text().await?.unwrap_or_default())
    }

    async fn inner_html(&self) -> DriverResult<String> {
        Ok(self.element.inner_html().await?.unwrap_or_default())
    }

    async fn attribute(&self, name: &str) -> DriverResult<Option<String>> {
        Ok(self.element.attribute(name).await?)
    }

    async fn query(&self, selector: &str) -> DriverResult<Option<Self>> {
        Ok(self.query_all(selector).await?.into_iter().next())
    }

    async fn query_all(&self, selector: &str) -> DriverResult<Vec<Self>> {
        let elements = self.element.find_elements(selector).await?;
        Ok(elements.into_iter().map(ChromeElement::new).collect())
    }

    async fn click(&self) -> DriverResult<()> {
        self.element.click().await?;
        Ok(())
    }

    async fn next_sibling_html(&self) -> DriverResult<Option<String>> {
        let returns = self.element.call_js_fn(NEXT_SIBLING_HTML_JS, false).await?;
        match returns.result.value {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(html)) => Ok(Some(html)),
            Some(other) => Err(DriverError::Script(format!(
                "nextElementSibling 返回了非字符串结果: {}",
                other
            ))),
        }
    }
}
