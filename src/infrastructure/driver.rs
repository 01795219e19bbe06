//! 页面驱动能力
//!
//! 抓取逻辑只依赖这里的两个 trait，不直接接触浏览器。
//! 生产环境由 [`super::ChromePage`] 实现，测试中可以换成内存中的假页面。

use std::time::Duration;

use crate::error::DriverError;

pub type DriverResult<T> = Result<T, DriverError>;

/// 页面中的一个元素
#[allow(async_fn_in_trait)]
pub trait DomElement: Sized {
    /// 可见文本
    async fn inner_text(&self) -> DriverResult<String>;

    async fn inner_html(&self) -> DriverResult<String>;

    async fn attribute(&self, name: &str) -> DriverResult<Option<String>>;

    /// 查找第一个匹配的后代元素
    async fn query(&self, selector: &str) -> DriverResult<Option<Self>>;

    /// 查找所有匹配的后代元素，按文档顺序
    async fn query_all(&self, selector: &str) -> DriverResult<Vec<Self>>;

    async fn click(&self) -> DriverResult<()>;

    /// 下一个兄弟元素的 innerHTML；没有兄弟元素时返回 `None`
    async fn next_sibling_html(&self) -> DriverResult<Option<String>>;
}

/// 单个浏览页面
///
/// 整个程序只有一个页面，顺序使用，不需要加锁。
#[allow(async_fn_in_trait)]
pub trait PageDriver {
    type Element: DomElement;

    /// 导航到 `url`，超过 `timeout` 视为失败
    async fn navigate(&self, url: &str, timeout: Duration) -> DriverResult<()>;

    /// 等待元素出现，超时返回 [`DriverError::Timeout`]
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> DriverResult<Self::Element>;

    async fn query(&self, selector: &str) -> DriverResult<Option<Self::Element>>;

    async fn query_all(&self, selector: &str) -> DriverResult<Vec<Self::Element>>;

    /// 固定时长的等待
    async fn pause(&self, duration: Duration);
}

/// 在 `elements` 中找到第一个可见文本包含 `needle` 的元素
///
/// 代替 Playwright 的 `:has-text()`，CSS 本身不支持按文本匹配。
pub async fn find_by_text<E: DomElement>(elements: Vec<E>, needle: &str) -> DriverResult<Option<E>> {
    for element in elements {
        if element.inner_text().await?.contains(needle) {
            return Ok(Some(element));
        }
    }
    Ok(None)
}
