use anyhow::{Context, Result};
use chromiumoxide::{Browser, Page};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::request_filter::{install_request_filter, RequestFilter};
use super::{connect_to_browser, launch_headless_browser};
use crate::config::Config;

/// 浏览器会话
///
/// 持有唯一的浏览器和页面。所有章节和题目复用同一个页面，
/// 结束时必须调用 [`BrowserSession::close`]。
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    interceptor: Option<JoinHandle<()>>,
    /// 浏览器是否由本程序启动（连接模式下不关闭用户的浏览器）
    owned: bool,
}

impl BrowserSession {
    pub async fn open(config: &Config) -> Result<Self> {
        let (mut browser, handler, owned) = match config.browser_debug_port {
            Some(port) => {
                let (browser, handler) = connect_to_browser(port).await?;
                (browser, handler, false)
            }
            None => {
                let (browser, handler) = launch_headless_browser(config).await?;
                (browser, handler, true)
            }
        };

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                if owned {
                    let _ = browser.close().await;
                }
                handler.abort();
                return Err(e).context("创建页面失败");
            }
        };

        let mut session = Self {
            browser,
            page,
            handler,
            interceptor: None,
            owned,
        };

        let filter = RequestFilter::new(config.block_rules.clone());
        if !filter.is_empty() {
            match install_request_filter(&session.page, filter).await {
                Ok(handle) => session.interceptor = Some(handle),
                Err(e) => {
                    session.close().await?;
                    return Err(e).context("启用请求拦截失败");
                }
            }
            debug!("请求拦截已启用");
        }

        info!("✓ 浏览器会话已就绪");
        Ok(session)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 释放浏览器资源
    pub async fn close(mut self) -> Result<()> {
        if let Some(interceptor) = self.interceptor.take() {
            interceptor.abort();
        }

        if self.owned {
            info!("正在关闭浏览器...");
            if let Err(e) = self.browser.close().await {
                warn!("关闭浏览器失败: {}", e);
            }
            if let Err(e) = self.browser.wait().await {
                warn!("等待浏览器进程退出失败: {}", e);
            }
        } else if let Err(e) = self.page.clone().close().await {
            warn!("关闭页面失败: {}", e);
        }

        self.handler.abort();
        Ok(())
    }
}
