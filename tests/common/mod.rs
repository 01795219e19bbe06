//! 测试用的内存页面驱动
//!
//! 每个 URL 对应一个假文档；文档和元素的子节点按选择器字符串直接索引，
//! 不实现真正的 CSS 匹配。点击 "Check Answer" 后页面切换到显示答案后的文档。
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use examside_scrape::config::Config;
use examside_scrape::error::DriverError;
use examside_scrape::infrastructure::{selectors, DomElement, DriverResult, PageDriver};

pub const BASE_URL: &str = "https://questions.examside.com";

#[derive(Clone, Default)]
pub struct FakeElement {
    text: String,
    html: String,
    attrs: HashMap<String, String>,
    children: Vec<(String, FakeElement)>,
    next_sibling: Option<String>,
    on_click: Option<Arc<AtomicBool>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.html = html.to_string();
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn child(mut self, selector: &str, child: FakeElement) -> Self {
        self.children.push((selector.to_string(), child));
        self
    }

    pub fn sibling(mut self, html: &str) -> Self {
        self.next_sibling = Some(html.to_string());
        self
    }

    fn on_click(mut self, flag: Arc<AtomicBool>) -> Self {
        self.on_click = Some(flag);
        self
    }
}

impl DomElement for FakeElement {
    async fn inner_text(&self) -> DriverResult<String> {
        Ok(self.text.clone())
    }

    async fn inner_html(&self) -> DriverResult<String> {
        Ok(self.html.clone())
    }

    async fn attribute(&self, name: &str) -> DriverResult<Option<String>> {
        Ok(self.attrs.get(name).cloned())
    }

    async fn query(&self, selector: &str) -> DriverResult<Option<Self>> {
        Ok(self
            .children
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, e)| e.clone()))
    }

    async fn query_all(&self, selector: &str) -> DriverResult<Vec<Self>> {
        Ok(self
            .children
            .iter()
            .filter(|(s, _)| s == selector)
            .map(|(_, e)| e.clone())
            .collect())
    }

    async fn click(&self) -> DriverResult<()> {
        if let Some(flag) = &self.on_click {
            flag.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    async fn next_sibling_html(&self) -> DriverResult<Option<String>> {
        Ok(self.next_sibling.clone())
    }
}

/// 一个页面：显示答案前后的两个文档
struct FakeDocument {
    before: FakeElement,
    after: Option<FakeElement>,
}

/// 选项
#[derive(Clone, Default)]
pub struct OptionFixture {
    pub label: &'static str,
    pub html: &'static str,
    pub class: Option<&'static str>,
    pub aria_checked: Option<&'static str>,
    pub marker: Option<&'static str>,
    /// 显示答案后选项的 HTML，默认与 `html` 相同
    pub revealed_html: Option<&'static str>,
}

impl OptionFixture {
    pub fn plain(label: &'static str, html: &'static str) -> Self {
        Self {
            label,
            html,
            ..Default::default()
        }
    }
}

/// 题目页面
#[derive(Clone, Default)]
pub struct QuestionFixture {
    pub header: Option<&'static str>,
    pub badge: Option<&'static str>,
    pub body: Option<&'static str>,
    pub options: Vec<OptionFixture>,
    /// 显示答案后题目区域的额外文本
    pub revealed_text: &'static str,
    pub explanation: Option<&'static str>,
    pub reveal_button: bool,
    /// 点击 "Check Answer" 后页面不变化
    pub reveal_ignored: bool,
}

impl QuestionFixture {
    pub fn mcq(badge: &'static str, options: Vec<OptionFixture>) -> Self {
        Self {
            header: Some("JEE Main 2021 (Online) 25th February Morning Shift"),
            badge: Some(badge),
            body: Some("  <p>A particle moves in a circle of radius r.</p>\n"),
            options,
            explanation: Some("Centripetal force"),
            reveal_button: true,
            ..Default::default()
        }
    }

    fn root(&self, revealed: bool) -> FakeElement {
        let mut root = FakeElement::new();
        if let Some(header) = self.header {
            root = root.child(selectors::HEADER, FakeElement::new().text(header));
        }
        if let Some(badge) = self.badge {
            root = root.child(selectors::BADGE, FakeElement::new().text(badge));
        }
        if let Some(body) = self.body {
            root = root.child(selectors::QUESTION_BODY, FakeElement::new().html(body));
        }

        if !self.options.is_empty() {
            let mut options_root = FakeElement::new();
            for option in &self.options {
                let html = match (revealed, option.revealed_html) {
                    (true, Some(html)) => html,
                    _ => option.html,
                };
                let mut el = FakeElement::new()
                    .html(html)
                    .child(
                        selectors::OPTION_LABEL,
                        FakeElement::new().text(&format!(" {} ", option.label.to_uppercase())),
                    );
                if revealed {
                    if let Some(class) = option.class {
                        el = el.attr("class", class);
                    }
                    if let Some(checked) = option.aria_checked {
                        el = el.attr("aria-checked", checked);
                    }
                    if let Some(marker) = option.marker {
                        el = el.child(selectors::OPTION_MARKER, FakeElement::new().text(marker));
                    }
                }
                options_root = options_root.child(selectors::OPTION, el);
            }
            root = root.child(selectors::OPTIONS_ROOT, options_root);
        }

        let body = self.body.unwrap_or_default();
        if revealed {
            root.text(&format!("{}\n{}", body, self.revealed_text))
                .html(&format!("{}<div class=\"answer\">revealed</div>", body))
        } else {
            root.text(body).html(body)
        }
    }

    fn explanation_heading(&self) -> Option<FakeElement> {
        self.explanation.map(|html| {
            FakeElement::new()
                .text("Explanation")
                .sibling(&format!("\n  <p>{}</p>  ", html))
        })
    }
}

/// 内存中的假页面
pub struct FakePage {
    documents: HashMap<String, FakeDocument>,
    failing: HashSet<String>,
    current: Mutex<Option<String>>,
    revealed: Arc<AtomicBool>,
    visits: Mutex<Vec<String>>,
    pauses: Mutex<Vec<Duration>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            failing: HashSet::new(),
            current: Mutex::new(None),
            revealed: Arc::new(AtomicBool::new(false)),
            visits: Mutex::new(Vec::new()),
            pauses: Mutex::new(Vec::new()),
        }
    }

    /// 章节列表页，`hrefs` 为题目链接
    pub fn with_chapter(mut self, path: &str, hrefs: &[&str]) -> Self {
        let mut doc = FakeElement::new();
        for href in hrefs {
            doc = doc.child(selectors::QUESTION_LINK, FakeElement::new().attr("href", href));
        }
        self.documents.insert(
            absolute(path),
            FakeDocument {
                before: doc,
                after: None,
            },
        );
        self
    }

    pub fn with_question(mut self, path: &str, fixture: &QuestionFixture) -> Self {
        let mut before = FakeElement::new().child(selectors::QUESTION_ROOT, fixture.root(false));

        let after = if fixture.reveal_button {
            let mut button = FakeElement::new().text("Check Answer");
            if !fixture.reveal_ignored {
                button = button.on_click(self.revealed.clone());
            }
            before = before
                .child(selectors::REVEAL_BUTTON, FakeElement::new().text("Bookmark"))
                .child(selectors::REVEAL_BUTTON, button);

            let mut after = FakeElement::new()
                .child(selectors::QUESTION_ROOT, fixture.root(true))
                .child(selectors::EXPLANATION_HEADING, FakeElement::new().text("Options"));
            if let Some(heading) = fixture.explanation_heading() {
                after = after.child(selectors::EXPLANATION_HEADING, heading);
            }
            Some(after)
        } else {
            // 没有按钮的页面直接显示答案
            before = FakeElement::new().child(selectors::QUESTION_ROOT, fixture.root(true));
            if let Some(heading) = fixture.explanation_heading() {
                before = before.child(selectors::EXPLANATION_HEADING, heading);
            }
            None
        };

        self.documents.insert(absolute(path), FakeDocument { before, after });
        self
    }

    /// 一个能打开但永远不出现题目区域的页面
    pub fn with_blank(mut self, path: &str) -> Self {
        self.documents.insert(
            absolute(path),
            FakeDocument {
                before: FakeElement::new(),
                after: None,
            },
        );
        self
    }

    /// 导航到该地址会失败
    pub fn with_failing(mut self, path: &str) -> Self {
        self.failing.insert(absolute(path));
        self
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }

    fn document(&self) -> Option<FakeElement> {
        let current = self.current.lock().unwrap().clone()?;
        let doc = self.documents.get(&current)?;
        match (&doc.after, self.revealed.load(Ordering::SeqCst)) {
            (Some(after), true) => Some(after.clone()),
            _ => Some(doc.before.clone()),
        }
    }
}

impl PageDriver for FakePage {
    type Element = FakeElement;

    async fn navigate(&self, url: &str, _timeout: Duration) -> DriverResult<()> {
        self.visits.lock().unwrap().push(url.to_string());
        if self.failing.contains(url) {
            return Err(DriverError::Navigation {
                url: url.to_string(),
                reason: "net::ERR_CONNECTION_RESET".to_string(),
            });
        }
        if !self.documents.contains_key(url) {
            return Err(DriverError::Navigation {
                url: url.to_string(),
                reason: "404".to_string(),
            });
        }
        *self.current.lock().unwrap() = Some(url.to_string());
        self.revealed.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> DriverResult<FakeElement> {
        self.query(selector).await?.ok_or_else(|| DriverError::Timeout {
            selector: selector.to_string(),
            timeout,
        })
    }

    async fn query(&self, selector: &str) -> DriverResult<Option<FakeElement>> {
        match self.document() {
            Some(doc) => doc.query(selector).await,
            None => Ok(None),
        }
    }

    async fn query_all(&self, selector: &str) -> DriverResult<Vec<FakeElement>> {
        match self.document() {
            Some(doc) => doc.query_all(selector).await,
            None => Ok(Vec::new()),
        }
    }

    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}

pub fn absolute(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

/// 输出到临时目录的测试配置
pub fn test_config(dir: &Path) -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        output_dir: dir.join("data"),
        failed_log_file: dir.join("failed.txt").to_string_lossy().to_string(),
        output_log_file: dir.join("output.txt").to_string_lossy().to_string(),
        reveal_timeout_ms: 300,
        settle_delay_ms: 0,
        ..Config::default()
    }
}
