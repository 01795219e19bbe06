//! # Examside Scrape
//!
//! 用无头浏览器抓取题库网站的历年真题，每道题输出一个 JSON 文件
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `browser/` - 启动或连接浏览器、请求拦截、会话释放
//! - `infrastructure/` - `PageDriver` / `DomElement` 能力抽象及 chromiumoxide 实现
//!
//! ### ② 业务能力层（Services / Parsing）
//! - `parsing/` - 章节路径、标识符、考试信息的纯文本解析
//! - `services/` - 题型识别与答案提取、记录写入、失败记录
//!
//! ### ③ 流程层（Workflow）
//! - `QuestionBuilder` - 一个题目页面 → 一条 `QuestionRecord`
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 顺序遍历章节，持有浏览器会话
//! - `orchestrator/chapter_processor` - 发现题目链接，逐题处理并写文件
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod parsing;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::BrowserSession;
pub use config::Config;
pub use error::{ConfigError, DriverError, Result, ScrapeError};
pub use infrastructure::{ChromePage, DomElement, PageDriver};
pub use models::{Answer, ChapterRef, QuestionMetadata, QuestionOption, QuestionRecord, QuestionType};
pub use orchestrator::{process_all_chapters, App, ChapterProcessor, ChapterStats, RunStats};
pub use workflow::{QuestionBuilder, QuestionCtx};
