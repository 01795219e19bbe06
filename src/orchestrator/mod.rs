//! 编排层（Orchestration Layer）
//!
//! ```text
//! batch_processor (处理 Vec<章节路径>)
//!     ↓
//! chapter_processor (处理一个章节的题目链接)
//!     ↓
//! workflow::QuestionBuilder (处理单个题目页面)
//!     ↓
//! services / parsing (答案判断、文件写入、文本解析)
//!     ↓
//! infrastructure (页面驱动)
//! ```
//!
//! 只有编排层持有浏览器会话；下层只通过 `PageDriver` 使用页面。

pub mod batch_processor;
pub mod chapter_processor;

pub use batch_processor::{process_all_chapters, App, RunStats};
pub use chapter_processor::{resolve_links, ChapterProcessor, ChapterStats};
