//! 题目处理上下文
//!
//! 封装"我正在处理哪个章节的第几题"这一信息

use std::fmt::Display;

use crate::models::ChapterRef;

/// 题目处理上下文
#[derive(Debug, Clone)]
pub struct QuestionCtx<'a> {
    /// 题目页面地址
    pub url: &'a str,

    /// 题目在章节中的索引（从1开始），决定记录 ID 和文件名
    pub index: usize,

    /// 章节题目总数（仅用于日志显示）
    pub total: usize,

    pub chapter: &'a ChapterRef,
}

impl<'a> QuestionCtx<'a> {
    pub fn new(url: &'a str, index: usize, total: usize, chapter: &'a ChapterRef) -> Self {
        Self {
            url,
            index,
            total,
            chapter,
        }
    }
}

impl Display for QuestionCtx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} 题目 {}/{}]",
            self.chapter.chapter_slug, self.index, self.total
        )
    }
}
