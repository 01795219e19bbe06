//! 题库页面的选择器和文本标记

/// 章节列表页中的题目链接
pub const QUESTION_LINK: &str = "a[href*='/question/']";

/// 题目区域
pub const QUESTION_ROOT: &str = ".question-component";
/// 题目区域中的考试信息（年份、场次）
pub const HEADER: &str = ".font-semibold";
/// 题型标签
pub const BADGE: &str = ".px-1\\.5";
pub const QUESTION_BODY: &str = ".question";

pub const OPTIONS_ROOT: &str = ".options";
pub const OPTION: &str = "[role='button']";
pub const OPTION_LABEL: &str = "div:first-child";
/// 选项内标注正确答案的元素
pub const OPTION_MARKER: &str = "span";
pub const OPTION_MARKER_TEXT: &str = "Correct";

pub const REVEAL_BUTTON: &str = "button";
pub const REVEAL_BUTTON_TEXT: &str = "Check Answer";

pub const EXPLANATION_HEADING: &str = "h2";
pub const EXPLANATION_HEADING_TEXT: &str = "Explanation";
