use std::sync::LazyLock;

use regex::Regex;

use crate::models::QuestionMetadata;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"20\d{2}").unwrap());

/// 从题目头部文本解析考试信息
///
/// - `exam_variant`：URL 中的考试类型，如 `jee-main`，连字符替换为空格
/// - 年份取第一个 `20xx`
/// - 出现 "online" 时 mode 为 `online`
/// - "morning" 优先于 "evening"
///
/// `date` 和 `marks` 站点不提供，始终为空。
pub fn extract_metadata(header: &str, exam_variant: &str) -> QuestionMetadata {
    let text = header.to_lowercase();

    let year = YEAR_RE
        .find(&text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let mode = if text.contains("online") { "online" } else { "" };

    let shift = if text.contains("morning") {
        "morning"
    } else if text.contains("evening") {
        "evening"
    } else {
        ""
    };

    QuestionMetadata {
        exam: exam_variant.replace('-', " "),
        year,
        mode: mode.to_string(),
        shift: shift.to_string(),
        ..Default::default()
    }
}
