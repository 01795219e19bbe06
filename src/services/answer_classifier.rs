//! 题型识别与答案提取 - 业务能力层
//!
//! 题型来自题目上的标签文本；正确答案通过多种样式约定判断，
//! 数值题从点击 "Check Answer" 后的题目文本中提取。

use std::sync::LazyLock;

use regex::Regex;

use crate::infrastructure::{find_by_text, selectors, DomElement, DriverResult};
use crate::models::{Answer, QuestionType};

/// 数值答案的文本模式，按顺序尝试
static NUMERIC_ANSWER_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)Correct answer is\s+([-+]?\d*\.?\d+)").unwrap(),
        Regex::new(r"(?i)Correct Answer\s*[:=]\s*([-+]?\d*\.?\d+)").unwrap(),
    ]
});

const CORRECT_CLASS_KEYWORDS: [&str; 3] = ["correct", "green", "success"];

impl QuestionType {
    /// 根据题型标签识别题型
    pub fn from_badge(badge: &str) -> Self {
        let text = badge.to_lowercase();
        if text.contains("single") {
            QuestionType::McqSingle
        } else if text.contains("more") || text.contains("multiple") {
            QuestionType::McqMultiple
        } else if text.contains("numerical") {
            QuestionType::Numerical
        } else {
            QuestionType::Other
        }
    }
}

/// 判断选项是否正确的三种信号
///
/// 任意一种成立即视为正确，按字段顺序判断。
#[derive(Debug, Clone, Default)]
pub struct CorrectnessSignals {
    pub class: Option<String>,
    pub aria_checked: Option<String>,
    pub has_correct_marker: bool,
}

impl CorrectnessSignals {
    pub fn is_correct(&self) -> bool {
        class_marks_correct(self.class.as_deref())
            || self.aria_checked.as_deref() == Some("true")
            || self.has_correct_marker
    }
}

fn class_marks_correct(class: Option<&str>) -> bool {
    let class = class.unwrap_or_default().to_lowercase();
    CORRECT_CLASS_KEYWORDS.iter().any(|k| class.contains(k))
}

/// 判断页面上的选项是否被标为正确
///
/// 前一个信号成立时不再读取后面的信号。
pub async fn is_correct_option<E: DomElement>(option: &E) -> DriverResult<bool> {
    let mut signals = CorrectnessSignals {
        class: option.attribute("class").await?,
        ..Default::default()
    };
    if signals.is_correct() {
        return Ok(true);
    }

    signals.aria_checked = option.attribute("aria-checked").await?;
    if signals.is_correct() {
        return Ok(true);
    }

    let markers = option.query_all(selectors::OPTION_MARKER).await?;
    signals.has_correct_marker = find_by_text(markers, selectors::OPTION_MARKER_TEXT).await?.is_some();
    Ok(signals.is_correct())
}

/// 由正确选项的标签得到答案值
///
/// - 单选：按选项顺序第一个正确的标签
/// - 多选：所有正确标签排序后直接拼接，例如 `{"c", "a"}` → `"ac"`
/// - 没有正确选项时为 `None`
pub fn pick_choice_answer(kind: QuestionType, correct_labels: &[String]) -> Option<String> {
    if correct_labels.is_empty() {
        return None;
    }
    match kind {
        QuestionType::McqSingle => correct_labels.first().cloned(),
        QuestionType::McqMultiple => {
            let mut labels = correct_labels.to_vec();
            labels.sort();
            Some(labels.concat())
        }
        QuestionType::Numerical | QuestionType::Other => None,
    }
}

/// 从题目文本中提取数值答案
pub fn extract_numeric_answer(text: &str) -> Option<String> {
    NUMERIC_ANSWER_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// 读取选项的标签：第一个子 div 的文本，去空白并转小写
pub async fn option_label<E: DomElement>(option: &E) -> DriverResult<String> {
    match option.query(selectors::OPTION_LABEL).await? {
        Some(label) => Ok(label.inner_text().await?.trim().to_lowercase()),
        None => Ok(String::new()),
    }
}

/// 在题目区域中确定答案
///
/// `root` 应是点击 "Check Answer" 之后的题目区域。
pub async fn resolve_answer<E: DomElement>(kind: QuestionType, root: &E) -> DriverResult<Answer> {
    let value = match kind {
        QuestionType::Other => None,
        QuestionType::McqSingle | QuestionType::McqMultiple => {
            let Some(options_root) = root.query(selectors::OPTIONS_ROOT).await? else {
                return Ok(Answer::empty(kind));
            };

            let mut correct = Vec::new();
            for option in options_root.query_all(selectors::OPTION).await? {
                if is_correct_option(&option).await? {
                    correct.push(option_label(&option).await?);
                }
            }
            pick_choice_answer(kind, &correct)
        }
        QuestionType::Numerical => extract_numeric_answer(&root.inner_text().await?),
    };

    Ok(Answer { kind, value })
}
