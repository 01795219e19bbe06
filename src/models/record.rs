use serde::{Deserialize, Serialize};

/// 记录来源标识
pub const SOURCE: &str = "examgoal";

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    McqSingle,
    McqMultiple,
    Numerical,
    Other,
}

/// 分值（站点不提供，保留字段）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marks {
    pub positive: Option<f64>,
    pub negative: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionMetadata {
    pub exam: String,
    pub year: String,
    pub mode: String,
    /// 始终为空，保留字段
    pub date: String,
    pub shift: String,
    pub marks: Marks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub value: Option<String>,
}

impl Answer {
    pub fn empty(kind: QuestionType) -> Self {
        Self { kind, value: None }
    }
}

/// 一道题的完整记录，每道题写入一个 JSON 文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub source: String,
    pub subject: String,
    pub chapter: String,
    pub question_type: QuestionType,
    pub metadata: QuestionMetadata,
    pub question_html: String,
    pub options: Vec<QuestionOption>,
    pub answer: Answer,
    pub explanation_html: String,
}
