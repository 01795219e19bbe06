use std::fmt::Display;
use std::path::{Path, PathBuf};

/// 从章节路径解析出的章节信息
///
/// 例如 `/past-years/jee/jee-main/physics/circular-motion`：
/// `exam_family = "jee"`, `exam = "jee-main"`, `subject = "physics"`,
/// `chapter_slug = "circular-motion"`, `chapter_name = "circular motion"`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterRef {
    pub exam_family: String,
    /// 考试类型（URL 中的 exam variant）
    pub exam: String,
    pub subject: String,
    pub chapter_slug: String,
    pub chapter_name: String,
}

impl ChapterRef {
    /// 章节输出目录：`{root}/{exam_family}/{exam}/{subject}/{chapter_slug}`
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.exam_family)
            .join(&self.exam)
            .join(&self.subject)
            .join(&self.chapter_slug)
    }
}

impl Display for ChapterRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {} / {}", self.exam, self.subject, self.chapter_name)
    }
}
