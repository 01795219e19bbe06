use crate::models::ChapterRef;

/// 解析章节路径
///
/// 路径形如 `/past-years/{exam_family}/{exam}/{subject}/{chapter_slug}`，
/// 按 `/` 切分并丢弃空段后按位置取值。缺失的段为空字符串，不会失败。
pub fn decompose(path: &str) -> ChapterRef {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let segment = |index: usize| parts.get(index).map(|s| s.to_string()).unwrap_or_default();

    let chapter_slug = segment(4);
    ChapterRef {
        exam_family: segment(1),
        exam: segment(2),
        subject: segment(3),
        chapter_name: chapter_slug.replace('-', " "),
        chapter_slug,
    }
}
