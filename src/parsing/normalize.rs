/// 把任意文本转换为只含小写 ASCII 字母和数字的标识符
///
/// 用于生成记录 ID 和文件名，例如 `"Circular Motion"` → `"circularmotion"`。
pub fn normalize_id(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
