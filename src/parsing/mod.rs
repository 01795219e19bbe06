//! 纯文本解析：章节路径、标识符、考试信息
//!
//! 这里的函数都不接触页面，可以直接对字符串做单元测试。

pub mod metadata;
pub mod normalize;
pub mod path;

pub use metadata::extract_metadata;
pub use normalize::normalize_id;
pub use path::decompose;
