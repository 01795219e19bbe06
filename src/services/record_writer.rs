//! 记录写入服务 - 业务能力层
//!
//! 每道题一个 JSON 文件，先写临时文件再重命名，失败时不留下半个文件。

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::models::{ChapterRef, QuestionRecord};
use crate::parsing::normalize_id;

/// 题目文件名：`{subject}-{chapter_name}-{index}.json`（均已规范化）
pub fn record_file_name(chapter: &ChapterRef, index: usize) -> String {
    format!(
        "{}-{}-{}.json",
        normalize_id(&chapter.subject),
        normalize_id(&chapter.chapter_name),
        index
    )
}

/// 确保章节输出目录存在
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| ScrapeError::io(dir, e))
}

/// 把记录写入 `dir/file_name`，已存在的同名文件会被覆盖
pub async fn write_record(dir: &Path, file_name: &str, record: &QuestionRecord) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(record).map_err(|source| ScrapeError::Serialization {
        path: path.clone(),
        source,
    })?;

    let tmp_path = dir.join(format!("{}.tmp", file_name));
    if let Err(e) = fs::write(&tmp_path, json.as_bytes()).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(ScrapeError::io(&tmp_path, e));
    }
    if let Err(e) = fs::rename(&tmp_path, &path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(ScrapeError::io(&path, e));
    }

    debug!("已写入: {}", path.display());
    Ok(path)
}
