//! 失败记录服务 - 业务能力层
//!
//! 把抓取失败的题目链接和错误信息追加到文本文件，方便之后单独处理。

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

pub struct FailureLog {
    path: String,
}

impl FailureLog {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// 追加一条失败记录：`时间 | 链接 | 错误`
    pub fn write(&self, url: &str, error: &dyn std::fmt::Display) -> Result<()> {
        debug!("写入失败记录: {}", url);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let line = format!(
            "{} | {} | {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            url,
            error.to_string().replace('\n', " ")
        );
        file.write_all(line.as_bytes())?;

        Ok(())
    }
}
