//! 错误类型
//!
//! - `DriverError`：页面驱动层（浏览器 / 假驱动）的错误
//! - `ScrapeError`：抓取流程中的错误，决定失败影响的范围（单题 / 单章节）
//! - `ConfigError`：配置加载错误

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// 页面驱动错误
#[derive(Debug, Error)]
pub enum DriverError {
    /// 等待元素出现超时
    #[error("等待元素 `{selector}` 超时 ({timeout:?})")]
    Timeout { selector: String, timeout: Duration },

    /// 导航失败（包括导航超时）
    #[error("导航到 {url} 失败: {reason}")]
    Navigation { url: String, reason: String },

    /// Chrome DevTools 协议错误
    #[error("浏览器协议错误: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    /// 页面脚本返回了无法识别的结果
    #[error("执行脚本失败: {0}")]
    Script(String),
}

impl DriverError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DriverError::Timeout { .. })
    }
}

/// 抓取错误
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// 章节列表页中的题目链接没有出现，整个章节放弃
    #[error("章节页面加载超时: {url}: {source}")]
    ChapterLoadTimeout {
        url: String,
        #[source]
        source: DriverError,
    },

    /// 题目页面的题目区域没有出现，只放弃这一道题
    #[error("题目页面加载超时: {url}: {source}")]
    PageLoadTimeout {
        url: String,
        #[source]
        source: DriverError,
    },

    /// 其他驱动错误
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// JSON 序列化失败
    #[error("序列化失败 ({}): {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 目录创建或文件写入失败
    #[error("文件操作失败 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 题目链接无法解析为绝对地址
    #[error("无法解析链接 {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ScrapeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({}): {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    InvalidEnv {
        var_name: String,
        value: String,
        expected_type: &'static str,
    },
}

/// 抓取结果类型
pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
