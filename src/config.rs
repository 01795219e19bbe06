use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::browser::BlockRule;
use crate::error::ConfigError;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_FILE: &str = "scrape.toml";

/// 默认抓取的章节
const DEFAULT_CHAPTERS: &[&str] = &[
    "/past-years/jee/jee-main/physics/circular-motion",
    "/past-years/jee/jee-main/physics/laws-of-motion",
    "/past-years/jee/jee-main/physics/work-power-and-energy",
    "/past-years/jee/jee-main/physics/center-of-mass",
    "/past-years/jee/jee-main/physics/rotational-motion",
    "/past-years/jee/jee-main/physics/properties-of-matter",
    "/past-years/jee/jee-main/physics/heat-and-thermodynamics",
    "/past-years/jee/jee-main/physics/simple-harmonic-motion",
    "/past-years/jee/jee-main/physics/waves",
    "/past-years/jee/jee-main/physics/gravitation",
    "/past-years/jee/jee-main/physics/electrostatics",
    "/past-years/jee/jee-main/physics/current-electricity",
    "/past-years/jee/jee-main/physics/capacitor",
    "/past-years/jee/jee-main/physics/magnetics",
    "/past-years/jee/jee-main/physics/magnetic-properties-of-matter",
    "/past-years/jee/jee-main/physics/electromagnetic-induction",
    "/past-years/jee/jee-main/physics/alternating-current",
    "/past-years/jee/jee-main/physics/electromagnetic-waves",
    "/past-years/jee/jee-main/physics/wave-optics",
    "/past-years/jee/jee-main/physics/geometrical-optics",
    "/past-years/jee/jee-main/physics/atoms-and-nuclei",
    "/past-years/jee/jee-main/physics/dual-nature-of-radiation",
    "/past-years/jee/jee-main/physics/electronic-devices",
    "/past-years/jee/jee-main/physics/communication-systems",
];

/// 程序配置
///
/// 加载顺序：内置默认值 → TOML 配置文件（可选）→ 环境变量。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库站点根地址
    pub base_url: String,
    /// 待抓取的章节路径
    pub chapters: Vec<String>,
    /// 输出根目录
    pub output_dir: PathBuf,
    /// 已运行浏览器的调试端口；为空时启动新的无头浏览器
    pub browser_debug_port: Option<u16>,
    /// 浏览器可执行文件路径；为空时由 chromiumoxide 自动查找
    pub chrome_executable: Option<PathBuf>,
    /// 是否以无头模式启动
    pub headless: bool,
    pub navigation_timeout_secs: u64,
    pub selector_timeout_secs: u64,
    /// 点击 "Check Answer" 后等待页面变化的上限
    pub reveal_timeout_ms: u64,
    /// 检测到页面变化后的额外等待
    pub settle_delay_ms: u64,
    /// 运行日志文件
    pub output_log_file: String,
    /// 失败题目记录文件
    pub failed_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 请求拦截规则
    pub block_rules: Vec<BlockRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://questions.examside.com".to_string(),
            chapters: DEFAULT_CHAPTERS.iter().map(|s| s.to_string()).collect(),
            output_dir: PathBuf::from("data"),
            browser_debug_port: None,
            chrome_executable: None,
            headless: true,
            navigation_timeout_secs: 60,
            selector_timeout_secs: 20,
            reveal_timeout_ms: 2000,
            settle_delay_ms: 400,
            output_log_file: "output.txt".to_string(),
            failed_log_file: "failed.txt".to_string(),
            verbose_logging: false,
            block_rules: vec![BlockRule::mathjax_cdn()],
        }
    }
}

impl Config {
    /// 按默认顺序加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SCRAPE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut config = Self::from_file_or_default(Path::new(&path))?;
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// 读取 TOML 配置文件；文件不存在时使用默认配置
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 用环境变量覆盖配置
    ///
    /// `lookup` 通常是 `std::env::var`，测试中可以替换。
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = lookup("OUTPUT_DIR") {
            self.output_dir = PathBuf::from(v);
        }
        if let Some(port) = parse_env(&lookup, "BROWSER_DEBUG_PORT", "u16")? {
            self.browser_debug_port = Some(port);
        }
        if let Some(v) = lookup("CHROME_EXECUTABLE") {
            self.chrome_executable = Some(PathBuf::from(v));
        }
        if let Some(v) = parse_env(&lookup, "HEADLESS", "bool")? {
            self.headless = v;
        }
        if let Some(v) = parse_env(&lookup, "NAVIGATION_TIMEOUT_SECS", "u64")? {
            self.navigation_timeout_secs = v;
        }
        if let Some(v) = parse_env(&lookup, "SELECTOR_TIMEOUT_SECS", "u64")? {
            self.selector_timeout_secs = v;
        }
        if let Some(v) = parse_env(&lookup, "REVEAL_TIMEOUT_MS", "u64")? {
            self.reveal_timeout_ms = v;
        }
        if let Some(v) = parse_env(&lookup, "SETTLE_DELAY_MS", "u64")? {
            self.settle_delay_ms = v;
        }
        if let Some(v) = lookup("OUTPUT_LOG_FILE") {
            self.output_log_file = v;
        }
        if let Some(v) = lookup("FAILED_LOG_FILE") {
            self.failed_log_file = v;
        }
        if let Some(v) = parse_env(&lookup, "VERBOSE_LOGGING", "bool")? {
            self.verbose_logging = v;
        }
        Ok(())
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn selector_timeout(&self) -> Duration {
        Duration::from_secs(self.selector_timeout_secs)
    }

    pub fn reveal_timeout(&self) -> Duration {
        Duration::from_millis(self.reveal_timeout_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

fn parse_env<T, F>(lookup: &F, var_name: &str, expected_type: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                var_name: var_name.to_string(),
                value,
                expected_type,
            }),
    }
}
