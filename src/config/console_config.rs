// ==========================================
// 船舶正午报告控制台 - 控制台配置
// ==========================================
// 职责: 命令行参数与环境变量解析、配置校验
// 优先级: 命令行 > 环境变量 > 默认值
// ==========================================

use clap::{Parser, ValueEnum};
use std::time::Duration;
use thiserror::Error;

use crate::api::http_backend::normalize_base_url;
use crate::i18n;

/// 默认后端地址（uvicorn 默认端口）
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 配置错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("后端地址无效: {0}")]
    InvalidBaseUrl(String),

    #[error("不支持的语言: {0}（可选: en, zh-CN）")]
    UnsupportedLocale(String),

    #[error("请求超时必须大于 0 秒")]
    ZeroTimeout,
}

// ==========================================
// ConsoleArgs - 命令行参数
// ==========================================
#[derive(Debug, Clone, Parser)]
#[command(
    name = "noon-report-console",
    version,
    about = "Noon report entry console with contradiction review"
)]
pub struct ConsoleArgs {
    /// 后端根地址
    #[arg(long, env = "NOON_CONSOLE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// 界面语言（en / zh-CN）
    #[arg(long, env = "NOON_CONSOLE_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// 显示数据时不按最近提交的船舶过滤
    #[arg(long, default_value_t = false)]
    pub no_vessel_filter: bool,

    /// 启动时不加载数据表
    #[arg(long, default_value_t = false)]
    pub no_initial_load: bool,

    /// 单次请求超时（秒），缺省为一直等待
    #[arg(long, env = "NOON_CONSOLE_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// 日志格式
    #[arg(long, env = "NOON_CONSOLE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

// ==========================================
// ConsoleConfig - 校验后的配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub base_url: String,
    pub locale: String,
    pub filter_latest_vessel: bool,
    pub load_on_start: bool,
    pub request_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            filter_latest_vessel: true,
            load_on_start: true,
            request_timeout: None,
            log_format: LogFormat::Text,
        }
    }
}

impl TryFrom<ConsoleArgs> for ConsoleConfig {
    type Error = ConfigError;

    fn try_from(args: ConsoleArgs) -> Result<Self, Self::Error> {
        let base_url = normalize_base_url(&args.base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(args.base_url.clone()))?;

        let locale = args.locale.trim().to_string();
        if !i18n::is_supported(&locale) {
            return Err(ConfigError::UnsupportedLocale(locale));
        }

        let request_timeout = match args.request_timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            base_url,
            locale,
            filter_latest_vessel: !args.no_vessel_filter,
            load_on_start: !args.no_initial_load,
            request_timeout,
            log_format: args.log_format,
        })
    }
}
