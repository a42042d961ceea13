// ==========================================
// 船舶正午报告控制台 - 核心库
// ==========================================
// 技术栈: Tokio + Reqwest + Rust
// 系统定位: 正午报告录入客户端（矛盾检测与存储由后端负责）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 报告条目与对话
pub mod domain;

// API 层 - 后端访问
pub mod api;

// 应用层 - 控制台状态机与终端交互
pub mod app;

// 渲染层 - 数据表与对话
pub mod render;

// 配置层 - 命令行与环境变量
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{ChatAction, ChatMessage, ChatRole, LadenBallast, ReportEntry};
pub use api::{ApiError, HttpBackend, NoonReportBackend};
pub use app::{ChatOutcome, ConsoleError, ConsoleOptions, DataView, EntryConsole, Notice, SubmitOutcome};
pub use config::ConsoleConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Noon Report Console";
