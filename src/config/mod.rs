// ==========================================
// 船舶正午报告控制台 - 配置层
// ==========================================
// 职责: 控制台运行配置（后端地址、语言、显示选项、日志格式）
// 来源: 命令行参数 + 环境变量
// ==========================================

pub mod console_config;

// 重导出
pub use console_config::{ConfigError, ConsoleArgs, ConsoleConfig, LogFormat};
