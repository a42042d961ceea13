// ==========================================
// 船舶正午报告控制台 - 领域模型层
// ==========================================
// 职责: 定义报告条目、对话消息与对话动作
// 红线: 不含网络访问逻辑,不含界面状态
// ==========================================

pub mod chat;
pub mod report;

// 重导出核心类型
pub use chat::{ChatAction, ChatMessage, ChatRole};
pub use report::{parse_report_date, LadenBallast, ReportEntry, DATE_FORMAT, REPORT_TYPES};
