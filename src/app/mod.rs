// ==========================================
// 船舶正午报告控制台 - 应用层
// ==========================================
// 职责: 表单、矛盾会话、控制台状态机与终端交互
// ==========================================

pub mod console;
pub mod error;
pub mod form;
pub mod session;
pub mod terminal;

// 重导出
pub use console::{ChatOutcome, ConsoleOptions, DataView, EntryConsole, Notice, SubmitOutcome};
pub use error::{ConsoleError, ConsoleResult};
pub use form::{EntryForm, FormError, FormField};
pub use session::{ContradictionSession, Resolution};
