// ==========================================
// 船舶正午报告控制台 - 渲染层
// ==========================================
// 职责: 数据表与对话的纯渲染函数（文本 / HTML）
// ==========================================

pub mod chat;
pub mod table;

pub use chat::{render_chat_html, render_chat_text};
pub use table::{render_table_html, render_table_text};
