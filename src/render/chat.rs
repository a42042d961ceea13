// ==========================================
// 船舶正午报告控制台 - 对话渲染
// ==========================================
// 职责: 将对话历史渲染为文本或 HTML
// ==========================================

use std::fmt::Write as _;

use crate::domain::{ChatMessage, ChatRole};
use crate::i18n::t;

fn speaker(role: ChatRole) -> String {
    match role {
        ChatRole::User => t("chat.you"),
        ChatRole::Bot => t("chat.bot"),
    }
}

/// 渲染为终端文本，每条消息一行（多行内容缩进续行）
pub fn render_chat_text(history: &[ChatMessage]) -> String {
    let mut out = String::new();
    for msg in history {
        let label = speaker(msg.role);
        let indent = " ".repeat(label.chars().count() + 2);
        for (i, line) in msg.content.lines().enumerate() {
            if i == 0 {
                let _ = writeln!(out, "{}: {}", label, line);
            } else {
                let _ = writeln!(out, "{}{}", indent, line);
            }
        }
        if msg.content.is_empty() {
            let _ = writeln!(out, "{}:", label);
        }
    }
    out
}

/// 渲染为 HTML 片段
pub fn render_chat_html(history: &[ChatMessage]) -> String {
    let mut html = String::new();
    for msg in history {
        let _ = write!(
            html,
            "<div class=\"chat-msg {}\">{}</div>",
            msg.role.as_str(),
            v_htmlescape::escape(&msg.content)
        );
    }
    html
}
