// ==========================================
// 船舶正午报告控制台 - 对话领域模型
// ==========================================
// 职责: 对话消息、角色、后端返回的对话动作
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ChatRole - 消息角色
// ==========================================
// 序列化格式: 小写 (与后端 conversation_history 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Bot => "bot",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// ChatMessage - 对话消息
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            content: content.into(),
        }
    }
}

// ==========================================
// ChatAction - 对话动作
// ==========================================
// 后端 action 字段的强类型表示
// 终结动作: Proceed / CorrectStatus / CorrectReportType
// 非终结动作: Clarify / Unrecognized（会话保持打开）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// 按原条目保存
    Proceed,
    /// 改写装载状态后保存
    CorrectStatus { corrected_status: String },
    /// 改写报告类型后保存
    CorrectReportType { corrected_report_type: String },
    /// 后端需要用户继续澄清（含缺省 action）
    Clarify,
    /// 未知 action 字符串
    Unrecognized(String),
}

impl ChatAction {
    /// 从后端原始字段构造动作
    ///
    /// # 规则
    /// - action 缺省或为 "clarify" → Clarify
    /// - correct_* 缺少纠正值（或为空白）→ Clarify
    pub fn from_wire(
        action: Option<&str>,
        corrected_status: Option<&str>,
        corrected_report_type: Option<&str>,
    ) -> Self {
        let non_blank = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        match action.map(str::trim) {
            None | Some("") | Some("clarify") => ChatAction::Clarify,
            Some("proceed") => ChatAction::Proceed,
            Some("correct_status") => match non_blank(corrected_status) {
                Some(corrected_status) => ChatAction::CorrectStatus { corrected_status },
                None => ChatAction::Clarify,
            },
            Some("correct_report_type") => match non_blank(corrected_report_type) {
                Some(corrected_report_type) => {
                    ChatAction::CorrectReportType { corrected_report_type }
                }
                None => ChatAction::Clarify,
            },
            Some(other) => ChatAction::Unrecognized(other.to_string()),
        }
    }
}
