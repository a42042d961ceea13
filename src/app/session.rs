// ==========================================
// 船舶正午报告控制台 - 矛盾会话
// ==========================================
// 职责: 矛盾检测到最终保存之间的会话状态
// 红线: 同一时刻最多一个会话；对话历史归属于会话，随会话创建/丢弃
// ==========================================

use uuid::Uuid;

use crate::api::dto::ChatRequest;
use crate::domain::{ChatAction, ChatMessage, ReportEntry};

/// 会话结束时的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 原条目确认
    Confirmed,
    /// 装载状态已更正
    StatusCorrected(String),
    /// 报告类型已更正
    ReportTypeCorrected(String),
}

// ==========================================
// ContradictionSession - 矛盾会话
// ==========================================
#[derive(Debug, Clone)]
pub struct ContradictionSession {
    id: Uuid,
    entry: ReportEntry,
    previous_status: Option<String>,
    history: Vec<ChatMessage>,
}

impl ContradictionSession {
    /// 开启会话，历史以一条机器人消息开头
    pub fn start(
        entry: ReportEntry,
        previous_status: Option<String>,
        opening_message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry,
            previous_status,
            history: vec![ChatMessage::bot(opening_message)],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn entry(&self) -> &ReportEntry {
        &self.entry
    }

    pub fn previous_status(&self) -> Option<&str> {
        self.previous_status.as_deref()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.history.push(message);
    }

    /// 构造 chat_response 请求（完整历史 + 矛盾上下文）
    pub fn chat_request(&self) -> ChatRequest {
        ChatRequest {
            conversation_history: self.history.clone(),
            vessel_name: self.entry.vessel_name.clone(),
            previous_status: self.previous_status.clone(),
            new_status: self.entry.laden_ballast.clone(),
            new_report_type: self.entry.report_type.clone(),
        }
    }

    /// 应用终结动作对应的更正
    ///
    /// # 返回
    /// - Some(Resolution): 终结动作，条目已按需改写
    /// - None: 非终结动作，条目不变
    pub fn apply(&mut self, action: &ChatAction) -> Option<Resolution> {
        match action {
            ChatAction::Proceed => Some(Resolution::Confirmed),
            ChatAction::CorrectStatus { corrected_status } => {
                self.entry.laden_ballast = corrected_status.clone();
                Some(Resolution::StatusCorrected(corrected_status.clone()))
            }
            ChatAction::CorrectReportType {
                corrected_report_type,
            } => {
                self.entry.report_type = corrected_report_type.clone();
                Some(Resolution::ReportTypeCorrected(corrected_report_type.clone()))
            }
            ChatAction::Clarify | ChatAction::Unrecognized(_) => None,
        }
    }
}
