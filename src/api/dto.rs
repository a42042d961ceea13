// ==========================================
// 船舶正午报告控制台 - 后端接口 DTO
// ==========================================
// 职责: 四个 HTTP JSON 端点的请求/响应结构
// 端点:
// - GET  /get_noon_data
// - POST /check_contradiction
// - POST /chat_response
// - POST /add_entry
// ==========================================

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{ChatAction, ChatMessage, ReportEntry};

// ==========================================
// GET /get_noon_data
// ==========================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoonDataResponse {
    #[serde(default, deserialize_with = "deserialize_rows")]
    pub data: Vec<ReportEntry>,
}

/// 逐行解码，无法解析的行跳过并记录告警，不影响其余行
fn deserialize_rows<'de, D>(deserializer: D) -> Result<Vec<ReportEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw_rows = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let total = raw_rows.len();

    let rows: Vec<ReportEntry> = raw_rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match ReportEntry::deserialize(&raw) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(index, row = %raw, error = %err, "skipping malformed noon data row");
                None
            }
        })
        .collect();

    if rows.len() < total {
        tracing::warn!(kept = rows.len(), total, "noon data contained malformed rows");
    }
    Ok(rows)
}

// ==========================================
// POST /check_contradiction
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContradictionCheckRequest {
    pub vessel_name: String,
    pub new_laden_ballast: String,
    pub new_report_type: String,
}

impl ContradictionCheckRequest {
    pub fn for_entry(entry: &ReportEntry) -> Self {
        Self {
            vessel_name: entry.vessel_name.clone(),
            new_laden_ballast: entry.laden_ballast.clone(),
            new_report_type: entry.report_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContradictionCheckResponse {
    pub is_contradiction: bool,
    #[serde(default)]
    pub previous_status: Option<String>,
    /// 后端生成的首条说明（为空时使用默认提示）
    #[serde(default)]
    pub reason: Option<String>,
}

// ==========================================
// POST /chat_response
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub conversation_history: Vec<ChatMessage>,
    pub vessel_name: String,
    pub previous_status: Option<String>,
    pub new_status: String,
    pub new_report_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    pub bot_response: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub corrected_status: Option<String>,
    #[serde(default)]
    pub corrected_report_type: Option<String>,
}

impl ChatResponse {
    /// 将 action 字符串转换为强类型动作
    pub fn action(&self) -> ChatAction {
        ChatAction::from_wire(
            self.action.as_deref(),
            self.corrected_status.as_deref(),
            self.corrected_report_type.as_deref(),
        )
    }
}

// ==========================================
// POST /add_entry
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddEntryRequest {
    pub entry: ReportEntry,
}
