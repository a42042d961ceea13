// ==========================================
// 记录型假后端 - 用于集成测试
// ==========================================
// 职责: 按脚本返回响应，并记录每一次调用
// ==========================================

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use noon_report_console::api::{
    ApiError, ApiResult, ChatRequest, ChatResponse, ContradictionCheckRequest,
    ContradictionCheckResponse, NoonReportBackend,
};
use noon_report_console::{logging, ReportEntry};

/// 后端调用记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetNoonData,
    CheckContradiction(ContradictionCheckRequest),
    ChatResponse(ChatRequest),
    AddEntry(ReportEntry),
}

#[derive(Default)]
pub struct MockBackend {
    rows: Mutex<Vec<ReportEntry>>,
    checks: Mutex<VecDeque<ContradictionCheckResponse>>,
    chats: Mutex<VecDeque<ChatResponse>>,
    calls: Mutex<Vec<Call>>,
    failing_adds: Mutex<usize>,
    fail_data: Mutex<bool>,
}

impl MockBackend {
    pub fn new() -> Self {
        logging::init_test();
        Self::default()
    }

    pub fn with_rows(rows: Vec<ReportEntry>) -> Self {
        let backend = Self::new();
        *backend.rows.lock().unwrap() = rows;
        backend
    }

    pub fn push_check(&self, response: ContradictionCheckResponse) {
        self.checks.lock().unwrap().push_back(response);
    }

    pub fn push_chat(&self, response: ChatResponse) {
        self.chats.lock().unwrap().push_back(response);
    }

    /// 接下来 n 次 add_entry 返回 503
    pub fn fail_next_adds(&self, n: usize) {
        *self.failing_adds.lock().unwrap() = n;
    }

    pub fn fail_noon_data(&self, fail: bool) {
        *self.fail_data.lock().unwrap() = fail;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn added_entries(&self) -> Vec<ReportEntry> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::AddEntry(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::ChatResponse(req) => Some(req),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl NoonReportBackend for MockBackend {
    async fn get_noon_data(&self) -> ApiResult<Vec<ReportEntry>> {
        self.record(Call::GetNoonData);
        if *self.fail_data.lock().unwrap() {
            return Err(ApiError::Status {
                endpoint: "/get_noon_data",
                status: 500,
            });
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn check_contradiction(
        &self,
        request: &ContradictionCheckRequest,
    ) -> ApiResult<ContradictionCheckResponse> {
        self.record(Call::CheckContradiction(request.clone()));
        Ok(self.checks.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn chat_response(&self, request: &ChatRequest) -> ApiResult<ChatResponse> {
        self.record(Call::ChatResponse(request.clone()));
        Ok(self.chats.lock().unwrap().pop_front().unwrap_or_else(|| ChatResponse {
            bot_response: "Could you clarify?".to_string(),
            action: Some("clarify".to_string()),
            ..ChatResponse::default()
        }))
    }

    async fn add_entry(&self, entry: &ReportEntry) -> ApiResult<()> {
        {
            let mut failing = self.failing_adds.lock().unwrap();
            if *failing > 0 {
                *failing -= 1;
                return Err(ApiError::Status {
                    endpoint: "/add_entry",
                    status: 503,
                });
            }
        }
        self.record(Call::AddEntry(entry.clone()));
        // 与后端一致: 保存后可被查询
        self.rows.lock().unwrap().push(entry.clone());
        Ok(())
    }
}
