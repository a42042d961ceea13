// ==========================================
// 船舶正午报告控制台 - 后端接口 Trait
// ==========================================
// 职责: 定义控制台所需的后端访问接口（不包含实现）
// 实现者: HttpBackend（reqwest）；测试中使用记录型假后端
// ==========================================

use async_trait::async_trait;

use crate::api::dto::{ChatRequest, ChatResponse, ContradictionCheckRequest, ContradictionCheckResponse};
use crate::api::error::ApiResult;
use crate::domain::ReportEntry;

// ==========================================
// NoonReportBackend Trait
// ==========================================
#[async_trait]
pub trait NoonReportBackend: Send + Sync {
    /// 查询全部正午报告（GET /get_noon_data）
    async fn get_noon_data(&self) -> ApiResult<Vec<ReportEntry>>;

    /// 矛盾检测（POST /check_contradiction）
    async fn check_contradiction(
        &self,
        request: &ContradictionCheckRequest,
    ) -> ApiResult<ContradictionCheckResponse>;

    /// 对话一轮（POST /chat_response）
    async fn chat_response(&self, request: &ChatRequest) -> ApiResult<ChatResponse>;

    /// 保存条目（POST /add_entry）
    ///
    /// 响应体被忽略，成功状态即视为确认
    async fn add_entry(&self, entry: &ReportEntry) -> ApiResult<()>;
}
