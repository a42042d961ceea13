// ==========================================
// 船舶正午报告控制台 - API 层
// ==========================================
// 职责: 访问外部后端（矛盾检测、对话、存储）
// ==========================================

pub mod backend;
pub mod dto;
pub mod error;
pub mod http_backend;

// 重导出核心类型
pub use backend::NoonReportBackend;
pub use dto::{
    AddEntryRequest, ChatRequest, ChatResponse, ContradictionCheckRequest,
    ContradictionCheckResponse, NoonDataResponse,
};
pub use error::{ApiError, ApiResult};
pub use http_backend::HttpBackend;
