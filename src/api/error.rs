// ==========================================
// 船舶正午报告控制台 - API层错误类型
// ==========================================
// 职责: 定义后端访问错误，区分传输、状态码与解码失败
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("后端地址无效: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP 客户端初始化失败: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("后端请求失败: endpoint={endpoint}, {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("后端返回异常状态: endpoint={endpoint}, status={status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("响应解码失败: endpoint={endpoint}, {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// 出错的端点路径（InvalidBaseUrl / ClientBuild 无端点）
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            ApiError::InvalidBaseUrl(_) | ApiError::ClientBuild(_) => None,
            ApiError::Http { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => Some(endpoint),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
